//! multiwt - terminal wavetable synthesizer
//!
//! Run with: cargo run
//!
//! Keys: Up/Down frequency, Left/Right amplitude, 1-9 waveform, Q to quit.
//! Set RUST_LOG=info to see device and engine setup.

mod app;
mod ui;

use app::WavetableApp;
use multiwt::{EngineConfig, Waveform};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    WavetableApp::new()
        .config(EngineConfig::default())
        .frequency(220.0)
        .level(0.5)
        .waveform(Waveform::Sine)
        .run()
}
