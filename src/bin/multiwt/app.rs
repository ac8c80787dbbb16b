//! Application builder: audio device, engine, and UI wiring

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SupportedBufferSize;
use log::{error, info};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use multiwt::{
    io::{interleave, scope_channel},
    ControlSurface, EngineConfig, PlaybackState, SynthesisEngine, Waveform, MAX_BLOCK_SIZE,
};

use super::ui::UiApp;

/// Scope ring capacity, in visualiser windows
const SCOPE_RING_BLOCKS: usize = 16;

/// Main application builder
pub struct WavetableApp {
    config: EngineConfig,
    frequency: f64,
    level: f64,
    waveform: Waveform,
}

impl WavetableApp {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            frequency: multiwt::synth::state::DEFAULT_FREQUENCY,
            level: 0.0,
            waveform: Waveform::Sine,
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Starting frequency in Hz
    pub fn frequency(mut self, hz: f64) -> Self {
        self.frequency = hz;
        self
    }

    /// Starting amplitude level, 0..=1
    pub fn level(mut self, level: f64) -> Self {
        self.level = level;
        self
    }

    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Open the default output device and run until the UI quits
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let supported = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = supported.sample_rate().0 as f64;
        let channels = supported.channels() as usize;
        let block_hint = match supported.buffer_size() {
            SupportedBufferSize::Range { max, .. } => (*max as usize).clamp(1, MAX_BLOCK_SIZE),
            SupportedBufferSize::Unknown => MAX_BLOCK_SIZE,
        };

        // Control side
        let state = Arc::new(PlaybackState::default());
        let surface = ControlSurface::new(Arc::clone(&state), self.config.glide);
        surface.set_target_frequency(self.frequency);
        surface.set_frequency(self.frequency);
        surface.set_amplitude_level(self.level);
        surface.select(self.waveform.selector());

        // Audio side
        let mut engine = SynthesisEngine::new(self.config, Arc::clone(&state))
            .wrap_err("invalid engine configuration")?;
        engine
            .configure(sample_rate, block_hint)
            .wrap_err("failed to configure engine for output device")?;

        info!(
            "output device: {} Hz, {} channels, block hint {}",
            sample_rate, channels, block_hint
        );

        let (mut scope_tx, scope) = scope_channel(self.config.table_size, SCOPE_RING_BLOCKS);
        let load = Arc::new(LoadMeter::default());

        let stream = device
            .build_output_stream(
                &supported.into(),
                {
                    let load = Arc::clone(&load);
                    let mut left = vec![0.0f32; MAX_BLOCK_SIZE];
                    let mut right = vec![0.0f32; MAX_BLOCK_SIZE];
                    move |data: &mut [f32], _| {
                        let started = Instant::now();
                        let total_frames = data.len() / channels;
                        let mut frames_written = 0;

                        while frames_written < total_frames {
                            let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                            let (l, r) = (&mut left[..frames], &mut right[..frames]);
                            engine.render_into(l, r, &mut scope_tx);

                            let out_off = frames_written * channels;
                            interleave(l, r, &mut data[out_off..out_off + frames * channels], channels);
                            frames_written += frames;
                        }

                        let budget = Duration::from_secs_f64(total_frames as f64 / sample_rate);
                        load.record(started.elapsed(), budget);
                    }
                },
                |err| error!("stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        let mut terminal = ratatui::init();
        let res = UiApp::new(surface, scope, load, sample_rate).run(&mut terminal);
        ratatui::restore();

        drop(stream);
        res
    }
}

impl Default for WavetableApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of the callback deadline spent rendering, published for the UI
#[derive(Debug, Default)]
pub struct LoadMeter {
    bits: AtomicU32,
}

impl LoadMeter {
    pub fn record(&self, elapsed: Duration, budget: Duration) {
        if budget.is_zero() {
            return;
        }
        let load = elapsed.as_secs_f32() / budget.as_secs_f32();
        self.bits.store(load.to_bits(), Ordering::Relaxed);
    }

    pub fn load(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}
