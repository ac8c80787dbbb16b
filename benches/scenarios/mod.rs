//! Real-world scenario benchmarks.
//!
//! Full engine blocks as the audio callback renders them, with the control
//! side moving parameters between blocks.

mod engine;

pub use engine::bench_engine;
