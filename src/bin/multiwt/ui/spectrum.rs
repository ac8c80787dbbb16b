//! Spectrum widget
//!
//! Magnitude of every FFT bin up to `MAX_DISPLAY_HZ`. The control range tops
//! out at 1 kHz, so this shows the fundamental and the first few partials of
//! the gated and noisy tables.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

const MAX_DISPLAY_HZ: f64 = 5_000.0;
const FLOOR_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// (frequency_hz, magnitude_db) per displayed bin
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(fft_len: usize, sample_rate: f64) -> Self {
        let fft_len = fft_len.max(2);
        let fft = FftPlanner::new().plan_fft_forward(fft_len);

        let denom = (fft_len - 1) as f32;
        let window = (0..fft_len)
            .map(|i| 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos()))
            .collect();

        let bin_hz = sample_rate / fft_len as f64;
        let nyquist_bins = fft_len / 2;
        let shown = ((MAX_DISPLAY_HZ / bin_hz) as usize).clamp(1, nyquist_bins);
        let spectrum = (0..shown).map(|k| (k as f64 * bin_hz, FLOOR_DB)).collect();

        Self {
            window,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); fft_len],
            spectrum,
        }
    }

    /// Recompute from one window of samples; ignored if the length is wrong.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for ((bin, &s), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *bin = Complex::new(s * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        for ((_, db), bin) in self.spectrum.iter_mut().zip(&self.scratch) {
            let power = bin.norm_sqr().max(1e-12) as f64;
            *db = (10.0 * power.log10()).max(FLOOR_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_freq = spectrum.last().map(|(f, _)| *f).unwrap_or(1.0).max(1.0);
    let max_db = spectrum.iter().map(|(_, db)| *db).fold(FLOOR_DB, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().title(" Spectrum ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([0.0, max_freq])
                .labels(vec!["0".to_string(), format!("{:.0} Hz", max_freq)])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, max_db.max(0.0) + 10.0])
                .labels(vec!["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
