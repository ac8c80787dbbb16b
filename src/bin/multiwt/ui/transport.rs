//! Status bar - waveform, frequency, amplitude, device rate and callback load

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use multiwt::synth::ControlSnapshot;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    controls: &ControlSnapshot,
    sample_rate: f64,
    load: f32,
    stats: &AudioStats,
) {
    let block = Block::default().title(" multiwt ").borders(Borders::ALL);

    let load_color = if load > 0.8 {
        Color::Red
    } else if load > 0.5 {
        Color::Yellow
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(
            format!(" {}  ", controls.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:.0} Hz  ", controls.frequency),
            Style::default().fg(Color::White),
        ),
    ];
    if controls.target_frequency != controls.frequency {
        spans.push(Span::styled(
            format!("(-> {:.0} Hz)  ", controls.target_frequency),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.extend([
        Span::styled(
            format!("Amp: {:.2}  ", controls.level),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("CPU: {:.3} %  ", load * 100.0),
            Style::default().fg(load_color),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
