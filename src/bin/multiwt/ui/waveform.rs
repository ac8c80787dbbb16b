//! Oscilloscope widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render the scope window, downsampled to roughly one point per column
pub fn render_waveform(frame: &mut Frame, area: Rect, buffer: &[f32]) {
    let columns = area.width.max(1) as usize;
    let step = buffer.len().div_ceil(columns).max(1);
    let data: Vec<(f64, f64)> = buffer
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(i, &s)| (i as f64, s as f64))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().title(" Scope ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([0.0, buffer.len().max(1) as f64])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .labels(vec!["-1", "0", "1"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
