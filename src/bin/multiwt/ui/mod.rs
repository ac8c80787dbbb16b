//! TUI for multiwt
//!
//! Keyboard control surface plus oscilloscope, spectrum and status bar.

mod spectrum;
mod transport;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

use multiwt::{io::ScopeBuffer, ControlSurface};

use super::app::LoadMeter;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use transport::{render_status, AudioStats};
use waveform::render_waveform;

/// How often the CPU figure is refreshed
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(50);
const FREQUENCY_STEP: f64 = 10.0;
const FREQUENCY_COARSE_STEP: f64 = 100.0;
const LEVEL_STEP: f64 = 0.05;

pub struct UiApp {
    surface: ControlSurface,
    scope: ScopeBuffer,
    load: Arc<LoadMeter>,
    sample_rate: f64,
    /// Oldest-first copy of the scope window
    vis_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    load_display: f32,
    last_load_poll: Instant,
    should_quit: bool,
}

impl UiApp {
    pub fn new(surface: ControlSurface, scope: ScopeBuffer, load: Arc<LoadMeter>, sample_rate: f64) -> Self {
        let window = scope.window();
        Self {
            surface,
            scope,
            load,
            sample_rate,
            vis_buffer: vec![0.0; window],
            spectrum: SpectrumAnalyzer::new(window, sample_rate),
            load_display: 0.0,
            last_load_poll: Instant::now(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            if self.scope.poll() > 0 {
                self.scope.snapshot(&mut self.vis_buffer);
                self.spectrum.update(&self.vis_buffer);
            }

            if self.last_load_poll.elapsed() >= LOAD_POLL_INTERVAL {
                self.load_display = self.load.load();
                self.last_load_poll = Instant::now();
            }

            terminal.draw(|frame| self.render(frame))?;

            // ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.surface.step_frequency(FREQUENCY_STEP),
            KeyCode::Down => self.surface.step_frequency(-FREQUENCY_STEP),
            KeyCode::PageUp => self.surface.step_frequency(FREQUENCY_COARSE_STEP),
            KeyCode::PageDown => self.surface.step_frequency(-FREQUENCY_COARSE_STEP),
            KeyCode::Right => self.surface.step_amplitude(LEVEL_STEP),
            KeyCode::Left => self.surface.step_amplitude(-LEVEL_STEP),
            KeyCode::Tab => self.surface.cycle_waveform(1),
            KeyCode::BackTab => self.surface.cycle_waveform(-1),
            KeyCode::Char(c @ '1'..='9') => {
                self.surface.select(c as u8 - b'0');
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(8),    // Scope + spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let stats = AudioStats::from_buffer(&self.vis_buffer);
        render_status(
            frame,
            rows[0],
            &self.surface.snapshot(),
            self.sample_rate,
            self.load_display,
            &stats,
        );
        render_waveform(frame, panels[0], &self.vis_buffer);
        render_spectrum(frame, panels[1], self.spectrum.data());

        let help = Paragraph::new(
            " [Up/Down] Freq  [PgUp/PgDn] Freq x10  [Left/Right] Amp  [1-9/Tab] Waveform  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[2]);
    }
}
