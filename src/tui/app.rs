//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::config::Config;
use crate::source::{Loader, SourceError};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key, handle_mouse};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    loader: Option<Loader>,
    should_quit: bool,
}

impl App {
    /// Creates the app and starts the one fetch in the background.
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let source = config.build_source()?;
        let state = AppState::new(source.describe(), config.page_size);
        Ok(Self {
            state,
            loader: Some(Loader::spawn(source)),
            should_quit: false,
        })
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        let result = self.event_loop(&mut terminal, &events);

        // Restore terminal even if the loop failed
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) -> io::Result<()> {
        loop {
            self.poll_loader();

            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) | Ok(Event::Resize) => {}
                Ok(Event::Key(key)) => {
                    if handle_key(&mut self.state, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Mouse(mouse)) => handle_mouse(&mut self.state, mouse),
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                self.shutdown();
                return Ok(());
            }
        }
    }

    fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        if let Some(outcome) = loader.poll() {
            self.state.apply_outcome(outcome);
            self.loader = None;
        }
    }

    /// Abandons a fetch still in flight; its result is discarded.
    fn shutdown(&mut self) {
        if let Some(loader) = self.loader.take() {
            if loader.is_pending() {
                debug!("quitting with fetch in flight, cancelling");
            }
            loader.cancel();
        }
        info!(records = self.state.collection.len(), "exiting");
    }
}
