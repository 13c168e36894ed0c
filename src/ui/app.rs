//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::config::Settings;
use crate::constants::{MAX_STEP_DELAY_MS, MIN_STEP_DELAY_MS};
use crate::controller::{Controller, Replay};
use crate::errors::SortError;
use crate::ui::panes::{self, BarsView, MenuView, PlaybackState, StatusView};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

const MIN_STEP_DELAY: Duration = Duration::from_millis(MIN_STEP_DELAY_MS);
const MAX_STEP_DELAY: Duration = Duration::from_millis(MAX_STEP_DELAY_MS);

/// A recorded run being played back
struct Playback {
    replay: Replay,
    /// Number of steps applied so far (0 shows the input)
    cursor: usize,
}

impl Playback {
    fn at_end(&self) -> bool {
        self.cursor >= self.replay.len()
    }

    /// Values and highlights for the current cursor position
    fn frame(&self) -> (&[i64], &[usize]) {
        match self.cursor.checked_sub(1).and_then(|i| self.replay.step(i)) {
            Some(step) => (step.values.as_slice(), step.highlighted.as_slice()),
            None => (self.replay.input(), &[][..]),
        }
    }
}

/// The main application state
pub struct App<R> {
    /// Owner of the current array and selected algorithm
    pub controller: Controller<R>,

    /// The run being animated, if any
    playback: Option<Playback>,

    /// Size used by the next regenerate
    pub array_size: usize,

    /// Pause between steps in play mode
    pub step_delay: Duration,

    /// Memory budget for recording one run
    pub snapshot_limit: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Whether the array on screen is a freshly committed result
    pub just_sorted: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl<R: Rng> App<R> {
    /// Create a new app, generating the first array
    pub fn new(mut controller: Controller<R>, settings: &Settings) -> Self {
        let array_size = controller.bounds().clamp(settings.array_size);
        controller.select(settings.algorithm);

        let mut app = App {
            controller,
            playback: None,
            array_size,
            step_delay: settings
                .step_delay()
                .clamp(MIN_STEP_DELAY, MAX_STEP_DELAY),
            snapshot_limit: settings.snapshot_limit,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            is_playing: false,
            just_sorted: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };

        if let Err(e) = app.controller.ensure_array(array_size) {
            app.report_error(e);
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.step_delay {
                self.step_forward();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            let timeout = self.step_delay.min(Duration::from_millis(50));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn playback_state(&self) -> PlaybackState {
        match (&self.playback, self.is_playing) {
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
            (None, _) if self.just_sorted => PlaybackState::Done,
            (None, _) => PlaybackState::Idle,
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Chart and menu side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let (values, highlighted, title) = match &self.playback {
            Some(playback) => {
                let (values, highlighted) = playback.frame();
                (values, highlighted, playback.replay.algorithm().name())
            }
            None => (
                self.controller.current().unwrap_or_default(),
                &[][..],
                "Array",
            ),
        };

        panes::render_bars_pane(
            frame,
            columns[0],
            &BarsView {
                title,
                values,
                highlighted,
                done: self.just_sorted,
            },
        );

        let bounds = self.controller.bounds();
        panes::render_menu_pane(
            frame,
            columns[1],
            &MenuView {
                selected: self.controller.selected(),
                array_size: self.array_size,
                min_size: bounds.min(),
                max_size: bounds.max(),
                step_delay: self.step_delay,
                locked: self.playback.is_some(),
            },
        );

        let (step, total_steps) = self
            .playback
            .as_ref()
            .map(|p| (p.cursor, p.replay.len()))
            .unwrap_or((0, 0));
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusView {
                message: &self.status_message,
                step,
                total_steps,
                state: self.playback_state(),
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.start_run(),
            KeyCode::Esc => self.abort_run(),
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.playback.is_some()
                    && self.last_space_press.elapsed() >= Duration::from_millis(200)
                {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    self.set_status(if self.is_playing { "Playing..." } else { "Paused" });
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Up => self.select(self.controller.selected().prev()),
            KeyCode::Down | KeyCode::Tab => self.select(self.controller.selected().next()),
            KeyCode::Char('r') | KeyCode::Char('R') => self.regenerate(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(1),
            KeyCode::Char('-') | KeyCode::Char('_') => self.resize(-1),
            KeyCode::Char('[') => self.set_delay(self.step_delay * 2),
            KeyCode::Char(']') => self.set_delay(self.step_delay / 2),
            _ => {}
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn report_error(&mut self, error: SortError) {
        debug!(error = %error, "reporting error");
        self.status_message = error.to_string();
        self.status_is_error = true;
    }

    fn select(&mut self, algorithm: Algorithm) {
        if self.playback.is_some() {
            return;
        }
        self.controller.select(algorithm);
        self.set_status(format!("Selected {}", algorithm));
    }

    fn regenerate(&mut self) {
        match self.controller.regenerate(self.array_size) {
            Ok(_) => {
                self.just_sorted = false;
                self.set_status(format!("Generated {} new values", self.array_size));
            }
            Err(e) => self.report_error(e),
        }
    }

    fn resize(&mut self, delta: isize) {
        let bounds = self.controller.bounds();
        let size = self.array_size.saturating_add_signed(delta);
        self.array_size = bounds.clamp(size);
        self.set_status(format!(
            "Array size {} (press r to generate)",
            self.array_size
        ));
    }

    fn set_delay(&mut self, delay: Duration) {
        self.step_delay = delay.clamp(MIN_STEP_DELAY, MAX_STEP_DELAY);
        self.set_status(format!("Step delay {} ms", self.step_delay.as_millis()));
    }

    /// Record the selected algorithm over the current array and start playing it
    fn start_run(&mut self) {
        if self.playback.is_some() {
            // A run is already on screen; starting again is ignored
            return;
        }
        match self.controller.record(self.snapshot_limit) {
            Ok(replay) => {
                self.set_status(format!(
                    "Sorting with {} ({} steps, {} KiB recorded)",
                    replay.algorithm(),
                    replay.len(),
                    replay.log().memory_usage().div_ceil(1024)
                ));
                self.playback = Some(Playback { replay, cursor: 0 });
                self.is_playing = true;
                self.just_sorted = false;
                self.last_play_time = Instant::now();
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Discard the run on screen; the committed array is shown again
    fn abort_run(&mut self) {
        if self.playback.take().is_some() {
            self.controller.abort();
            self.is_playing = false;
            self.set_status("Sorting aborted");
        }
    }

    /// Advance one step, committing the run once every step has been shown
    fn step_forward(&mut self) {
        let Some(playback) = self.playback.as_mut() else {
            self.is_playing = false;
            return;
        };

        if !playback.at_end() {
            playback.cursor += 1;
            return;
        }

        if let Some(playback) = self.playback.take() {
            self.is_playing = false;
            match self.controller.commit(playback.replay) {
                Ok(_) => {
                    self.just_sorted = true;
                    self.set_status("Sorting complete!");
                }
                Err(e) => self.report_error(e),
            }
        }
    }

    fn step_backward(&mut self) {
        match self.playback.as_mut() {
            Some(playback) if playback.cursor > 0 => playback.cursor -= 1,
            Some(_) => self.set_status("Already at the start of the run"),
            None => {}
        }
    }
}
