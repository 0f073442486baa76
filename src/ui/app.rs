//! Main TUI application state and logic

use crate::algorithms::{random_array, Algorithm};
use crate::controller::{Controller, StepOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Bounds for the interactive size and speed controls.
const MIN_SIZE: usize = 5;
const MAX_SIZE: usize = 200;
const MIN_SPEED: u32 = 1;
const MAX_SPEED: u32 = 60;

/// Bar heights are drawn from this range.
const VALUE_LOW: u32 = 1;
const VALUE_HIGH: u32 = 100;

/// The main application state
pub struct App {
    /// Run controller owning the live step sequence
    pub controller: Controller<u32>,

    /// Seeded random source for array generation
    rng: StdRng,

    /// Number of bars
    pub size: usize,

    /// Playback speed in steps per second
    pub speed: u32,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time a step was taken in play mode
    last_step_time: Instant,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app; the first array is drawn from `rng` immediately.
    pub fn new(algorithm: Algorithm, mut rng: StdRng, size: usize, speed: u32) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        let array = random_array(&mut rng, size, VALUE_LOW, VALUE_HIGH);
        App {
            controller: Controller::new(algorithm, array),
            rng,
            size,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_step_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Continuous playback: one pull per 1/speed seconds while Running
            if self.controller.is_running() && self.last_step_time.elapsed() >= self.step_interval()
            {
                if self.controller.step() == StepOutcome::Finished {
                    self.status_message = "Sorting complete".to_string();
                }
                self.last_step_time = Instant::now();
            }

            // Use poll with timeout so playback keeps moving without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn step_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.speed.max(1)))
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        // Bar pane on top, one-line status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        super::panes::render_bars_pane(
            frame,
            chunks[0],
            self.controller.current_snapshot(),
            self.controller.algorithm().name(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            self.controller.steps_taken(),
            self.controller.state(),
            self.speed,
            self.size,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle run/stop (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.controller.is_running() {
                        self.controller.stop();
                        self.status_message = "Stopped".to_string();
                    } else {
                        let algorithm = self.controller.algorithm();
                        let array = self.controller.array().to_vec();
                        self.controller.start(algorithm, &array);
                        self.last_step_time = Instant::now();
                        self.status_message = format!("Running {}...", algorithm.name());
                    }
                }
            }
            KeyCode::Right | KeyCode::Char('s') => {
                match self.controller.step() {
                    StepOutcome::Advanced => self.status_message = "Stepped".to_string(),
                    StepOutcome::Finished => self.status_message = "Sorting complete".to_string(),
                }
            }
            KeyCode::Enter => {
                // Run the remaining steps instantly
                while self.controller.step() == StepOutcome::Advanced {}
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Back to the unsorted baseline
                let array = self.controller.array().to_vec();
                self.controller.reset(array);
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('r') => {
                self.regenerate();
                self.status_message = "New random array".to_string();
            }
            KeyCode::Tab => {
                let algorithm = self.controller.algorithm().next();
                self.controller.set_algorithm(algorithm);
                self.status_message = algorithm.name().to_string();
            }
            KeyCode::Char(c @ '1'..='5') => {
                let algorithm = Algorithm::ALL[(c as u8 - b'1') as usize];
                self.controller.set_algorithm(algorithm);
                self.status_message = algorithm.name().to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.size = (self.size + 5).min(MAX_SIZE);
                self.regenerate();
                self.status_message = format!("Size {}", self.size);
            }
            KeyCode::Char('-') => {
                self.size = self.size.saturating_sub(5).max(MIN_SIZE);
                self.regenerate();
                self.status_message = format!("Size {}", self.size);
            }
            KeyCode::Char(']') => {
                self.speed = (self.speed + 1).min(MAX_SPEED);
                self.status_message = format!("Speed {} steps/s", self.speed);
            }
            KeyCode::Char('[') => {
                self.speed = self.speed.saturating_sub(1).max(MIN_SPEED);
                self.status_message = format!("Speed {} steps/s", self.speed);
            }
            _ => {}
        }
    }

    /// Replace the working array with a fresh random one and reset the run.
    fn regenerate(&mut self) {
        let array = random_array(&mut self.rng, self.size, VALUE_LOW, VALUE_HIGH);
        self.controller.reset(array);
    }
}
