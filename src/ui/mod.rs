//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, playback timing
//! - **[`panes`]**: stateless render functions (bar chart, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`Algorithm`] and a seeded rng and call [`App::run`] to start the event
//! loop.
//!
//! [`Algorithm`]: crate::algorithms::Algorithm
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
