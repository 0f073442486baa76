//! TUI pane rendering modules
//!
//! Stateless render functions for the visible panes:
//!
//! - [`bars`]: the working array as a bar chart with highlight colors
//! - [`status`]: status bar with keybindings and run state
//!
//! Each pane module exports a primary `render_*` function that draws into a
//! ratatui frame area.

pub mod bars;
pub mod status;

pub use bars::render_bars_pane;
pub use status::render_status_bar;
