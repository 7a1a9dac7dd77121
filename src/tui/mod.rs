//! Terminal User Interface for branchgrid.
//!
//! This module renders the grid with ratatui and maps keys and mouse clicks
//! onto the view controls in [`AppState`].

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, InputMode, PopupState};
