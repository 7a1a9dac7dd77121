//! UI-agnostic view models.
//!
//! [`grid::build_grid_view`] turns the pipeline output and view state into a
//! [`common::GridViewModel`]. The TUI then maps the view model to ratatui
//! widgets for rendering.

pub mod common;
pub mod grid;

pub use common::{GridViewModel, HeaderCell, PagerView, RowStyleClass, ViewCell, ViewRow};
pub use grid::build_grid_view;
