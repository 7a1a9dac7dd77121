//! branchgrid - paginated, sortable, filterable grid over branch records.
//!
//! The library holds everything the `branchgrid` binary runs:
//! - `source` - fetching and validating the records (HTTP or file)
//! - `model` / `pipeline` - the canonical collection and the
//!   filter → aggregate → sort → paginate transformation
//! - `view` / `tui` - view models and their ratatui rendering

pub mod config;
pub mod fmt;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod tui;
pub mod view;
