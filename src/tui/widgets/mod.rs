//! TUI widgets for branchgrid.

mod filter_picker;
mod grid;
mod header;
mod help;
mod page_size;
mod panels;
mod quit_confirm;

pub use filter_picker::render_filter_picker;
pub use grid::render_grid;
pub use header::{render_header, render_status};
pub use help::render_help;
pub use page_size::render_page_size;
pub use panels::{render_error, render_loading};
pub use quit_confirm::render_quit_confirm;

use ratatui::layout::Rect;

/// Centers a popup of `width` x `height` inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
