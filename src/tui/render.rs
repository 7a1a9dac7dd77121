//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, InputMode, PopupState};
use super::widgets::{
    render_error, render_filter_picker, render_grid, render_header, render_help, render_loading,
    render_page_size, render_quit_confirm, render_status,
};
use crate::source::LoadState;

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(6),    // Content area
        Constraint::Length(1), // Status line
    ])
    .split(area);

    render_header(frame, chunks[0], state);

    if state.is_loaded() {
        render_grid(frame, chunks[1], state);
    } else if let LoadState::Failed(message) = &state.load {
        render_error(frame, chunks[1], &state.source_label, message);
    } else {
        render_loading(frame, chunks[1], &state.source_label);
    }

    render_status(frame, chunks[2], state);

    match state.input_mode {
        InputMode::FilterPicker => render_filter_picker(
            frame,
            area,
            &state.picker_options,
            state.picker_cursor,
            &state.view.filter,
        ),
        InputMode::PageSize => render_page_size(
            frame,
            area,
            &state.page_size_input,
            state.view.page_size.get(),
        ),
        InputMode::Normal => {}
    }

    // Popups are rendered last to overlay everything.
    match &mut state.popup {
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}
