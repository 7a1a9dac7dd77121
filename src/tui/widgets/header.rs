//! Header bar and status line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::source::LoadState;
use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

/// Renders the header bar: name, source, load state, filter and counts.
pub fn render_header(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Name
        Constraint::Min(20),    // Source
        Constraint::Length(26), // Load state
        Constraint::Length(46), // Filter / counts
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(" branchgrid ").style(Styles::header()),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(format!(" {}", state.source_label)).style(Styles::header()),
        chunks[1],
    );

    let (load_text, load_style) = match &state.load {
        LoadState::Loading => (" LOADING ".to_string(), Styles::header()),
        LoadState::Loaded { count } => {
            let at = state
                .loaded_at
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default();
            (format!(" LOADED {count} @ {at} "), Styles::header().fg(Theme::OK))
        }
        LoadState::Failed(_) => (" FAILED ".to_string(), Styles::header().fg(Theme::ERROR)),
    };
    frame.render_widget(Paragraph::new(load_text).style(load_style), chunks[2]);

    let info = if state.is_loaded() {
        let shown = state.filtered_len();
        format!(
            " {} | {}/{} rows ",
            state.view.filter,
            shown,
            state.collection.len()
        )
    } else {
        String::new()
    };
    frame.render_widget(Paragraph::new(info).style(Styles::header()), chunks[3]);
}

/// Renders the status line: the last message, or key hints.
pub fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status_message {
        Some(message) => Line::from(Span::styled(format!(" {message}"), Styles::key_hint())),
        None => {
            let hints = [
                ("1-8", "sort"),
                ("f", "filter"),
                ("←→", "page"),
                ("z", "page size"),
                ("Enter", "drill down"),
                ("d", "delete"),
                ("?", "help"),
                ("q", "quit"),
            ];
            let spans: Vec<Span> = hints
                .iter()
                .flat_map(|(key, what)| {
                    vec![
                        Span::styled(format!(" {key}"), Styles::key_hint()),
                        Span::styled(format!(" {what} "), Styles::dim()),
                    ]
                })
                .collect();
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
