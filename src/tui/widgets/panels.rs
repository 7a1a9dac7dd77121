//! Loading and error panels shown in place of the grid.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::style::Styles;

pub fn render_loading(frame: &mut Frame, area: Rect, source: &str) {
    let block = Block::default()
        .title(" Branch Grid ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let lines = vec![
        Line::from(""),
        Line::from("Loading…"),
        Line::from(Span::styled(source.to_string(), Styles::dim())),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the fetch failure. The grid is not shown.
pub fn render_error(frame: &mut Frame, area: Rect, source: &str, message: &str) {
    let block = Block::default()
        .title(" Error fetching data ")
        .borders(Borders::ALL)
        .border_style(Styles::error())
        .style(Styles::default());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Styles::error())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Source: ", Styles::dim()),
            Span::raw(source.to_string()),
        ]),
        Line::from(vec![
            Span::styled("q", Styles::key_hint()),
            Span::styled(" → quit", Styles::dim()),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
