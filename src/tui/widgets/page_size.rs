//! Page-size input popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered;
use crate::tui::style::Styles;

/// Renders the page-size input with the current text and a cursor.
pub fn render_page_size(frame: &mut Frame, area: Rect, input: &str, current: usize) {
    let popup_area = centered(area, 44, 7);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Rows per page ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Input: ", Styles::key_hint()),
            Span::styled(
                format!("{input}_"),
                Styles::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(format!("Current: {current}"), Styles::dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::key_hint()),
            Span::styled(" → apply", Styles::dim()),
            Span::styled("   Esc", Styles::key_hint()),
            Span::styled(" → cancel", Styles::dim()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).style(Styles::default()), inner);
}
