//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered;
use crate::tui::style::Styles;

const KEYS: &[(&str, &str)] = &[
    ("1-8", "sort by column (again to reverse)"),
    ("f  /", "open filter selector"),
    ("← h", "previous page"),
    ("→ l", "next page"),
    ("z", "set rows per page"),
    ("↑↓ j k", "move selection"),
    ("Home End", "first / last row on page"),
    ("Enter", "show only the selected row's location"),
    ("d  Del", "delete selected row"),
    ("?", "toggle this help"),
    ("q", "quit (asks first)"),
    ("Ctrl+C", "quit immediately"),
];

fn help_content() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Keys:", Styles::key_hint()))];
    lines.extend(KEYS.iter().map(|(key, what)| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Styles::key_hint()),
            Span::raw(*what),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Mouse:", Styles::key_hint())));
    lines.push(Line::from("  click a header to sort"));
    lines.push(Line::from("  click a Location cell to filter to it"));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Filter selector:", Styles::key_hint())));
    lines.extend([
        Line::from("  Select a Filter  show every record"),
        Line::from("  All Locations    one summed row per location, Branch = Total"),
        Line::from("  <location>       records of that location"),
        Line::from("  <branch>         records of that branch"),
    ]);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "The first row under the header totals every filtered record, not just this page.",
        Styles::dim(),
    )));
    lines
}

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 80);
    let popup_height = (area.height * 80 / 100).clamp(10, 30);
    let popup_area = centered(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_content();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Styles::default());
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Styles::dim()),
        Span::styled("?", Styles::key_hint()),
        Span::styled(" or ", Styles::dim()),
        Span::styled("Esc", Styles::key_hint()),
        Span::styled(" to close, ", Styles::dim()),
        Span::styled("↑↓", Styles::key_hint()),
        Span::styled(" to scroll", Styles::dim()),
        Span::styled(scroll_info, Styles::dim()),
    ]));
    frame.render_widget(footer, chunks[1]);
}
