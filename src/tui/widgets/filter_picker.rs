//! Filter selector popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use super::centered;
use crate::pipeline::Filter;
use crate::tui::style::Styles;

/// Renders the filter options with the cursor row highlighted.
pub fn render_filter_picker(
    frame: &mut Frame,
    area: Rect,
    options: &[Filter],
    cursor: usize,
    active: &Filter,
) {
    let longest = options
        .iter()
        .map(|f| f.label().chars().count())
        .max()
        .unwrap_or(0) as u16;
    let popup_width = (longest + 8).clamp(30, 60);
    let popup_height = (options.len() as u16 + 2).clamp(5, area.height.saturating_sub(4).max(5));
    let popup_area = centered(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = options
        .iter()
        .map(|filter| {
            let marker = if filter == active { "● " } else { "  " };
            let style = match filter {
                Filter::None => Styles::dim(),
                Filter::AllLocations => Styles::aggregated(),
                Filter::Value(_) => Styles::default(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Styles::key_hint()),
                Span::styled(filter.label().to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Filter (Enter apply, Esc cancel) ")
                .borders(Borders::ALL)
                .border_style(Styles::popup_border()),
        )
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, popup_area, &mut list_state);
}
