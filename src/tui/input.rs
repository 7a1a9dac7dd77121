//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::state::{AppState, InputMode, PopupState};
use crate::model::Column;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { scroll } => {
            handle_help(state, key, scroll);
            return KeyAction::None;
        }
        PopupState::None => {}
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::FilterPicker => {
            handle_filter_picker(state, key);
            KeyAction::None
        }
        InputMode::PageSize => {
            handle_page_size(state, key);
            KeyAction::None
        }
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent, scroll: usize) {
    state.popup = match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => PopupState::None,
        KeyCode::Up | KeyCode::Char('k') => PopupState::Help {
            scroll: scroll.saturating_sub(1),
        },
        // Clamped during render.
        KeyCode::Down | KeyCode::Char('j') => PopupState::Help {
            scroll: scroll.saturating_add(1),
        },
        _ => PopupState::Help { scroll },
    };
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // A status message lasts until the next key.
    state.status_message = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
        }
        // Everything below needs data.
        _ if !state.is_loaded() => {}

        // Header clicks
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            if let Some(column) = Column::from_index(index) {
                state.click_header(column);
            }
        }

        KeyCode::Char('f') | KeyCode::Char('/') => state.open_filter_picker(),
        KeyCode::Char('z') => state.open_page_size_input(),

        // Pager
        KeyCode::Left | KeyCode::Char('h') => state.prev_page(),
        KeyCode::Right | KeyCode::Char('l') => state.next_page(),

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => state.select_up(),
        KeyCode::Down | KeyCode::Char('j') => state.select_down(),
        KeyCode::Home => state.home(),
        KeyCode::End => state.end(),

        KeyCode::Enter => state.drill_down(),
        KeyCode::Char('d') | KeyCode::Delete => state.delete_selected(),
        _ => {}
    }
    KeyAction::None
}

fn handle_filter_picker(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.close_input(),
        KeyCode::Enter => state.confirm_picker(),
        KeyCode::Up | KeyCode::Char('k') => state.picker_up(),
        KeyCode::Down | KeyCode::Char('j') => state.picker_down(),
        _ => {}
    }
}

fn handle_page_size(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.close_input(),
        KeyCode::Enter => state.commit_page_size(),
        KeyCode::Backspace => {
            state.page_size_input.pop();
        }
        KeyCode::Char(c) => state.page_size_input.push(c),
        _ => {}
    }
}

/// Handles a mouse event: left clicks on header cells sort, clicks on a
/// Location cell drill down, clicks elsewhere in the body select the row.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.popup != PopupState::None
        || state.input_mode != InputMode::Normal
        || !state.is_loaded()
    {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollUp => return state.select_up(),
        MouseEventKind::ScrollDown => return state.select_down(),
        _ => return,
    }

    let (x, y) = (mouse.column, mouse.row);
    if state.layout.in_header(x, y) {
        if let Some(column) = state.layout.column_at(x) {
            state.click_header(column);
        }
        return;
    }
    if let Some(row) = state.layout.row_at(x, y) {
        let len = state.grid_view().rows.len();
        if row >= len {
            return;
        }
        state.select_row(row);
        if state.layout.column_at(x) == Some(Column::Location) {
            state.drill_down();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_record as record;
    use crate::pipeline::{Filter, Sort};
    use crate::tui::state::tests::loaded;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn sample() -> AppState {
        loaded(
            vec![
                record("A", "a1", 100.0),
                record("B", "b1", 200.0),
                record("A", "a2", 300.0),
            ],
            2,
        )
    }

    #[test]
    fn number_keys_click_headers() {
        let mut state = sample();
        let _ = handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.view.sort, Some(Sort::ascending(Column::PotentialRevenue)));
        let _ = handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.view.sort, Some(Sort::descending(Column::PotentialRevenue)));
        let _ = handle_key(&mut state, key(KeyCode::Char('1')));
        assert_eq!(state.view.sort, Some(Sort::ascending(Column::Location)));
    }

    #[test]
    fn arrows_page_and_stop_at_bounds() {
        let mut state = sample();
        let _ = handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.view.page, 1);
        let _ = handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.view.page, 2);
        let _ = handle_key(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.view.page, 2);
        let _ = handle_key(&mut state, key(KeyCode::Char('h')));
        assert_eq!(state.view.page, 1);
    }

    #[test]
    fn filter_picker_applies_on_enter_and_cancels_on_esc() {
        let mut state = sample();
        let _ = handle_key(&mut state, key(KeyCode::Char('f')));
        assert_eq!(state.input_mode, InputMode::FilterPicker);
        // Select a Filter, All Locations, A
        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.view.filter, Filter::Value("A".into()));
        assert_eq!(state.input_mode, InputMode::Normal);

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        let _ = handle_key(&mut state, key(KeyCode::Up));
        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.view.filter, Filter::Value("A".into()));
    }

    #[test]
    fn page_size_input_edits_and_commits() {
        let mut state = sample();
        let _ = handle_key(&mut state, key(KeyCode::Char('z')));
        assert_eq!(state.page_size_input, "2");
        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        let _ = handle_key(&mut state, key(KeyCode::Char('1')));
        let _ = handle_key(&mut state, key(KeyCode::Char('0')));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.view.page_size.get(), 10);
        assert_eq!(state.total_pages(), 1);

        let _ = handle_key(&mut state, key(KeyCode::Char('z')));
        let _ = handle_key(&mut state, key(KeyCode::Char('-')));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.view.page_size.get(), 10);
    }

    #[test]
    fn delete_key_removes_selected_row() {
        let mut state = sample();
        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.collection.len(), 2);
        assert!(state.collection.rows().iter().all(|r| r.record.branch != "b1"));
    }

    #[test]
    fn status_message_clears_on_next_key() {
        let mut state = sample();
        let _ = handle_key(&mut state, key(KeyCode::Char('d')));
        assert!(state.status_message.is_some());
        let _ = handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.status_message, None);

        let _ = handle_key(&mut state, key(KeyCode::Char('z')));
        let _ = handle_key(&mut state, key(KeyCode::Char('x')));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.status_message.is_some());
        let _ = handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let mut state = sample();

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut state = sample();

        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = sample();
        let action = handle_key(
            &mut state,
            KeyEvent {
                modifiers: KeyModifiers::CONTROL,
                ..key(KeyCode::Char('c'))
            },
        );
        assert_eq!(action, KeyAction::Quit);
    }

    #[test]
    fn grid_keys_ignored_while_loading() {
        let mut state = AppState::new("test", std::num::NonZeroUsize::new(5).unwrap());
        let _ = handle_key(&mut state, key(KeyCode::Char('f')));
        assert_eq!(state.input_mode, InputMode::Normal);
        let _ = handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });
    }

    #[test]
    fn mouse_clicks_sort_and_drill_down() {
        let mut state = sample();
        state.layout.header = Rect::new(1, 2, 120, 1);
        state.layout.body = Rect::new(1, 4, 120, 2);
        state.layout.columns = vec![(1, 14), (16, 14), (31, 19)];

        handle_mouse(&mut state, click(35, 2));
        assert_eq!(state.view.sort, Some(Sort::ascending(Column::PotentialRevenue)));

        // Second body row: B / b1 (200)
        handle_mouse(&mut state, click(20, 5));
        assert_eq!(state.selected, 1);
        assert_eq!(state.view.filter, Filter::None);

        handle_mouse(&mut state, click(3, 5));
        assert_eq!(state.view.filter, Filter::Value("B".into()));
    }
}
