use crate::app::actions::Action;
use crate::app::state::AppState;
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
}

/// Wait up to `timeout` for the next terminal event worth handling.
pub fn next_event(timeout: Duration) -> anyhow::Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let ev = match event::read()? {
        CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(InputEvent::Key(k)),
        CtEvent::Mouse(m) => Some(InputEvent::Mouse(m)),
        CtEvent::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    };
    Ok(ev)
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => handle_mouse(state, m),
        InputEvent::Key(k) if state.show_help => handle_help(k),
        InputEvent::Key(k) => handle_gallery(k),
    }
}

fn handle_gallery(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
            Some(Action::NextCard)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
            Some(Action::PrevCard)
        }
        KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstCard),
        KeyCode::Char('G') | KeyCode::End => Some(Action::LastCard),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleLike),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_help(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('?') | KeyCode::Esc => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_mouse(state: &AppState, m: MouseEvent) -> Option<Action> {
    let pos = Position::new(m.column, m.row);
    match m.kind {
        MouseEventKind::ScrollUp => Some(Action::PrevCard),
        MouseEventKind::ScrollDown => Some(Action::NextCard),
        MouseEventKind::Down(MouseButton::Left) => {
            if state.heart_area.is_some_and(|r| r.contains(pos)) {
                return Some(Action::ToggleLike);
            }
            let list = state.list_area.filter(|r| r.contains(pos))?;
            // Only rows between the top and bottom borders hold cards.
            if m.row <= list.y || m.row.saturating_add(1) >= list.bottom() {
                return None;
            }
            let index = (m.row - list.y - 1) as usize + state.list_state.offset();
            (index < state.entries.len()).then_some(Action::SelectCard(index))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardEntry;
    use crate::tui::widgets::gallery;
    use crossterm::event::KeyEventState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn state_with_cards(n: usize) -> AppState {
        let entries = (0..n)
            .map(|i| CardEntry {
                id: i.to_string(),
                name: format!("Card {}", i),
                description: String::new(),
                color: None,
            })
            .collect();
        AppState::new(entries)
    }

    #[test]
    fn test_gallery_keys() {
        let state = state_with_cards(3);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('j'))), Some(Action::NextCard));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Up)), Some(Action::PrevCard));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char(' '))), Some(Action::ToggleLike));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_help_swallows_navigation() {
        let mut state = state_with_cards(3);
        state.show_help = true;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('j'))), None);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_mouse_hit_areas() {
        let mut state = state_with_cards(3);
        state.list_area = Some(Rect::new(0, 0, 20, 10));
        state.heart_area = Some(Rect::new(40, 5, 2, 1));

        assert_eq!(map_input_to_action(&state, click(41, 5)), Some(Action::ToggleLike));
        assert_eq!(map_input_to_action(&state, click(3, 2)), Some(Action::SelectCard(1)));
        // Border row and rows past the last card do nothing.
        assert_eq!(map_input_to_action(&state, click(3, 0)), None);
        assert_eq!(map_input_to_action(&state, click(3, 8)), None);
        assert_eq!(map_input_to_action(&state, click(30, 30)), None);
    }

    #[test]
    fn test_click_on_scrolled_gallery() {
        let mut state = state_with_cards(30);
        state.selected = 25;

        let mut terminal = Terminal::new(TestBackend::new(24, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                gallery::render(f, &mut state, area);
            })
            .unwrap();

        // Eight inner rows with card 25 visible means the list scrolled.
        let offset = state.list_state.offset();
        assert_eq!(offset, 18);
        let buffer = terminal.backend().buffer();
        let row: String = (0..24u16).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(row.contains(&state.entries[offset].name), "row 1 shows {row:?}");

        assert_eq!(map_input_to_action(&state, click(5, 1)), Some(Action::SelectCard(18)));
        assert_eq!(map_input_to_action(&state, click(5, 8)), Some(Action::SelectCard(25)));
        // Top and bottom border rows select nothing.
        assert_eq!(map_input_to_action(&state, click(5, 0)), None);
        assert_eq!(map_input_to_action(&state, click(5, 9)), None);
    }
}
