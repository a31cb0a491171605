use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::AppState;
use crate::Screen;

/// Cards skipped by PageUp / PageDown.
const PAGE_CARDS: isize = 3;

/// Main event handler: global keys first, then the active screen's handler.
pub fn handle_event(event: Event, state: &mut AppState) {
    if let Event::Key(key_event) = event {
        if key_event.kind == KeyEventKind::Release {
            return;
        }

        if handle_global(key_event, state) {
            return;
        }

        match state.session.current() {
            Screen::Home => handle_home(key_event, state),
            Screen::Cart | Screen::About => {}
        }
    }
}

/// Quit and navigation-bar keys. Returns true when the key was consumed.
fn handle_global(event: KeyEvent, state: &mut AppState) -> bool {
    let current = state.session.current();
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
        }
        KeyCode::Tab | KeyCode::Right => state.select_screen(current.next()),
        KeyCode::BackTab | KeyCode::Left => state.select_screen(current.previous()),
        KeyCode::Char('1') | KeyCode::Char('h') => state.select_screen(Screen::Home),
        KeyCode::Char('2') | KeyCode::Char('c') => state.select_screen(Screen::Cart),
        KeyCode::Char('3') | KeyCode::Char('a') => state.select_screen(Screen::About),
        _ => return false,
    }
    true
}

fn handle_home(event: KeyEvent, state: &mut AppState) {
    match event.code {
        KeyCode::Up => state.move_selection(-1),
        KeyCode::Down => state.move_selection(1),
        KeyCode::PageUp => state.move_selection(-PAGE_CARDS),
        KeyCode::PageDown => state.move_selection(PAGE_CARDS),
        KeyCode::Home => state.selected_product = 0,
        KeyCode::End => {
            state.selected_product = state.session.catalog().len().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => state.add_selected_to_cart(),
        _ => {}
    }
}
