use crate::ui::app::{App, SearchFocus};
use crate::ui::navigation::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Info => handle_info_key(app, key),
        Route::Search => match app.focus() {
            SearchFocus::Input => handle_query_key(app, key),
            SearchFocus::Results => handle_results_key(app, key),
        },
        Route::Recipe { .. } => handle_recipe_key(app, key),
    }
}

fn handle_info_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => app.navigate(Route::Search),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_query_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_search();
        }
        KeyCode::Down | KeyCode::Tab => app.focus_results(),
        KeyCode::Esc => app.back(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.push_char(ch),
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => {
            app.open_selected();
        }
        KeyCode::Tab | KeyCode::BackTab => app.focus_input(),
        KeyCode::Esc => app.back(),
        _ => {}
    }
}

fn handle_recipe_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') => app.navigate(Route::Info),
        KeyCode::Char('s') => app.navigate(Route::Search),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Up => app.scroll_recipe(-1),
        KeyCode::Down => app.scroll_recipe(1),
        KeyCode::PageUp => app.scroll_recipe(-10),
        KeyCode::PageDown => app.scroll_recipe(10),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Key hints shown in the footer for the current screen.
pub fn key_hints(app: &App) -> &'static str {
    match app.route() {
        Route::Info => " Enter: Search │ q: Quit",
        Route::Search => match app.focus() {
            SearchFocus::Input => {
                " Enter: Search │ ↓/Tab: Results │ Esc: Back │ Ctrl+Q: Quit"
            }
            SearchFocus::Results => " ↑↓: Move │ Enter: Open recipe │ Tab: Edit query │ Esc: Back",
        },
        Route::Recipe { .. } => " i: Info │ s: Search │ ↑↓: Scroll │ Esc: Back",
    }
}
