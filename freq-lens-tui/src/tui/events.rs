use crate::tui::app::{App, Focus, SidebarSort, View};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') if !app.sidebar_searching => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.cycle_focus();
            return;
        }
        KeyCode::Char('?') if !app.sidebar_searching => {
            if app.view == View::Help {
                app.view = View::Distribution;
                app.help_scroll = 0;
            } else {
                app.view = View::Help;
            }
            return;
        }
        KeyCode::Char('j') if app.view == View::Help => {
            app.help_scroll += 1;
            return;
        }
        KeyCode::Char('k') if app.view == View::Help => {
            if app.help_scroll > 0 {
                app.help_scroll -= 1;
            }
            return;
        }
        _ => {}
    }
    match app.focus {
        Focus::Sidebar => handle_sidebar(app, key),
        Focus::Main => handle_main(app, key),
    }
}

fn handle_sidebar(app: &mut App, key: KeyEvent) {
    if app.sidebar_searching {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                app.sidebar_searching = false;
            }
            KeyCode::Backspace => {
                app.sidebar_search.pop();
            }
            KeyCode::Char(c) => {
                app.sidebar_search.push(c);
                app.sidebar_selected = 0;
            }
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.sidebar_down(),
        KeyCode::Char('k') | KeyCode::Up => app.sidebar_up(),
        KeyCode::PageDown => {
            for _ in 0..10 {
                app.sidebar_down();
            }
        }
        KeyCode::PageUp => {
            for _ in 0..10 {
                app.sidebar_up();
            }
        }
        KeyCode::Enter => {
            app.view = View::Distribution;
            app.focus = Focus::Main;
        }
        KeyCode::Char('S') => app.view = View::SortedData,
        KeyCode::Char('U') => app.view = View::Summary,
        KeyCode::Char('/') => {
            app.sidebar_searching = true;
            app.sidebar_search.clear();
        }
        KeyCode::Char('o') => {
            app.sidebar_sort = match app.sidebar_sort {
                SidebarSort::Name => SidebarSort::Count,
                SidebarSort::Count => SidebarSort::Skipped,
                SidebarSort::Skipped => {
                    app.sidebar_sort_asc = !app.sidebar_sort_asc;
                    SidebarSort::Name
                }
            };
        }
        _ => {}
    }
}

fn handle_main(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') => app.data_scroll = 0,
        KeyCode::Char('S') => app.view = View::SortedData,
        KeyCode::Char('U') => app.view = View::Summary,
        KeyCode::Enter | KeyCode::Char('D') => app.view = View::Distribution,
        KeyCode::Esc => {
            app.focus = Focus::Sidebar;
            app.view = View::Distribution;
        }
        _ => {}
    }
}
