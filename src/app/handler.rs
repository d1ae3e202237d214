use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Translate an incoming event into zero or more domain actions.
///
/// Navigation and text editing mutate view state directly; everything that
/// changes the counter or the todo list goes through an [`Action`] consumed
/// by [`apply_action`].
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            // Redraw on tick so the status bar clock stays current.
            state.dirty = true;
            vec![]
        }
    }
}

/// Apply one action to the state. The reducer step: every state transition
/// is total, and unknown ids are silently ignored.
pub fn apply_action(state: &mut AppState, action: Action) {
    debug!(?action, "apply");
    match action {
        Action::Increment => state.counter.increment(),
        Action::Decrement => state.counter.decrement(),
        Action::ResetCounter => state.counter.reset(),
        Action::AddTodo => {
            let text = state.input.text.clone();
            let stamp = state.now_timestamp();
            if state.todos.add(&text, stamp).is_some() {
                state.input.commit();
            }
        }
        Action::ToggleTodo { id } => state.todos.toggle(id),
        Action::DeleteTodo { id } => state.todos.delete(id),
        Action::Quit => state.should_quit = true,
    }
    state.dirty = true;
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Tab cycles focus; the input box cedes Tab only when empty
    if key.code == KeyCode::Tab
        && (state.focus != FocusPanel::Input || state.input.text.is_empty())
    {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::Counter => handle_counter_key(state, key),
        FocusPanel::TodoList => handle_todo_key(state, key),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => vec![Action::AddTodo],
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.input.delete_word_back();
            } else {
                state.input.delete_back();
            }
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.input.history_down();
            vec![]
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.input.move_home(),
                    'e' => state.input.move_end(),
                    'w' => state.input.delete_word_back(),
                    'u' => state.input.clear(),
                    _ => {}
                }
            } else {
                state.input.insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_counter_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => vec![Action::Increment],
        KeyCode::Down | KeyCode::Char('-') => vec![Action::Decrement],
        KeyCode::Char('0') | KeyCode::Char('r') => vec![Action::ResetCounter],
        KeyCode::Char(c) => {
            // Start typing: switch to input
            state.focus = FocusPanel::Input;
            state.input.insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_todo_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.todos.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.todos.select_next();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => match state.todos.selected_item() {
            Some(item) => vec![Action::ToggleTodo { id: item.id }],
            None => vec![],
        },
        KeyCode::Delete | KeyCode::Char('d') => match state.todos.selected_item() {
            Some(item) => vec![Action::DeleteTodo { id: item.id }],
            None => vec![],
        },
        KeyCode::Char(c) => {
            // Start typing: switch to input
            state.focus = FocusPanel::Input;
            state.input.insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}
