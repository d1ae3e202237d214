use crate::app::event::TodoId;
use crate::config::AppConfig;
use chrono::Local;

/// The counter half of the dashboard. Unbounded in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn decrement(&mut self) {
        self.value -= 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

/// Ordered todo items plus the keyboard selection cursor.
///
/// Items keep insertion order for display and are addressed by id, so the
/// selection cursor is a view concern only. Ids come from a monotonic
/// counter and are never reused within a session.
#[derive(Debug, Default)]
pub struct TodoListState {
    pub items: Vec<TodoItem>,
    pub selected: usize,
    next_id: TodoId,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> TodoId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a new item unless `text` is blank after trimming.
    ///
    /// The stored text is the buffer content as typed; trimming is only the
    /// emptiness test. Returns the new item's id, or `None` for a blank add.
    pub fn add(&mut self, text: &str, created_at: String) -> Option<TodoId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.allocate_id();
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            completed: false,
            created_at,
        });
        Some(id)
    }

    /// Flip the completed flag of the matching item. Absent id is a no-op.
    pub fn toggle(&mut self, id: TodoId) {
        if let Some(item) = self.items.iter_mut().find(|t| t.id == id) {
            item.completed = !item.completed;
        }
    }

    /// Remove the matching item. Absent id is a no-op.
    pub fn delete(&mut self, id: TodoId) {
        self.items.retain(|t| t.id != id);
        self.clamp_selection();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.items.get(self.selected)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }
}

/// Transient line editor for the todo input box.
///
/// The cursor is a char index; byte positions are derived where the string
/// is actually spliced, so multibyte input stays on char boundaries.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    history: Vec<String>,
    history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Text before the cursor, for width-aware cursor placement.
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_at(self.cursor)]
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn delete_forward(&mut self) {
        let at = self.byte_at(self.cursor);
        if at < self.text.len() {
            self.text.remove(at);
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1] == ' ' {
            pos -= 1;
        }
        while pos > 0 && chars[pos - 1] != ' ' {
            pos -= 1;
        }
        let start = self.byte_at(pos);
        let end = self.byte_at(self.cursor);
        self.text.drain(start..end);
        self.cursor = pos;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Clear the buffer after a successful submit and record the line in
    /// history. Callers decide whether the submit succeeded; a rejected
    /// (blank) submit leaves the buffer untouched.
    pub fn commit(&mut self) {
        if !self.text.is_empty() {
            self.history.push(self.text.clone());
        }
        self.clear();
        self.history_index = None;
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.char_count();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.char_count();
            }
            Some(_) => {
                self.history_index = None;
                self.clear();
            }
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Counter,
    TodoList,
    Input,
}

pub struct AppState {
    pub config: AppConfig,
    pub counter: CounterState,
    pub todos: TodoListState,
    pub input: InputState,
    pub focus: FocusPanel,
    pub should_quit: bool,
    pub dirty: bool,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            counter: CounterState::default(),
            todos: TodoListState::new(),
            input: InputState::new(),
            focus: FocusPanel::Input,
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::Counter,
            FocusPanel::Counter => FocusPanel::TodoList,
            FocusPanel::TodoList => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn now_timestamp(&self) -> String {
        Local::now().format(&self.timestamp_format).to_string()
    }

    pub fn status_line(&self) -> String {
        format!(
            "Count: {} | Todos: {}/{}",
            self.counter.value,
            self.todos.completed_count(),
            self.todos.items.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(todos: &mut TodoListState, text: &str) -> Option<TodoId> {
        todos.add(text, "12:00".to_string())
    }

    #[test]
    fn test_counter_ops() {
        let mut counter = CounterState::default();
        assert_eq!(counter.value, 0);
        counter.increment();
        counter.increment();
        counter.increment();
        assert_eq!(counter.value, 3);
        counter.decrement();
        assert_eq!(counter.value, 2);
        counter.reset();
        assert_eq!(counter.value, 0);
    }

    #[test]
    fn test_counter_goes_negative() {
        let mut counter = CounterState::default();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value, -2);
        counter.increment();
        assert_eq!(counter.value, -1);
    }

    #[test]
    fn test_add_appends_uncompleted() {
        let mut todos = TodoListState::new();
        let id = add(&mut todos, "buy milk").unwrap();
        assert_eq!(todos.items.len(), 1);
        assert_eq!(todos.items[0].id, id);
        assert_eq!(todos.items[0].text, "buy milk");
        assert!(!todos.items[0].completed);
    }

    #[test]
    fn test_add_keeps_untrimmed_text() {
        let mut todos = TodoListState::new();
        add(&mut todos, "  buy milk  ").unwrap();
        assert_eq!(todos.items[0].text, "  buy milk  ");
    }

    #[test]
    fn test_blank_add_is_rejected() {
        let mut todos = TodoListState::new();
        assert!(add(&mut todos, "").is_none());
        assert!(add(&mut todos, "   ").is_none());
        assert!(add(&mut todos, "\t \n").is_none());
        assert!(todos.items.is_empty());
    }

    #[test]
    fn test_ids_unique_across_deletes() {
        let mut todos = TodoListState::new();
        let a = add(&mut todos, "a").unwrap();
        let b = add(&mut todos, "b").unwrap();
        todos.delete(a);
        todos.delete(b);
        let c = add(&mut todos, "c").unwrap();
        assert_ne!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut todos = TodoListState::new();
        add(&mut todos, "first").unwrap();
        add(&mut todos, "second").unwrap();
        add(&mut todos, "third").unwrap();
        let texts: Vec<_> = todos.items.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut todos = TodoListState::new();
        let id = add(&mut todos, "task").unwrap();
        todos.toggle(id);
        assert!(todos.items[0].completed);
        todos.toggle(id);
        assert!(!todos.items[0].completed);
    }

    #[test]
    fn test_toggle_absent_id_is_noop() {
        let mut todos = TodoListState::new();
        add(&mut todos, "task").unwrap();
        todos.toggle(9999);
        assert!(!todos.items[0].completed);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut todos = TodoListState::new();
        let a = add(&mut todos, "a").unwrap();
        let b = add(&mut todos, "b").unwrap();
        todos.delete(a);
        assert_eq!(todos.items.len(), 1);
        assert_eq!(todos.items[0].id, b);
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut todos = TodoListState::new();
        add(&mut todos, "a").unwrap();
        todos.delete(9999);
        assert_eq!(todos.items.len(), 1);
    }

    #[test]
    fn test_selection_clamps_after_delete() {
        let mut todos = TodoListState::new();
        add(&mut todos, "a").unwrap();
        add(&mut todos, "b").unwrap();
        let c = add(&mut todos, "c").unwrap();
        todos.select_next();
        todos.select_next();
        assert_eq!(todos.selected, 2);
        todos.delete(c);
        assert_eq!(todos.selected, 1);
    }

    #[test]
    fn test_selection_saturates_at_ends() {
        let mut todos = TodoListState::new();
        todos.select_prev();
        todos.select_next();
        assert_eq!(todos.selected, 0);
        add(&mut todos, "a").unwrap();
        add(&mut todos, "b").unwrap();
        todos.select_next();
        todos.select_next();
        assert_eq!(todos.selected, 1);
    }

    #[test]
    fn test_input_insert_and_delete_multibyte() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text, "héllo");
        assert_eq!(input.cursor, 5);
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "éllo");
        input.delete_forward();
        assert_eq!(input.text, "llo");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_input_insert_mid_string() {
        let mut input = InputState::new();
        for c in "ab".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text, "axb");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_input_delete_word_back() {
        let mut input = InputState::new();
        for c in "buy more milk  ".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "buy more ");
        input.delete_word_back();
        assert_eq!(input.text, "buy ");
    }

    #[test]
    fn test_input_commit_clears_and_records_history() {
        let mut input = InputState::new();
        for c in "one".chars() {
            input.insert_char(c);
        }
        input.commit();
        assert!(input.text.is_empty());
        assert_eq!(input.cursor, 0);
        for c in "two".chars() {
            input.insert_char(c);
        }
        input.commit();
        input.history_up();
        assert_eq!(input.text, "two");
        input.history_up();
        assert_eq!(input.text, "one");
        input.history_down();
        assert_eq!(input.text, "two");
        input.history_down();
        assert!(input.text.is_empty());
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.focus, FocusPanel::Input);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Counter);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::TodoList);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Input);
    }

    #[test]
    fn test_status_line() {
        let mut state = AppState::new(AppConfig::default());
        state.counter.value = 4;
        add(&mut state.todos, "a").unwrap();
        let b = add(&mut state.todos, "b").unwrap();
        state.todos.toggle(b);
        assert_eq!(state.status_line(), "Count: 4 | Todos: 1/2");
    }
}
