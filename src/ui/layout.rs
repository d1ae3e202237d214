use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub counter_panel: Rect,
    pub todo_list: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: counter panel | todo column
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(26), // Counter panel
            Constraint::Min(30),    // Todo column
        ])
        .split(content);

    let counter_panel = h_chunks[0];
    let todo_column = h_chunks[1];

    // Todo column: list | input box
    let todo_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Todo list
            Constraint::Length(3), // Input box
        ])
        .split(todo_column);

    AppLayout {
        counter_panel,
        todo_list: todo_chunks[0],
        input_box: todo_chunks[1],
        status_bar,
    }
}
