use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::TodoList;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let title = if state.todos.items.is_empty() {
        " Todos ".to_string()
    } else {
        format!(
            " Todos ({}/{}) ",
            state.todos.completed_count(),
            state.todos.items.len()
        )
    };

    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border_style);

    if state.todos.items.is_empty() {
        let placeholder = List::new([ListItem::new(Span::styled(
            " No todos yet — type below and press Enter.",
            Theme::placeholder(),
        ))])
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .todos
        .items
        .iter()
        .map(|item| {
            let checkbox = if item.completed { "[x] " } else { "[ ] " };
            let text_style = if item.completed {
                Theme::todo_done()
            } else {
                Theme::todo_pending()
            };
            ListItem::new(Line::from(vec![
                Span::styled(checkbox, text_style),
                Span::styled(item.text.clone(), text_style),
                Span::styled(format!("  {}", item.created_at), Theme::timestamp()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::todo_selected())
        .highlight_symbol("❯ ");

    let mut list_state = ListState::default().with_selected(Some(state.todos.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
