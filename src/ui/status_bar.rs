use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    parts.push(Span::styled(
        format!("| {} ", Local::now().format("%H:%M:%S")),
        Theme::status_bar(),
    ));

    // Focus indicator, right-aligned
    let focus_name = match state.focus {
        FocusPanel::Counter => "COUNTER",
        FocusPanel::TodoList => "TODOS",
        FocusPanel::Input => "INPUT",
    };
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
