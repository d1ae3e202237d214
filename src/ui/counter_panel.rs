use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Counter;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .title(" Counter ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            state.counter.value.to_string(),
            Theme::counter_value(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];
    if inner.height > 3 {
        lines.push(
            Line::from(Span::styled("[+] up   [-] down", Theme::hint()))
                .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled("[0] reset", Theme::hint())).alignment(Alignment::Center),
        );
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
