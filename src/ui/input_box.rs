use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Input;
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .title(" New todo ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.input.text;

    if input_text.is_empty() && !focused {
        let paragraph = Paragraph::new(Span::styled("What needs doing?", Theme::placeholder()));
        frame.render_widget(paragraph, inner);
        return;
    }

    if focused {
        let line = Line::from(vec![
            Span::styled("❯ ", Theme::prompt()),
            Span::styled(input_text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Cursor offset: chevron "❯ " plus the display width of the text
        // before the cursor
        let prompt_offset = 2u16;
        let cursor_x = inner.x + prompt_offset + state.input.text_before_cursor().width() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
    } else {
        let paragraph = Paragraph::new(input_text.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
    }
}
