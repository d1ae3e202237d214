mod counter_panel;
mod input_box;
mod layout;
mod status_bar;
mod theme;
mod todo_list;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    counter_panel::render(frame, app_layout.counter_panel, state);
    todo_list::render(frame, app_layout.todo_list, state);
    input_box::render(frame, app_layout.input_box, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
