use crate::app::event::TodoId;

/// Commands produced by input handling and consumed by the reducer in
/// [`crate::app::handler::apply_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    ResetCounter,
    AddTodo,
    ToggleTodo { id: TodoId },
    DeleteTodo { id: TodoId },
    Quit,
}
