use crossterm::event::Event as CrosstermEvent;

pub type TodoId = usize;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Tick for UI refresh
    Tick,
}
