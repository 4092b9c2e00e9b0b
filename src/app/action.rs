use crate::app::event::ActionKind;

/// Side effects requested by the event handler, executed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(ActionKind),
    Quit,
}
