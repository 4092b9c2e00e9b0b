use crate::guard::BusyState;
use crossterm::event::Event as CrosstermEvent;

/// The simulated pizza-shop operations the demo can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Resolves with the menu after the configured latency.
    LoadMenu,
    /// Fails asynchronously after the configured latency.
    PlaceOrder,
    /// Fails before any future is created.
    CheckOven,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::LoadMenu,
        ActionKind::PlaceOrder,
        ActionKind::CheckOven,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActionKind::LoadMenu => "load_menu",
            ActionKind::PlaceOrder => "place_order",
            ActionKind::CheckOven => "check_oven",
        }
    }

    pub fn key(self) -> char {
        match self {
            ActionKind::LoadMenu => 'm',
            ActionKind::PlaceOrder => 'o',
            ActionKind::CheckOven => 'c',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActionKind::LoadMenu => "Load menu",
            ActionKind::PlaceOrder => "Place order",
            ActionKind::CheckOven => "Check oven",
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == c)
    }
}

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Busy indicator changed, sent by the status handler
    Busy(BusyState),

    /// An action failed and its error reached the handler
    ActionFailed { kind: ActionKind, error: String },

    /// The wrapped action returned to its caller
    ActionFinished {
        kind: ActionKind,
        outcome: Result<String, String>,
    },

    /// Tick for spinner animation
    Tick,
}
