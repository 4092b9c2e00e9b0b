use crate::app::event::ActionKind;
use crate::config::AppConfig;
use crate::guard::BusyState;
use crate::ui::spinner::Spinner;
use chrono::Local;

/// Oldest activity lines are dropped past this many.
const MAX_ACTIVITY: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ActivityLine {
    pub timestamp: String,
    pub text: String,
    pub kind: LineKind,
}

pub struct AppState {
    pub config: AppConfig,
    /// Busy indicator as last reported by the status handler.
    pub busy: BusyState,
    /// Action started from the keyboard and not yet returned.
    pub in_flight: Option<ActionKind>,
    pub spinner: Spinner,
    pub activity: Vec<ActivityLine>,
    pub last_result: Option<String>,
    pub last_error: Option<String>,
    pub menu: Vec<String>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let spinner = Spinner::new(&config.spinner);
        Self {
            config,
            busy: BusyState::Idle,
            in_flight: None,
            spinner,
            activity: Vec::new(),
            last_result: None,
            last_error: None,
            menu: Vec::new(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Claim the single action slot. Returns false if another action is
    /// still running.
    pub fn begin(&mut self, kind: ActionKind) -> bool {
        if let Some(running) = self.in_flight {
            self.info(format!(
                "{} ignored: {} still running",
                kind.description(),
                running.description()
            ));
            return false;
        }
        self.in_flight = Some(kind);
        self.last_error = None;
        self.info(format!("{}...", kind.description()));
        true
    }

    /// Release the action slot and record what the caller received.
    pub fn finish(&mut self, kind: ActionKind, outcome: Result<String, String>) {
        if self.in_flight == Some(kind) {
            self.in_flight = None;
        }
        match outcome {
            Ok(value) => {
                if kind == ActionKind::LoadMenu {
                    self.menu = value.split(", ").map(str::to_string).collect();
                }
                self.push(format!("{} returned: {}", kind.description(), value), LineKind::Success);
                self.last_result = Some(value);
            }
            Err(e) => {
                self.push(format!("{} raised: {}", kind.description(), e), LineKind::Error);
                self.last_result = None;
            }
        }
    }

    pub fn set_busy(&mut self, busy: BusyState) {
        if busy == BusyState::Idle {
            self.spinner.reset();
        }
        self.busy = busy;
        self.dirty = true;
    }

    pub fn record_error(&mut self, kind: ActionKind, error: String) {
        self.push(format!("{} failed: {}", kind.description(), error), LineKind::Error);
        self.last_error = Some(error);
    }

    pub fn info(&mut self, text: String) {
        self.push(text, LineKind::Info);
    }

    fn push(&mut self, text: String, kind: LineKind) {
        self.activity.push(ActivityLine {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            text,
            kind,
        });
        if self.activity.len() > MAX_ACTIVITY {
            self.activity.remove(0);
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_begin_claims_single_slot() {
        let mut s = state();
        assert!(s.begin(ActionKind::LoadMenu));
        assert!(!s.begin(ActionKind::PlaceOrder));
        assert_eq!(s.in_flight, Some(ActionKind::LoadMenu));
        assert!(s.activity.last().unwrap().text.contains("still running"));
    }

    #[test]
    fn test_finish_menu_populates_items() {
        let mut s = state();
        s.begin(ActionKind::LoadMenu);
        s.finish(ActionKind::LoadMenu, Ok("Margherita, Funghi".into()));
        assert_eq!(s.in_flight, None);
        assert_eq!(s.menu, vec!["Margherita", "Funghi"]);
        assert_eq!(s.last_result.as_deref(), Some("Margherita, Funghi"));
    }

    #[test]
    fn test_finish_error_clears_result() {
        let mut s = state();
        s.last_result = Some("old".into());
        s.begin(ActionKind::PlaceOrder);
        s.finish(ActionKind::PlaceOrder, Err("operation failed: x".into()));
        assert_eq!(s.last_result, None);
        assert_eq!(s.activity.last().unwrap().kind, LineKind::Error);
    }

    #[test]
    fn test_activity_is_bounded() {
        let mut s = state();
        for i in 0..(MAX_ACTIVITY + 10) {
            s.info(format!("line {i}"));
        }
        assert_eq!(s.activity.len(), MAX_ACTIVITY);
        assert_eq!(s.activity[0].text, "line 10");
    }
}
