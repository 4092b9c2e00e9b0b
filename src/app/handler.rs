use crate::app::action::Action;
use crate::app::event::{ActionKind, AppEvent};
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Busy(busy) => {
            state.set_busy(busy);
            vec![]
        }
        AppEvent::ActionFailed { kind, error } => {
            state.record_error(kind, error);
            vec![]
        }
        AppEvent::ActionFinished { kind, outcome } => {
            state.finish(kind, outcome);
            vec![]
        }
        AppEvent::Tick => {
            if state.busy.is_busy() && state.spinner.advance(Instant::now()) {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char(c) => match ActionKind::from_key(c) {
            Some(kind) if state.begin(kind) => vec![Action::Run(kind)],
            _ => vec![],
        },
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::guard::BusyState;

    fn press(state: &mut AppState, c: char) -> Vec<Action> {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    #[test]
    fn test_keys_start_actions() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(press(&mut state, 'm'), vec![Action::Run(ActionKind::LoadMenu)]);
        assert_eq!(state.in_flight, Some(ActionKind::LoadMenu));
    }

    #[test]
    fn test_second_action_refused_while_in_flight() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, 'o');
        assert!(press(&mut state, 'c').is_empty());

        handle_event(
            &mut state,
            AppEvent::ActionFinished {
                kind: ActionKind::PlaceOrder,
                outcome: Ok("handled".into()),
            },
        );
        assert_eq!(press(&mut state, 'c'), vec![Action::Run(ActionKind::CheckOven)]);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(press(&mut state, 'q'), vec![Action::Quit]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_event(&mut state, AppEvent::Terminal(CEvent::Key(ctrl_c))),
            vec![Action::Quit]
        );
        assert_eq!(state.in_flight, None);
    }

    #[test]
    fn test_failure_sequence_updates_state() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, 'o');
        handle_event(&mut state, AppEvent::Busy(BusyState::Busy));
        assert!(state.busy.is_busy());
        handle_event(
            &mut state,
            AppEvent::ActionFailed {
                kind: ActionKind::PlaceOrder,
                error: "order rejected: oven is on fire".into(),
            },
        );
        handle_event(&mut state, AppEvent::Busy(BusyState::Idle));
        assert!(!state.busy.is_busy());
        assert_eq!(
            state.last_error.as_deref(),
            Some("order rejected: oven is on fire")
        );
    }

    #[test]
    fn test_tick_ignored_when_idle() {
        let mut state = AppState::new(AppConfig::default());
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
    }
}
