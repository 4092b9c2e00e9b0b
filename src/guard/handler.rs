//! The handler side of a guarded action.
//!
//! A handler owns the busy indicator and decides what an operation failure
//! turns into. The guard only ever talks to it through [`BusyIndicator`] and
//! [`SpinnerHandler`].

use super::error::Capability;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusyState {
    #[default]
    Idle,
    Busy,
}

impl BusyState {
    pub fn is_busy(self) -> bool {
        self == BusyState::Busy
    }
}

/// Receives the busy/idle transitions of a guarded action.
pub trait BusyIndicator {
    fn enter_busy(&self);
    fn exit_busy(&self);
}

/// Full handler contract for an operation yielding `Result<T, E>`.
pub trait SpinnerHandler<T, E>: BusyIndicator {
    /// Called exactly once per failed invocation with the untouched error.
    ///
    /// `Ok` recovers and becomes the invocation's value. `Err` is handed back
    /// to the caller as [`GuardError::Operation`](super::GuardError::Operation).
    fn handle_error(&self, error: E) -> Result<T, E>;

    /// Operations this handler cannot actually perform.
    ///
    /// Statically typed handlers always satisfy the contract. Handlers
    /// assembled at runtime override this so the guard can refuse them before
    /// touching any state.
    fn missing_capabilities(&self) -> Vec<Capability> {
        Vec::new()
    }
}

impl<H: BusyIndicator + ?Sized> BusyIndicator for &H {
    fn enter_busy(&self) {
        (**self).enter_busy()
    }

    fn exit_busy(&self) {
        (**self).exit_busy()
    }
}

impl<T, E, H: SpinnerHandler<T, E> + ?Sized> SpinnerHandler<T, E> for &H {
    fn handle_error(&self, error: E) -> Result<T, E> {
        (**self).handle_error(error)
    }

    fn missing_capabilities(&self) -> Vec<Capability> {
        (**self).missing_capabilities()
    }
}

impl<H: BusyIndicator + ?Sized> BusyIndicator for Arc<H> {
    fn enter_busy(&self) {
        (**self).enter_busy()
    }

    fn exit_busy(&self) {
        (**self).exit_busy()
    }
}

impl<T, E, H: SpinnerHandler<T, E> + ?Sized> SpinnerHandler<T, E> for Arc<H> {
    fn handle_error(&self, error: E) -> Result<T, E> {
        (**self).handle_error(error)
    }

    fn missing_capabilities(&self) -> Vec<Capability> {
        (**self).missing_capabilities()
    }
}

/// Observable busy state for handlers that want one ready-made.
///
/// Backed by a `watch` channel so a UI can await changes instead of polling.
#[derive(Debug)]
pub struct BusyFlag {
    tx: watch::Sender<BusyState>,
    transitions: AtomicU64,
}

impl BusyFlag {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(BusyState::Idle);
        Self {
            tx,
            transitions: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> BusyState {
        *self.tx.borrow()
    }

    pub fn is_busy(&self) -> bool {
        self.state().is_busy()
    }

    pub fn subscribe(&self) -> watch::Receiver<BusyState> {
        self.tx.subscribe()
    }

    /// Number of state writes so far, including redundant ones.
    pub fn transitions(&self) -> u64 {
        self.transitions.load(Ordering::Relaxed)
    }

    fn set(&self, state: BusyState) {
        self.tx.send_replace(state);
        self.transitions.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyIndicator for BusyFlag {
    fn enter_busy(&self) {
        self.set(BusyState::Busy);
    }

    fn exit_busy(&self) {
        self.set(BusyState::Idle);
    }
}

type BusyCallback = Box<dyn Fn() + Send + Sync>;
type ErrorCallback<T, E> = Box<dyn Fn(E) -> Result<T, E> + Send + Sync>;

/// Handler assembled from closures at runtime.
///
/// Any callback left unset is reported by [`SpinnerHandler::missing_capabilities`],
/// which makes the guard fail with a contract violation instead of running.
pub struct CallbackHandler<T, E> {
    on_enter_busy: Option<BusyCallback>,
    on_exit_busy: Option<BusyCallback>,
    on_error: Option<ErrorCallback<T, E>>,
}

impl<T, E> CallbackHandler<T, E> {
    pub fn new() -> Self {
        Self {
            on_enter_busy: None,
            on_exit_busy: None,
            on_error: None,
        }
    }

    pub fn on_enter_busy(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_enter_busy = Some(Box::new(f));
        self
    }

    pub fn on_exit_busy(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_exit_busy = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(E) -> Result<T, E> + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }
}

impl<T, E> Default for CallbackHandler<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> BusyIndicator for CallbackHandler<T, E> {
    fn enter_busy(&self) {
        if let Some(f) = &self.on_enter_busy {
            f();
        }
    }

    fn exit_busy(&self) {
        if let Some(f) = &self.on_exit_busy {
            f();
        }
    }
}

impl<T, E> SpinnerHandler<T, E> for CallbackHandler<T, E> {
    fn handle_error(&self, error: E) -> Result<T, E> {
        match &self.on_error {
            Some(f) => f(error),
            None => Err(error),
        }
    }

    fn missing_capabilities(&self) -> Vec<Capability> {
        let mut missing = Vec::new();
        if self.on_enter_busy.is_none() {
            missing.push(Capability::EnterBusy);
        }
        if self.on_exit_busy.is_none() {
            missing.push(Capability::ExitBusy);
        }
        if self.on_error.is_none() {
            missing.push(Capability::HandleError);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_flag_starts_idle() {
        let flag = BusyFlag::new();
        assert_eq!(flag.state(), BusyState::Idle);
        assert_eq!(flag.transitions(), 0);
    }

    #[test]
    fn test_busy_flag_transitions() {
        let flag = BusyFlag::new();
        let rx = flag.subscribe();
        flag.enter_busy();
        assert!(flag.is_busy());
        assert_eq!(*rx.borrow(), BusyState::Busy);
        flag.exit_busy();
        assert!(!flag.is_busy());
        assert_eq!(*rx.borrow(), BusyState::Idle);
        assert_eq!(flag.transitions(), 2);
    }

    #[test]
    fn test_callback_handler_reports_missing() {
        let handler: CallbackHandler<(), String> = CallbackHandler::new().on_enter_busy(|| {});
        assert_eq!(
            handler.missing_capabilities(),
            vec![Capability::ExitBusy, Capability::HandleError]
        );

        let complete: CallbackHandler<(), String> = CallbackHandler::new()
            .on_enter_busy(|| {})
            .on_exit_busy(|| {})
            .on_error(Err);
        assert!(complete.missing_capabilities().is_empty());
    }

    #[test]
    fn test_arc_handler_delegates() {
        let flag = Arc::new(BusyFlag::new());
        let shared = Arc::clone(&flag);
        shared.enter_busy();
        assert!(flag.is_busy());
        (&*shared).exit_busy();
        assert!(!flag.is_busy());
    }
}
