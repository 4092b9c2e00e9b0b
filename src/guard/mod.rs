//! Busy-state and error routing around asynchronous actions.
//!
//! [`AsyncActionGuard::wrap`] turns an operation into a [`WrappedAction`].
//! Every call of the wrapped action:
//!
//! 1. refuses to run if the handler is missing part of its contract,
//! 2. calls [`BusyIndicator::enter_busy`],
//! 3. runs the operation,
//! 4. on failure passes the error to [`SpinnerHandler::handle_error`],
//! 5. calls [`BusyIndicator::exit_busy`], whatever happened above.
//!
//! Step 5 is tied to a drop guard, so it also runs when the operation or the
//! error handler panics, and when the caller drops the future mid-flight.
//!
//! The guard does not serialize overlapping calls. Two concurrent calls on the
//! same handler each flip the busy state, and whichever finishes first clears
//! it. Callers that need exclusivity must track in-flight work themselves.

pub mod error;
pub mod handler;

pub use error::{Capability, GuardError};
pub use handler::{BusyFlag, BusyIndicator, BusyState, CallbackHandler, SpinnerHandler};

use std::borrow::Cow;
use std::future::Future;
use tracing::{debug, trace, warn};

/// Factory for wrapped actions. Holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct AsyncActionGuard {
    label: Option<Cow<'static, str>>,
}

impl AsyncActionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A guard whose log events carry `label`.
    pub fn labelled(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("action")
    }

    /// Wrap an operation taking no arguments.
    pub fn wrap<F, H>(&self, operation: F, handler: H) -> WrappedAction<F, H> {
        WrappedAction {
            guard: self.clone(),
            operation,
            handler,
        }
    }

    /// Wrap an operation taking one argument. Use a tuple for several.
    pub fn wrap_with<F, H>(&self, operation: F, handler: H) -> WrappedActionWith<F, H> {
        WrappedActionWith {
            guard: self.clone(),
            operation,
            handler,
        }
    }

    /// Wrap an operation that may fail before it produces a future.
    pub fn wrap_fallible<F, H>(&self, operation: F, handler: H) -> FallibleAction<F, H> {
        FallibleAction {
            guard: self.clone(),
            operation,
            handler,
        }
    }

    async fn run<T, E, H, Fut>(
        &self,
        handler: &H,
        start: impl FnOnce() -> Result<Fut, E>,
    ) -> Result<T, GuardError<E>>
    where
        H: SpinnerHandler<T, E> + ?Sized,
        Fut: Future<Output = Result<T, E>>,
    {
        let missing = handler.missing_capabilities();
        if !missing.is_empty() {
            warn!(action = self.label(), ?missing, "handler rejected, action not started");
            return Err(GuardError::ContractViolation { missing });
        }

        let _busy = BusyScope::enter(handler, self.label());

        let outcome = match start() {
            Ok(fut) => fut.await,
            Err(e) => {
                debug!(action = self.label(), "operation failed before starting");
                Err(e)
            }
        };

        match outcome {
            Ok(value) => Ok(value),
            Err(e) => {
                debug!(action = self.label(), "operation failed, passing error to handler");
                handler.handle_error(e).map_err(GuardError::Operation)
            }
        }
    }
}

/// Holds the busy state for the lifetime of one invocation.
struct BusyScope<'a, H: BusyIndicator + ?Sized> {
    handler: &'a H,
    label: &'a str,
}

impl<'a, H: BusyIndicator + ?Sized> BusyScope<'a, H> {
    fn enter(handler: &'a H, label: &'a str) -> Self {
        trace!(action = label, "busy");
        handler.enter_busy();
        Self { handler, label }
    }
}

impl<H: BusyIndicator + ?Sized> Drop for BusyScope<'_, H> {
    fn drop(&mut self) {
        self.handler.exit_busy();
        trace!(action = self.label, "idle");
    }
}

/// An operation of no arguments bound to its handler.
#[derive(Clone)]
pub struct WrappedAction<F, H> {
    guard: AsyncActionGuard,
    operation: F,
    handler: H,
}

impl<F, Fut, T, E, H> WrappedAction<F, H>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    H: SpinnerHandler<T, E>,
{
    pub async fn call(&self) -> Result<T, GuardError<E>> {
        self.guard
            .run(&self.handler, || Ok((self.operation)()))
            .await
    }
}

impl<F, H> WrappedAction<F, H> {
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// An operation of one argument bound to its handler.
#[derive(Clone)]
pub struct WrappedActionWith<F, H> {
    guard: AsyncActionGuard,
    operation: F,
    handler: H,
}

impl<F, H> WrappedActionWith<F, H> {
    pub async fn call<A, Fut, T, E>(&self, arg: A) -> Result<T, GuardError<E>>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        H: SpinnerHandler<T, E>,
    {
        self.guard
            .run(&self.handler, || Ok((self.operation)(arg)))
            .await
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// An operation that can fail synchronously, bound to its handler.
#[derive(Clone)]
pub struct FallibleAction<F, H> {
    guard: AsyncActionGuard,
    operation: F,
    handler: H,
}

impl<F, Fut, T, E, H> FallibleAction<F, H>
where
    F: Fn() -> Result<Fut, E>,
    Fut: Future<Output = Result<T, E>>,
    H: SpinnerHandler<T, E>,
{
    pub async fn call(&self) -> Result<T, GuardError<E>> {
        self.guard.run(&self.handler, || (self.operation)()).await
    }
}

impl<F, H> FallibleAction<F, H> {
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// [`AsyncActionGuard::wrap`] with an unlabelled guard.
pub fn wrap<F, H>(operation: F, handler: H) -> WrappedAction<F, H> {
    AsyncActionGuard::new().wrap(operation, handler)
}

/// [`AsyncActionGuard::wrap_with`] with an unlabelled guard.
pub fn wrap_with<F, H>(operation: F, handler: H) -> WrappedActionWith<F, H> {
    AsyncActionGuard::new().wrap_with(operation, handler)
}

/// [`AsyncActionGuard::wrap_fallible`] with an unlabelled guard.
pub fn wrap_fallible<F, H>(operation: F, handler: H) -> FallibleAction<F, H> {
    AsyncActionGuard::new().wrap_fallible(operation, handler)
}
