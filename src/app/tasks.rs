//! The simulated shop operations and the handler that reports them to the UI.
//!
//! Each keypress spawns one task that runs its operation through an
//! [`AsyncActionGuard`]. The [`StatusHandler`] turns busy transitions and
//! errors into [`AppEvent`]s, so the event loop never has to know about the
//! guard.

use crate::app::event::{ActionKind, AppEvent};
use crate::config::{DemoConfig, ErrorPolicy};
use crate::guard::{AsyncActionGuard, BusyIndicator, BusyState, SpinnerHandler};
use futures::future::Ready;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;

const MENU: [&str; 4] = ["Margherita", "Funghi", "Quattro Formaggi", "Diavola"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("order rejected: {0}")]
    OrderRejected(String),
    #[error("oven is not connected")]
    OvenUnavailable,
}

/// Forwards guard callbacks to the event loop.
pub struct StatusHandler {
    kind: ActionKind,
    policy: ErrorPolicy,
    fallback: String,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl StatusHandler {
    pub fn new(kind: ActionKind, demo: &DemoConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            kind,
            policy: demo.error_policy,
            fallback: demo.fallback_label.clone(),
            event_tx,
        }
    }
}

impl BusyIndicator for StatusHandler {
    fn enter_busy(&self) {
        let _ = self.event_tx.send(AppEvent::Busy(BusyState::Busy));
    }

    fn exit_busy(&self) {
        let _ = self.event_tx.send(AppEvent::Busy(BusyState::Idle));
    }
}

impl SpinnerHandler<String, ShopError> for StatusHandler {
    fn handle_error(&self, error: ShopError) -> Result<String, ShopError> {
        tracing::info!(action = self.kind.label(), %error, policy = ?self.policy, "action failed");
        let _ = self.event_tx.send(AppEvent::ActionFailed {
            kind: self.kind,
            error: error.to_string(),
        });
        match self.policy {
            ErrorPolicy::Swallow => Ok(self.fallback.clone()),
            ErrorPolicy::Propagate => Err(error),
        }
    }
}

async fn load_menu(latency: Duration) -> Result<String, ShopError> {
    tokio::time::sleep(latency).await;
    Ok(MENU.join(", "))
}

async fn place_order(latency: Duration, reason: String) -> Result<String, ShopError> {
    tokio::time::sleep(latency).await;
    Err(ShopError::OrderRejected(reason))
}

fn check_oven() -> Result<Ready<Result<String, ShopError>>, ShopError> {
    // No oven is ever attached, so this fails before producing a future.
    Err(ShopError::OvenUnavailable)
}

/// Run `kind` in the background. Sends [`AppEvent::ActionFinished`] once the
/// wrapped action returns.
pub fn spawn_action(
    kind: ActionKind,
    demo: &DemoConfig,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    let handler = StatusHandler::new(kind, demo, event_tx.clone());
    let guard = AsyncActionGuard::labelled(kind.label());
    let latency = Duration::from_millis(demo.latency_ms);
    let reason = demo.failure_message.clone();

    tokio::spawn(async move {
        let result = match kind {
            ActionKind::LoadMenu => guard.wrap(move || load_menu(latency), &handler).call().await,
            ActionKind::PlaceOrder => {
                guard
                    .wrap(move || place_order(latency, reason.clone()), &handler)
                    .call()
                    .await
            }
            ActionKind::CheckOven => guard.wrap_fallible(check_oven, &handler).call().await,
        };
        let outcome = result.map_err(|e| e.to_string());
        tracing::debug!(action = kind.label(), ok = outcome.is_ok(), "action returned");
        let _ = event_tx.send(AppEvent::ActionFinished { kind, outcome });
    })
}
