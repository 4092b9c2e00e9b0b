//! Busy-indicator and error routing for asynchronous actions.
//!
//! The [`guard`] module is the reusable part: wrap any async operation with a
//! [`guard::SpinnerHandler`] and every call flips the handler's busy state
//! around the operation, hands failures to the handler, and always clears the
//! busy state again.
//!
//! ```
//! use spinguard::guard::{wrap, BusyFlag, BusyIndicator, SpinnerHandler};
//!
//! struct Page {
//!     busy: BusyFlag,
//! }
//!
//! impl BusyIndicator for Page {
//!     fn enter_busy(&self) {
//!         self.busy.enter_busy();
//!     }
//!     fn exit_busy(&self) {
//!         self.busy.exit_busy();
//!     }
//! }
//!
//! impl SpinnerHandler<u32, String> for Page {
//!     fn handle_error(&self, _error: String) -> Result<u32, String> {
//!         Ok(0)
//!     }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let page = Page { busy: BusyFlag::new() };
//! let fetch = wrap(|| async { Err::<u32, _>("offline".to_string()) }, &page);
//! assert_eq!(fetch.call().await.unwrap(), 0);
//! assert!(!page.busy.is_busy());
//! # });
//! ```
//!
//! The remaining modules make up the `spinguard` terminal demo.

pub mod app;
pub mod config;
pub mod guard;
pub mod logging;
pub mod ui;
