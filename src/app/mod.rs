//! Demo application: state, event handling, and the guarded shop actions.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
pub mod tasks;
