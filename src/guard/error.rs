//! Errors surfaced by a wrapped action.

use std::fmt;
use thiserror::Error;

/// One of the three operations a handler must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    EnterBusy,
    ExitBusy,
    HandleError,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::EnterBusy,
        Capability::ExitBusy,
        Capability::HandleError,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::EnterBusy => "enter_busy",
            Capability::ExitBusy => "exit_busy",
            Capability::HandleError => "handle_error",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure of a single invocation of a wrapped action.
///
/// `E` is the error type of the wrapped operation. It only reaches the caller
/// when the handler's `handle_error` hands it back instead of recovering.
#[derive(Debug, Error)]
pub enum GuardError<E> {
    /// The handler is missing one or more required operations. Nothing ran.
    #[error("handler is missing required operations: {}", join_names(.missing))]
    ContractViolation { missing: Vec<Capability> },

    /// The operation failed and the handler chose to surface the error.
    #[error("operation failed: {0}")]
    Operation(E),
}

impl<E> GuardError<E> {
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, GuardError::ContractViolation { .. })
    }

    /// The operation error, if this is not a contract violation.
    pub fn into_operation(self) -> Option<E> {
        match self {
            GuardError::Operation(e) => Some(e),
            GuardError::ContractViolation { .. } => None,
        }
    }
}

fn join_names(missing: &[Capability]) -> String {
    missing
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_message() {
        let err: GuardError<String> = GuardError::ContractViolation {
            missing: vec![Capability::ExitBusy, Capability::HandleError],
        };
        assert_eq!(
            err.to_string(),
            "handler is missing required operations: exit_busy, handle_error"
        );
        assert!(err.is_contract_violation());
        assert_eq!(err.into_operation(), None);
    }

    #[test]
    fn test_operation_message() {
        let err = GuardError::Operation("boom".to_string());
        assert_eq!(err.to_string(), "operation failed: boom");
        assert_eq!(err.into_operation().as_deref(), Some("boom"));
    }
}
