//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`WheelError`, `MatchingError`, `BattleError`,
//! `EditError`) live next to the state machines they guard. None of them is a
//! failure in the systems sense: each one is an input guard that leaves the
//! state untouched. The shared trait lets the runtime classify and log them
//! uniformly.

/// Severity level of an error, used for categorization and logging.
///
/// - **Recoverable**: the same input will be accepted once a pending
///   transition completes (e.g. spinning while the wheel still turns)
/// - **Validation**: the input is invalid for the current state and must
///   change before it can succeed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Input arrived while a timed transition was pending.
    Recoverable,

    /// Input is not valid for the current state.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if retrying later may succeed.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on whether waiting would help, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
    }
}
