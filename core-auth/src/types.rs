use core_runtime::events::ErrorMessage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared authentication UI state.
///
/// Holds the displayable error / confirmation pair the UI renders from.
/// Both fields start empty at application start, and the reducer keeps
/// them mutually exclusive: every state-changing event explicitly clears
/// the other field.
///
/// # Examples
///
/// ```
/// use core_auth::{AuthState, Phase};
///
/// let state = AuthState::default();
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthState {
    /// Displayable error, if one is currently shown.
    pub error: Option<ErrorMessage>,
    /// Confirmation banner text, if one is currently shown.
    pub confirmation: Option<String>,
}

/// Coarse view of [`AuthState`] as a three-state machine.
///
/// The phase is derived, not stored: both fields empty is `Idle`, an
/// error present is `ErrorShown`, a confirmation present is
/// `ConfirmationShown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing to display.
    Idle,
    /// An error banner is visible.
    ErrorShown,
    /// A confirmation banner is visible.
    ConfirmationShown,
}

impl AuthState {
    /// Derive the machine phase from the message pair.
    ///
    /// The reducer guarantees both fields are never set at once; should a
    /// hand-built state violate that, the error wins.
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::ErrorShown
        } else if self.confirmation.is_some() {
            Phase::ConfirmationShown
        } else {
            Phase::Idle
        }
    }

    /// Whether nothing is currently displayed.
    pub fn is_idle(&self) -> bool {
        self.phase() == Phase::Idle
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::ErrorShown => write!(f, "Error Shown"),
            Phase::ConfirmationShown => write!(f, "Confirmation Shown"),
        }
    }
}
