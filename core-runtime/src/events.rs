//! # Auth Event System
//!
//! Typed authentication events broadcast over `tokio::sync::broadcast`.
//! The auth module publishes one event per classified outcome; the host UI
//! and any auditing code subscribe independently.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     emit      ┌───────────┐     subscribe    ┌────────────┐
//! │ Auth Module ├──────────────>│ EventBus  ├─────────────────>│ Host UI    │
//! └─────────────┘               │ (broadcast│                  └────────────┘
//!                               │  channel) │     subscribe    ┌────────────┐
//!                               └───────────┘─────────────────>│ Audit log  │
//!                                                              └────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{AuthEvent, ErrorMessage, EventBus};
//!
//! let event_bus = EventBus::new(100);
//! let mut subscriber = event_bus.subscribe();
//!
//! let event = AuthEvent::SetError {
//!     message: ErrorMessage::provider("Wrong password"),
//! };
//! event_bus.emit(event).ok();
//! ```
//!
//! ## Wire shape
//!
//! Events serialize as `{ "type": ..., "payload": ... }` so host bridges
//! can forward them across a JS or FFI boundary unchanged:
//!
//! - `set_error` - a validation or provider error became visible
//! - `clear_error_message` - the error banner was dismissed
//! - `confirm_email_sent` - a confirmation banner became visible
//! - `verification_email_failed` - post-sign-up verification email did not
//!   go out (state is untouched; informational only)
//!
//! ## Error Handling
//!
//! `emit` fails only when no subscriber exists, which publishers may
//! ignore. Slow subscribers receive `RecvError::Lagged` and can continue;
//! `RecvError::Closed` signals shutdown.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
///
/// Auth events are rare (one per submitted form), so the buffer mostly
/// absorbs subscribers that poll instead of awaiting.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

// ============================================================================
// Display Payloads
// ============================================================================

/// Which layer produced a displayable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Detected locally, before any provider call was made.
    Validation,
    /// Classified from an identity provider failure code.
    Provider,
}

/// Displayable error shown by the UI.
///
/// `lines` preserves rule order; the UI renders one element per line.
/// Joining behavior lives in the `Display` impl so hosts that want a
/// single string get the newline-joined form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Producing layer, for host-side styling or metrics.
    pub kind: ErrorKind,
    /// Display lines, in rule order, no trailing newline.
    pub lines: Vec<String>,
}

impl ErrorMessage {
    /// An accumulated validation result.
    pub fn validation(lines: Vec<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            lines,
        }
    }

    /// A single classified provider message.
    pub fn provider(line: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Provider,
            lines: vec![line.into()],
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

// ============================================================================
// Authentication Events
// ============================================================================

/// State-update events produced by the auth command dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AuthEvent {
    /// A validation or provider error became visible.
    SetError {
        /// The displayable error.
        message: ErrorMessage,
    },
    /// The error banner was dismissed (sign-in succeeded, or the host
    /// cleared it explicitly).
    ClearErrorMessage,
    /// A confirmation banner became visible.
    ConfirmEmailSent {
        /// Banner text.
        message: String,
    },
    /// The post-sign-up verification email could not be sent. Carries no
    /// state change; hosts that care can retry via the resend command.
    VerificationEmailFailed {
        /// The provider's failure code.
        code: String,
    },
}

impl AuthEvent {
    /// Returns a human-readable description of the event.
    pub fn description(&self) -> &str {
        match self {
            AuthEvent::SetError { .. } => "Error shown to the user",
            AuthEvent::ClearErrorMessage => "Error banner cleared",
            AuthEvent::ConfirmEmailSent { .. } => "Confirmation banner shown",
            AuthEvent::VerificationEmailFailed { .. } => "Verification email not sent",
        }
    }

    /// Returns the severity level of the event.
    pub fn severity(&self) -> EventSeverity {
        match self {
            AuthEvent::SetError { .. } => EventSeverity::Error,
            AuthEvent::VerificationEmailFailed { .. } => EventSeverity::Warning,
            AuthEvent::ConfirmEmailSent { .. } => EventSeverity::Info,
            AuthEvent::ClearErrorMessage => EventSeverity::Debug,
        }
    }
}

/// Event severity levels for filtering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventSeverity {
    /// Debug-level events (verbose)
    Debug,
    /// Informational events
    Info,
    /// Warning events
    Warning,
    /// Error events
    Error,
}

// ============================================================================
// Event Bus
// ============================================================================

/// Central event bus for publishing and subscribing to auth events.
///
/// Uses `tokio::sync::broadcast` internally, which provides:
/// - Multiple producers (clone the `EventBus`)
/// - Multiple consumers (each `subscribe()` creates a new receiver)
/// - Non-blocking sends (events are cloned for each subscriber)
/// - Lagging detection (slow subscribers get `RecvError::Lagged`)
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AuthEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer size.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; the configuration builder rejects a
    /// zero buffer before it can reach here.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an
    /// error if there are none.
    pub fn emit(&self, event: AuthEvent) -> Result<usize, SendError<AuthEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber to receive future events.
    ///
    /// Past events are not replayed.
    pub fn subscribe(&self) -> Receiver<AuthEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
