//! Reducer-based state container.
//!
//! The UI observes [`AuthState`] through a watch channel; commands
//! dispatch [`AuthEvent`]s which pass through the pure [`reduce`]
//! transition function. Every dispatched event is also mirrored onto the
//! shared [`EventBus`] so host code can audit transitions without holding
//! a state subscription.

use crate::types::AuthState;
use core_runtime::events::{AuthEvent, EventBus};
use tokio::sync::watch;

/// Pure transition function from (state, event) to the next state.
///
/// State-changing events clear the opposing field, keeping error and
/// confirmation mutually exclusive. Events that carry no state change
/// (currently [`AuthEvent::VerificationEmailFailed`]) return the state
/// unchanged.
///
/// Pure: no hidden state, identical inputs always produce identical
/// output.
pub fn reduce(state: &AuthState, event: &AuthEvent) -> AuthState {
    match event {
        AuthEvent::SetError { message } => AuthState {
            error: Some(message.clone()),
            confirmation: None,
        },
        AuthEvent::ClearErrorMessage => AuthState {
            error: None,
            confirmation: state.confirmation.clone(),
        },
        AuthEvent::ConfirmEmailSent { message } => AuthState {
            error: None,
            confirmation: Some(message.clone()),
        },
        AuthEvent::VerificationEmailFailed { .. } => state.clone(),
    }
}

/// Shared state container observed by the UI.
///
/// Concurrent dispatches resolve last-write-wins; the container adds no
/// ordering across independent commands. Gating re-submission while a
/// command is outstanding is the UI's responsibility.
pub struct AuthStore {
    state_tx: watch::Sender<AuthState>,
    bus: EventBus,
}

impl AuthStore {
    /// Create a store with both display fields empty, mirroring every
    /// dispatched event onto `bus`.
    pub fn new(bus: EventBus) -> Self {
        let (state_tx, _) = watch::channel(AuthState::default());
        Self { state_tx, bus }
    }

    /// Apply `event` through the reducer and publish the result.
    ///
    /// State watchers are only woken when the reduction actually changed
    /// the state; the event itself always reaches the bus.
    pub fn dispatch(&self, event: AuthEvent) {
        self.state_tx.send_if_modified(|state| {
            let next = reduce(state, &event);
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        });
        // No subscribers on the bus is fine; the watch channel is the
        // primary surface.
        let _ = self.bus.emit(event);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    /// The event bus transitions are mirrored onto.
    pub fn events(&self) -> &EventBus {
        &self.bus
    }
}
