//! Navigation Capability
//!
//! Caller-supplied hook for moving the UI between routes. The auth core
//! invokes it exactly once per command, on sign-in success, to move the
//! user into the authenticated area.

/// Router abstraction supplied by the host per sign-in call.
///
/// Implementations typically wrap a history or router object. `push` must
/// not block; route rendering is entirely the host's concern.
pub trait Navigator: Send + Sync {
    /// Move the UI to `path`.
    fn push(&self, path: &str);
}
