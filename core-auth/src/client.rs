//! Auth command dispatcher.
//!
//! Validates input, invokes the identity provider gateway, and classifies
//! every outcome into a state transition. Each command performs at most
//! two sequential provider round-trips and never propagates an error past
//! this boundary: every path resolves to a state dispatch or a logged
//! no-op.

use crate::classify;
use crate::state::AuthStore;
use crate::validate;
use bridge_traits::{IdentityGateway, Navigator};
use core_runtime::config::CoreConfig;
use core_runtime::events::{AuthEvent, ErrorMessage, EventBus};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const EMAIL_SENT: &str = "Email has been sent.";
const EMAIL_SEND_FAILED: &str = "Email could not be sent. Try again later.";
const NOT_LOGGED_IN: &str = "User is not logged in";

/// Credential validator and auth command dispatcher.
///
/// One logical operation per call; there is no internal queueing,
/// deduplication, or cancellation, and the provider SDK's own timeout
/// behavior is inherited as-is. The UI is expected to gate re-submission
/// while a command is outstanding.
///
/// # Example
///
/// ```ignore
/// use core_auth::AuthClient;
/// use core_runtime::config::CoreConfig;
/// use std::sync::Arc;
///
/// let config = CoreConfig::builder()
///     .identity_gateway(Arc::new(MyGateway::new()))
///     .build()?;
/// let client = AuthClient::new(&config);
///
/// let mut states = client.store().subscribe();
/// client.sign_in("user@example.com", "secret", &router).await;
/// ```
pub struct AuthClient {
    identity: Arc<dyn IdentityGateway>,
    signed_in_path: String,
    store: AuthStore,
}

impl AuthClient {
    /// Build a client from the runtime configuration.
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            identity: Arc::clone(&config.identity),
            signed_in_path: config.signed_in_path.clone(),
            store: AuthStore::new(EventBus::new(config.event_buffer)),
        }
    }

    /// The state container observed by the UI.
    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    /// Sign in with an email/password pair.
    ///
    /// Presence of both fields is the only local check. On success the
    /// previous error is cleared before `navigator` is asked to move to
    /// the authenticated landing destination; on failure the provider
    /// code is classified into a display message.
    #[instrument(skip_all)]
    pub async fn sign_in(&self, email: &str, password: &str, navigator: &dyn Navigator) {
        if let Err(violations) = validate::validate_sign_in(email, password) {
            self.store.dispatch(AuthEvent::SetError {
                message: ErrorMessage::validation(violations),
            });
            return;
        }

        match self
            .identity
            .sign_in_with_email_and_password(email, password)
            .await
        {
            Ok(session) => {
                info!(uid = %session.user.uid, "sign-in succeeded");
                self.store.dispatch(AuthEvent::ClearErrorMessage);
                navigator.push(&self.signed_in_path);
            }
            Err(failure) => {
                warn!(code = failure.code(), "sign-in rejected");
                self.store.dispatch(AuthEvent::SetError {
                    message: ErrorMessage::provider(classify::sign_in_failure_message(
                        failure.code(),
                    )),
                });
            }
        }
    }

    /// Create an account once the full credential policy passes.
    ///
    /// Validation failures are accumulated and shown without any provider
    /// call. After a successful create, the verification email is
    /// best-effort: a send failure is reported on the event bus and
    /// logged, but the error state stays untouched so the completed
    /// sign-up is not presented as a failure.
    #[instrument(skip_all)]
    pub async fn sign_up(&self, email: &str, password: &str, confirmation: &str) {
        if let Err(violations) = validate::validate_sign_up(email, password, confirmation) {
            self.store.dispatch(AuthEvent::SetError {
                message: ErrorMessage::validation(violations),
            });
            return;
        }

        match self
            .identity
            .create_user_with_email_and_password(email, password)
            .await
        {
            Ok(user) => {
                info!(uid = %user.uid, "account created");
                if let Err(failure) = self.identity.send_email_verification(&user).await {
                    warn!(code = failure.code(), "verification email did not go out");
                    self.store.dispatch(AuthEvent::VerificationEmailFailed {
                        code: failure.code().to_string(),
                    });
                }
            }
            Err(failure) => {
                warn!(code = failure.code(), "sign-up rejected");
                self.store.dispatch(AuthEvent::SetError {
                    message: ErrorMessage::provider(classify::sign_up_failure_message(
                        failure.code(),
                    )),
                });
            }
        }
    }

    /// Re-send the verification email for the active session.
    ///
    /// Checked locally first: with no active session no provider call is
    /// made at all.
    #[instrument(skip_all)]
    pub async fn send_confirmation_email(&self) {
        let Some(user) = self.identity.current_user().await else {
            self.store.dispatch(AuthEvent::SetError {
                message: ErrorMessage::validation(vec![NOT_LOGGED_IN.to_string()]),
            });
            return;
        };

        match self.identity.send_email_verification(&user).await {
            Ok(()) => {
                info!(uid = %user.uid, "verification email re-sent");
                self.store.dispatch(AuthEvent::ConfirmEmailSent {
                    message: EMAIL_SENT.to_string(),
                });
            }
            Err(failure) => {
                warn!(code = failure.code(), "verification email did not go out");
                self.store.dispatch(AuthEvent::SetError {
                    message: ErrorMessage::provider(EMAIL_SEND_FAILED),
                });
            }
        }
    }

    /// Terminate the provider session.
    ///
    /// Best-effort: the UI has no failure surface for sign-out, so a
    /// provider rejection is logged and otherwise dropped. No state event
    /// is emitted either way.
    #[instrument(skip_all)]
    pub async fn sign_out(&self) {
        if let Err(failure) = self.identity.sign_out().await {
            warn!(code = failure.code(), "sign-out rejected by the provider");
        }
    }
}
