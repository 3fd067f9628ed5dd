//! Identity Provider Gateway
//!
//! Contract for the external identity provider SDK. All real
//! authentication work (password hashing, token issuance, session
//! persistence, network transport) happens on the other side of this
//! boundary; the core only validates input, invokes these operations, and
//! classifies their outcomes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque failure reported by the identity provider.
///
/// Providers identify failures by string codes (for example
/// `auth/wrong-password`). The core never interprets a code beyond its
/// fixed classification tables; unknown codes fall back to a generic
/// display message per flow.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("identity provider rejected the request: {code}")]
pub struct ProviderFailure {
    code: String,
}

impl ProviderFailure {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The provider's failure code, verbatim.
    pub fn code(&self) -> &str {
        &self.code
    }
}

pub type Result<T> = std::result::Result<T, ProviderFailure>;

/// Account handle as known to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHandle {
    /// Provider-assigned account id.
    pub uid: String,
    /// Email address on record, if the provider exposes it.
    pub email: Option<String>,
    /// Whether the provider has confirmed the email address.
    pub email_verified: bool,
}

/// An authenticated session issued by the provider.
///
/// Token material stays inside the provider SDK; the core only needs to
/// know who the session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The account the session was issued for.
    pub user: UserHandle,
}

/// Async gateway to the external identity provider SDK.
///
/// Host applications wrap their provider SDK (or an HTTP binding to it)
/// behind this trait and hand it to the core configuration. Every fallible
/// operation resolves to a [`ProviderFailure`] carrying the provider's own
/// code; the gateway must not panic across this boundary.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::identity::{AuthSession, IdentityGateway, Result};
/// use async_trait::async_trait;
///
/// struct SdkGateway { sdk: vendor_sdk::Auth }
///
/// #[async_trait]
/// impl IdentityGateway for SdkGateway {
///     async fn sign_in_with_email_and_password(
///         &self,
///         email: &str,
///         password: &str,
///     ) -> Result<AuthSession> {
///         // Forward to the vendor SDK and translate its failure codes
///         todo!()
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Exchange an email/password pair for a session.
    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession>;

    /// Create a new email/password account.
    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserHandle>;

    /// Ask the provider to send a verification email to `user`.
    async fn send_email_verification(&self, user: &UserHandle) -> Result<()>;

    /// The currently authenticated user, if a session is active.
    async fn current_user(&self) -> Option<UserHandle>;

    /// Terminate the active session.
    async fn sign_out(&self) -> Result<()>;
}
