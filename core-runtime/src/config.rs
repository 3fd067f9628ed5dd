//! # Core Configuration Module
//!
//! Builder-based configuration for the account platform core.
//!
//! ## Overview
//!
//! `CoreConfig` holds the host-supplied bridge implementations and the few
//! tunables the auth module exposes. The builder enforces fail-fast
//! validation so a missing capability is reported at startup with an
//! actionable message instead of surfacing mid-flow.
//!
//! ## Required Dependencies
//!
//! - `IdentityGateway` - the wrapped identity provider SDK
//!
//! The navigation capability is not configured here: it is supplied per
//! sign-in call by whichever view submitted the form.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .identity_gateway(Arc::new(MyGateway::new()))
//!     .signed_in_path("/home")
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use crate::events::DEFAULT_EVENT_BUFFER_SIZE;
use bridge_traits::IdentityGateway;
use std::fmt;
use std::sync::Arc;

/// Landing path pushed to the navigator after a successful sign-in.
pub const DEFAULT_SIGNED_IN_PATH: &str = "/dashboard";

/// Core configuration for the account platform core.
///
/// Use [`CoreConfig::builder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Gateway to the external identity provider (required).
    pub identity: Arc<dyn IdentityGateway>,

    /// Route pushed to the navigator on sign-in success.
    pub signed_in_path: String,

    /// Buffer size of the auth event bus.
    pub event_buffer: usize,
}

impl CoreConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

impl fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreConfig")
            .field("signed_in_path", &self.signed_in_path)
            .field("event_buffer", &self.event_buffer)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CoreConfig`].
#[derive(Default)]
pub struct CoreConfigBuilder {
    identity: Option<Arc<dyn IdentityGateway>>,
    signed_in_path: Option<String>,
    event_buffer: Option<usize>,
}

impl CoreConfigBuilder {
    /// Set the identity provider gateway (required).
    pub fn identity_gateway(mut self, gateway: Arc<dyn IdentityGateway>) -> Self {
        self.identity = Some(gateway);
        self
    }

    /// Override the signed-in landing path (default: `/dashboard`).
    pub fn signed_in_path(mut self, path: impl Into<String>) -> Self {
        self.signed_in_path = Some(path.into());
        self
    }

    /// Override the event bus buffer size.
    pub fn event_buffer(mut self, capacity: usize) -> Self {
        self.event_buffer = Some(capacity);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::CapabilityMissing`] when no identity gateway was provided
    /// - [`Error::Config`] for out-of-range tunables
    pub fn build(self) -> Result<CoreConfig> {
        let identity = self.identity.ok_or_else(|| Error::CapabilityMissing {
            capability: "IdentityGateway".to_string(),
            message: "No identity provider gateway was provided. Wrap the host \
                      identity SDK in bridge_traits::IdentityGateway and pass it \
                      to CoreConfigBuilder::identity_gateway."
                .to_string(),
        })?;

        let event_buffer = self.event_buffer.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE);
        if event_buffer == 0 {
            return Err(Error::Config(
                "event_buffer must be greater than zero".to_string(),
            ));
        }

        Ok(CoreConfig {
            identity,
            signed_in_path: self
                .signed_in_path
                .unwrap_or_else(|| DEFAULT_SIGNED_IN_PATH.to_string()),
            event_buffer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::identity::{AuthSession, Result as ProviderResult, UserHandle};

    struct NullGateway;

    #[async_trait]
    impl IdentityGateway for NullGateway {
        async fn sign_in_with_email_and_password(
            &self,
            _email: &str,
            _password: &str,
        ) -> ProviderResult<AuthSession> {
            unimplemented!("not exercised by config tests")
        }

        async fn create_user_with_email_and_password(
            &self,
            _email: &str,
            _password: &str,
        ) -> ProviderResult<UserHandle> {
            unimplemented!("not exercised by config tests")
        }

        async fn send_email_verification(&self, _user: &UserHandle) -> ProviderResult<()> {
            unimplemented!("not exercised by config tests")
        }

        async fn current_user(&self) -> Option<UserHandle> {
            None
        }

        async fn sign_out(&self) -> ProviderResult<()> {
            Ok(())
        }
    }

    #[test]
    fn build_fails_without_gateway() {
        let result = CoreConfig::builder().build();
        match result {
            Err(Error::CapabilityMissing { capability, .. }) => {
                assert_eq!(capability, "IdentityGateway");
            }
            other => panic!("expected CapabilityMissing, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_applied() {
        let config = CoreConfig::builder()
            .identity_gateway(Arc::new(NullGateway))
            .build()
            .unwrap();
        assert_eq!(config.signed_in_path, DEFAULT_SIGNED_IN_PATH);
        assert_eq!(config.event_buffer, DEFAULT_EVENT_BUFFER_SIZE);
    }

    #[test]
    fn overrides_are_kept() {
        let config = CoreConfig::builder()
            .identity_gateway(Arc::new(NullGateway))
            .signed_in_path("/home")
            .event_buffer(16)
            .build()
            .unwrap();
        assert_eq!(config.signed_in_path, "/home");
        assert_eq!(config.event_buffer, 16);
    }

    #[test]
    fn zero_event_buffer_is_rejected() {
        let result = CoreConfig::builder()
            .identity_gateway(Arc::new(NullGateway))
            .event_buffer(0)
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
