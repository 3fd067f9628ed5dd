//! # Host Bridge Traits
//!
//! The contract between the auth core and its host application.
//!
//! ## Overview
//!
//! This crate defines the capabilities the core requires but does not own:
//! the identity provider that actually authenticates credentials, and the
//! navigation hook invoked after a successful sign-in. Each host (desktop
//! shell, web shell, test harness) supplies concrete adapters.
//!
//! ## Traits
//!
//! - [`IdentityGateway`](identity::IdentityGateway) - Async surface of the
//!   external identity provider SDK (sign-in, sign-up, verification email,
//!   session lookup, sign-out)
//! - [`Navigator`](navigation::Navigator) - Push-style route change on
//!   sign-in success
//!
//! ## Error Handling
//!
//! Gateway operations fail with [`ProviderFailure`](identity::ProviderFailure),
//! an opaque provider-owned code. Adapters should translate their SDK's
//! native errors into these codes and never panic across the boundary.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds so the core can share
//! them across async tasks behind `Arc`.

pub mod identity;
pub mod navigation;

pub use identity::{AuthSession, IdentityGateway, ProviderFailure, UserHandle};
pub use navigation::Navigator;
