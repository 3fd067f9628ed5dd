//! # Authentication Module
//!
//! Client-side email/password authentication state management.
//!
//! ## Overview
//!
//! This crate wraps an external identity provider's sign-in, sign-up,
//! email verification, and sign-out flows. It validates credentials
//! locally, classifies provider failure codes into fixed display
//! messages, and exposes the resulting error/confirmation state to the
//! host UI through a reducer-based state container.
//!
//! ## Features
//!
//! - Presence and policy validation with accumulated violation lists
//! - Provider failure-code classification per flow
//! - Pure-reducer state container with watch-channel subscriptions
//! - Auth event emission for host-side auditing
//!
//! ## Usage
//!
//! ```ignore
//! use core_auth::AuthClient;
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .identity_gateway(Arc::new(SdkGateway::new()))
//!     .build()?;
//! let client = AuthClient::new(&config);
//!
//! let mut states = client.store().subscribe();
//! client.sign_up("user@example.com", "Abcdef1!", "Abcdef1!").await;
//! ```

pub mod classify;
pub mod client;
pub mod state;
pub mod types;
pub mod validate;

pub use client::AuthClient;
pub use state::{reduce, AuthStore};
pub use types::{AuthState, Phase};
