//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the account platform core:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - Auth event bus
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the auth module depends on.
//! It establishes the logging conventions, the fail-fast configuration
//! builder, and the event broadcasting mechanism the host UI observes.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use error::{Error, Result};
