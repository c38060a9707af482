//! Shared utilities, configuration, and error handling for Hotelier
//!
//! This crate provides common functionality used across the back-office workspace:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - State machine errors shared by every domain crate

pub mod config;
pub mod error;
pub mod state;

pub use config::{Config, LogFormat};
pub use error::{Error, Result};
pub use state::StateError;
