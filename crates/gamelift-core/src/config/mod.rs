//! Configuration and profile management for GameLift clients
//!
// Allow nested config module - this is intentional for the config subsystem

#![allow(clippy::module_inception)]
//!
//! Profiles describe where a client handle connects: GameLift Local on a
//! developer machine, a regional endpoint, or an explicit gateway URL.
//!
//! # Features
//!
//! - Multiple named profiles
//! - Environment variable expansion in config files
//! - Platform-specific config file locations

pub mod config;
pub mod error;

// Re-export main types for convenience
pub use config::{Config, Profile};
pub use error::{ConfigError, Result};
