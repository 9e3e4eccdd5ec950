//! Configuration module for the document shell
//!
//! This module provides the `ShellConfig` struct and its type-safe builder,
//! plus the `RuntimeConfig` settings read once from the environment.

// Sub-modules
pub mod builder;
pub mod env;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ShellConfigBuilder, WithContentRoot};
pub use types::{ConfigError, RemoteSettings, RuntimeConfig, ShellConfig};
