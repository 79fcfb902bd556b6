//! Core types and configuration for mssqlbuild.
//!
//! This crate defines the `mssqlbuild.toml` schema ([`MssqlBuildConfig`]),
//! the deduplicated tag collection ([`TagSet`]), and shared error types.

pub mod config;
pub mod error;
pub mod tags;

pub use config::{ImageConfig, MssqlBuildConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use tags::TagSet;
