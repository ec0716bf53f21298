//! Configuration module for NixCI
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::NixciPaths;
pub use settings::Settings;
