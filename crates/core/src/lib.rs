//! Climate API Core Library
//!
//! Shared utilities for the climate station API:
//! - Configuration loading (XDG-compliant)
//! - File system utilities
//! - Application defaults

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::{exe_relative_path, is_file};

/// Application name used for XDG paths
pub const APP_NAME: &str = "climate-api";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 9810;

/// Dataset location relative to the directory holding the executable
pub const DEFAULT_DATABASE_PATH: &str = "Resources/hawaii.sqlite";
