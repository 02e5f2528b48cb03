//! Configuration management module
//!
//! Responsible for loading the TOML configuration file and the
//! environment-derived process settings

pub mod file;
pub mod settings;

pub use file::AppConfig;
pub use settings::Settings;
