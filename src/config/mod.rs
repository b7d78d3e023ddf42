// Configuration module for the file operations demo

#[allow(clippy::module_inception)]
pub mod config;
pub mod config_loader;

// Re-export main types for easier access
pub use config::DemoConfig;
pub use config_loader::ConfigLoader;
