//! Configuration loading.

pub mod loader;

pub use loader::{ConfigLoader, ConfigSection, CONFIG_FILE};
