//! Configuration module for cardcycle
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CardcyclePaths;
pub use settings::Settings;
