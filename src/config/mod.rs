//! Configuration and path management for finrep

pub mod paths;
pub mod settings;

pub use paths::FinrepPaths;
pub use settings::Settings;
