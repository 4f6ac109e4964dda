//! Settings flow orchestration.

pub mod orchestrator;

pub use orchestrator::SettingsFlow;
