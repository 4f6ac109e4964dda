//! Huddle settings application layer
//!
//! This crate contains the account mutation use cases and the settings flow
//! orchestrator that drives them.

pub mod deps;
pub mod usecases;

pub use deps::AccountDeps;
pub use usecases::settings_flow::SettingsFlow;
