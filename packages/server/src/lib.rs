// Local services marketplace - provider discovery core
//
// This crate provides the backend for finding and contacting local service providers.
// Discovery and business-hours logic are pure functions over provider snapshots;
// storage and geo lookups are collaborators injected through kernel traits.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
