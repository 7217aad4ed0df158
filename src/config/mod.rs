//! Configuration loading for the time-entry engine.

mod loader;

pub use loader::RateConfigLoader;
