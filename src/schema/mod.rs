//! Schema module - Configuration and validation types for Life simulations.

mod config;

pub use config::*;
