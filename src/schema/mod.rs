//! Schema module - Configuration types for lineage searches.

mod config;

pub use config::*;
