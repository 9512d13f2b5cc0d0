//! engine-core: Shared infrastructure for the document engine crates.
pub mod config;
pub mod error;
pub mod observability;
