//! Concrete search provider implementations.
//!
//! Each submodule implements [`crate::provider::SearchProvider`] for one
//! upstream search source.

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGoProvider;
