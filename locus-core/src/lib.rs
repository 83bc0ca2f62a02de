//! # Locus Core
//!
//! Core types, errors, and traits for the Locus geocoding proxy.
//!
//! This crate provides the foundational building blocks used by all other Locus crates:
//!
//! - **Types**: The `Place` record returned by the upstream geocoder
//! - **Errors**: The error taxonomy for the lookup path
//! - **Constants**: Cache TTL and upstream defaults
//! - **Traits**: The `CacheStore` interface implemented by the cache backends
//!
//! ## Example
//!
//! ```rust
//! use locus_core::Place;
//!
//! // Types are serializable with Nominatim's wire names
//! let place = Place::default();
//! let json = serde_json::to_string(&place).unwrap();
//! assert!(json.contains("display_name"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Error, Result};
pub use traits::CacheStore;
pub use types::Place;
