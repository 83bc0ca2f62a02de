//! # Locus Geocode
//!
//! Upstream Nominatim client and the cache-aside lookup service.
//!
//! [`LookupService`] implements the read-through protocol: check the
//! cache store, on a miss fetch from Nominatim, fill the cache with a
//! 15-second TTL, and report whether the response was served from cache.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use locus_cache::MemoryStore;
//! use locus_geocode::{LookupService, NominatimClient};
//!
//! let service = LookupService::new(Arc::new(MemoryStore::new()), NominatimClient::new());
//! let lookup = service.resolve("Boston").await?;
//! println!("{} results (cached: {})", lookup.places.len(), lookup.from_cache);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod lookup;
pub mod nominatim;

pub use lookup::{Lookup, LookupConfig, LookupService};
pub use nominatim::{NominatimClient, NominatimConfig};
