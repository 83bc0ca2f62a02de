//! # Locus Cache
//!
//! `CacheStore` backends for the Locus geocoding proxy.
//!
//! Two implementations of the [`locus_core::CacheStore`] contract:
//!
//! - [`RedisStore`]: the production backend, a shared async connection
//!   handle created once at startup and cloned across requests
//! - [`MemoryStore`]: a process-local TTL map for development and tests
//!
//! ## Example
//!
//! ```rust,ignore
//! use locus_cache::{CacheConfig, RedisStore};
//!
//! let config = CacheConfig::from_env()?;
//! let store = RedisStore::connect(&config).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod config;
pub mod memory;
pub mod redis;

pub use config::{CacheConfig, RedisMode};
pub use memory::MemoryStore;
pub use self::redis::RedisStore;
