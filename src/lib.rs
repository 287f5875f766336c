//! # itemfeed
//!
//! Backend library for loading a remote JSON item list, cleaned and
//! deterministically ordered for display.
//!
//! ## Design Philosophy
//!
//! itemfeed is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Deterministic** - Identical payloads always produce identical output
//! - **All-or-nothing** - A batch either fully decodes or the load fails;
//!   no partial results and no retries
//! - **Stateless** - The crate holds no "current items" state; results are
//!   values owned by the caller
//!
//! ## Pipeline
//!
//! One `load` call runs four stages strictly in sequence: fetch the payload
//! bytes from the endpoint, decode them into [`Item`]s, drop items with a
//! blank name, and order the survivors by category (`listId`) ascending and
//! id ascending within each category. Only the fetch suspends.
//!
//! Overlapping `load` calls are not cancelled; each carries a strictly
//! increasing [`LoadToken`] so the consumer can discard completions that a
//! newer call has superseded.
//!
//! ## Quick Start
//!
//! ```no_run
//! use itemfeed::{Config, ItemLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = ItemLoader::new(Config::default())?;
//!     let result = loader.load().await?;
//!
//!     for item in &result.items {
//!         println!("{} [{}] {}", item.id, item.list_id, item.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Payload decoding
pub mod decoder;
/// Error types
pub mod error;
/// HTTP retrieval
pub mod fetcher;
/// Pipeline orchestration
pub mod loader;
/// Filtering and display ordering
pub mod ordering;
/// Core types
pub mod types;

pub use config::{Config, DEFAULT_ENDPOINT};
pub use decoder::decode_items;
pub use error::{DecodeError, Error, NetworkError, Result};
pub use fetcher::Fetcher;
pub use loader::{ItemLoader, LoadResult};
pub use ordering::{order_for_display, retain_named};
pub use types::{Item, LoadToken};
