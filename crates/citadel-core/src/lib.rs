//! Citadel Core Library
//!
//! Paginated character feed with client-side filtering and sorting.
//!
//! ## Overview
//!
//! Citadel browses the characters of a public GraphQL API. Pages are fetched
//! one at a time, appended into a single growing list, and a display list is
//! derived from it by filtering on status and species and sorting by name or
//! origin. The desktop gallery and the CLI are thin shells over this crate.
//!
//! ## Pipeline
//!
//! ```text
//! GraphQlClient ──page──▶ Feed ──merge──▶ AccumulatedList ──derive──▶ Vec<Character>
//!      ▲                   │
//!      └── PageRequest ────┘   (at most one in flight)
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use citadel_core::{Feed, FilterState, GraphQlClient, GalleryConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = GraphQlClient::from_config(&GalleryConfig::default());
//!     let mut feed = Feed::new();
//!
//!     if let Some(request) = feed.begin_initial() {
//!         feed.load(&client, request).await;
//!     }
//!
//!     let humans = feed.derive(&FilterState::new().with_species("human"));
//!     for c in humans {
//!         println!("{}", c.name.unwrap_or_default());
//!     }
//! }
//! ```

pub mod accumulator;
pub mod client;
pub mod collation;
pub mod config;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod logging;
pub mod pipeline;
pub mod query;
pub mod scroll;
pub mod types;

// Re-exports
pub use accumulator::{merge, AccumulatedList, Accumulator};
pub use client::{GraphQlClient, PageSource};
pub use config::{GalleryConfig, DEFAULT_ENDPOINT};
pub use error::{FeedError, GalleryError, GalleryResult};
pub use feed::{Feed, FeedStatus, PageRequest};
pub use i18n::{Language, Messages};
pub use pipeline::{derive, FilterState, SortKey};
pub use query::{QueryKey, GET_CHARACTERS};
pub use scroll::ScrollMetrics;
pub use types::*;
