//! APOD Gallery Core Library
//!
//! Feed model and supporting logic for the Astronomy Picture of the Day
//! gallery: entry types, HTML escaping for string-assembled markup,
//! best-effort YouTube URL resolution, the feed client, and the
//! "did you know" fact pool. No UI dependencies live here.
//!
//! ## Quick Start
//!
//! ```ignore
//! use apod_feed::FeedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeedClient::default();
//!     for entry in client.fetch_entries().await? {
//!         println!("{} ({})", entry.title, entry.date);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod escape;
pub mod facts;
pub mod types;
pub mod video;

// Re-exports
pub use client::{FeedClient, DEFAULT_FEED_URL};
pub use error::{FeedError, FeedResult};
pub use escape::escape_html;
pub use types::{FeedEntry, MediaType};
