//! # Dashmatch
//!
//! Typed client and matching harness for dash-insensitive, case-insensitive,
//! prefix-aware `user_id` search against an Elasticsearch-compatible
//! document store.
//!
//! The matching itself happens store-side: [`settings::IndexBody::user_ids`]
//! configures an analysis chain that strips `-` and lowercases before
//! tokenizing, so `"aa-a-bbb-c-cc"` and `"Aaabbbccc"` both match a stored
//! `"aaa-bbb-ccc"`. This crate contributes the pure halves around that
//! contract: [`query::build_query`] for the phrase-prefix payload,
//! [`query::extract_hits`] for reducing a response to its matched records,
//! plus a thin [`client::StoreClient`] over the store's four HTTP
//! operations and a local replica of the analysis chain in [`analysis`] for
//! reasoning about matches without a live store.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use dashmatch::{IndexBody, StoreClient, UserRecord};
//!
//! # #[tokio::main]
//! # async fn main() -> dashmatch::Result<()> {
//! let store = StoreClient::new("http://localhost:9200");
//!
//! store.create_index("user", &IndexBody::user_ids()).await?;
//! store
//!     .insert_document("user", &UserRecord::new("aaa-bbb-ccc"))
//!     .await?;
//!
//! // After the store's refresh interval has passed:
//! let hits = store.search_phrase("user", "aa-a-bbb-c-cc").await?;
//! assert_eq!(hits, vec![UserRecord::new("aaa-bbb-ccc")]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod settings;
pub mod types;

pub use client::StoreClient;
pub use config::StoreConfig;
pub use error::{DashmatchError, Result};
pub use query::{build_query, extract_hits, SearchRequest};
pub use settings::IndexBody;
pub use types::UserRecord;

/// Install a `fmt` tracing subscriber filtered by `RUST_LOG` (default
/// `info`). Call once at startup if desired; a second call is a no-op.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
