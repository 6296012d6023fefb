//! # airtable-fetch
//!
//! Pulls every record of one Airtable table, page by page, and writes the
//! result to `public/data/ecosystem-table.json` for a static site to read at
//! build time.
//!
//! The pipeline is strictly linear:
//!
//! 1. [`Config::from_env`] loads `.env.local` (or `.env`) and reads the
//!    `AIRTABLE_*` variables
//! 2. [`fetch_table`] follows `offset` continuation tokens until the API
//!    stops returning one
//! 3. [`save_records`] drops each record's `createdTime` and writes a
//!    pretty-printed JSON array
//!
//! ## Quick Start
//!
//! ```no_run
//! use airtable_fetch::{Config, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let root = std::env::current_dir()?;
//!     let config = Config::from_env(&root)?;
//!     let summary = run(&config).await?;
//!     println!("{} records -> {}", summary.record_count, summary.output_path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// HTTP client for the list-records endpoint
pub mod client;
/// Configuration loading
pub mod config;
/// Error types
pub mod error;
/// Pagination loop
pub mod fetcher;
/// JSON output
pub mod persist;
/// End-to-end run
pub mod pipeline;
/// Query-string and URL construction
pub mod query;
/// Records, pages and run summaries
pub mod types;

// Re-export commonly used types
pub use client::AirtableClient;
pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::fetch_table;
pub use persist::save_records;
pub use pipeline::run;
pub use query::{ParamValue, QueryParams, build_table_url};
pub use types::{FetchSummary, Page, Record};
