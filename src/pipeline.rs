//! End-to-end run: fetch the configured table and write it to disk.

use crate::client::AirtableClient;
use crate::config::{Config, OUTPUT_FILE_NAME};
use crate::error::Result;
use crate::fetcher::fetch_table;
use crate::persist::save_records;
use crate::query::QueryParams;
use crate::types::FetchSummary;
use tracing::{debug, info};

/// Fetch the main table and save it as `ecosystem-table.json`
///
/// Nothing is written unless every page was fetched successfully.
pub async fn run(config: &Config) -> Result<FetchSummary> {
    info!("Starting Airtable fetch");
    debug!(
        base_id = %config.base_id,
        timezone = %config.timezone,
        user_locale = %config.user_locale,
        api_url = %config.api_url,
        "configuration"
    );

    let client = AirtableClient::new(config)?;

    info!("Fetching main table: {}", config.table_id);
    let params = QueryParams::new();
    let records = fetch_table(&client, &config.table_id, Some(&params)).await?;
    let record_count = records.len();

    let output_path = save_records(&config.output_dir, OUTPUT_FILE_NAME, records).await?;

    info!("SUMMARY:");
    info!(
        "  Main table \"{}\": {} records (saved to {})",
        config.table_id, record_count, OUTPUT_FILE_NAME
    );
    info!("Airtable fetch completed successfully");

    Ok(FetchSummary {
        table: config.table_id.clone(),
        record_count,
        output_path,
    })
}
