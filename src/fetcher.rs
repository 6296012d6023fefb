//! Offset-based pagination over a whole table.

use crate::client::AirtableClient;
use crate::error::Result;
use crate::query::{OFFSET_PARAM, QueryParams};
use crate::types::Record;
use tracing::info;

/// Fetch every record of `table_id`, following continuation tokens
///
/// Pages are requested one at a time; each request carries the caller's
/// parameters plus the most recent `offset`. Records are returned in the
/// order the API produced them. The first failed page aborts the whole
/// fetch and everything accumulated so far is dropped.
pub async fn fetch_table(
    client: &AirtableClient,
    table_id: &str,
    extra: Option<&QueryParams>,
) -> Result<Vec<Record>> {
    let mut records: Vec<Record> = Vec::new();
    let mut offset: Option<String> = None;
    let mut page_number = 0usize;

    loop {
        let mut params = extra.cloned().unwrap_or_default();
        params.set_opt(OFFSET_PARAM, offset.take());

        let url = client.table_url(table_id, Some(&params))?;
        page_number += 1;

        let page = client.fetch_page(&url).await?;
        let count = page.records.len();
        offset = page.next_offset().map(str::to_string);
        records.extend(page.records);

        info!(
            "Fetched {} records (total {}) from {} (page {})",
            count,
            records.len(),
            table_id,
            page_number
        );

        if offset.is_none() {
            break;
        }
    }

    Ok(records)
}
