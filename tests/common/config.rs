//! Test configuration helpers

use airtable_fetch::Config;
use std::path::Path;
use std::time::Duration;
use wiremock::MockServer;

/// Base identifier used by all mocked requests
pub const TEST_BASE_ID: &str = "appTEST";
/// Table identifier used by all mocked requests
pub const TEST_TABLE_ID: &str = "tblPROJECTS";
/// API key used by all mocked requests
pub const TEST_API_KEY: &str = "patTEST.secret";

/// Path the mock server sees for the test table
pub fn table_path() -> String {
    format!("/v0/{}/{}", TEST_BASE_ID, TEST_TABLE_ID)
}

/// Configuration pointing at `server`, writing under `root/public/data`
pub fn config_for(server: &MockServer, root: &Path) -> Config {
    Config {
        api_key: TEST_API_KEY.to_string(),
        base_id: TEST_BASE_ID.to_string(),
        table_id: TEST_TABLE_ID.to_string(),
        timezone: "UTC".to_string(),
        user_locale: "en-US".to_string(),
        api_url: format!("{}/v0", server.uri()),
        output_dir: root.join("public").join("data"),
        request_timeout: Duration::from_secs(5),
    }
}
