//! Configuration types for airtable-fetch
//!
//! Configuration comes from the process environment, optionally seeded from a
//! `.env.local` (preferred) or `.env` file in the project root. Values already
//! set in the environment are never overridden by the files.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable holding the personal access token
pub const ENV_API_KEY: &str = "AIRTABLE_API_KEY";
/// Environment variable holding the base identifier (`app...`)
pub const ENV_BASE_ID: &str = "AIRTABLE_BASE_ID";
/// Environment variable holding the table identifier or name
pub const ENV_TABLE_ID: &str = "AIRTABLE_TABLE_ID";
/// Environment variable holding the timezone
pub const ENV_TIMEZONE: &str = "AIRTABLE_TIMEZONE";
/// Environment variable holding the user locale
pub const ENV_USER_LOCALE: &str = "AIRTABLE_USER_LOCALE";
/// Environment variable overriding the API root
pub const ENV_API_URL: &str = "AIRTABLE_API_URL";
/// Environment variable overriding the output directory
pub const ENV_OUTPUT_DIR: &str = "AIRTABLE_OUTPUT_DIR";

/// Env file tried first
pub const LOCAL_ENV_FILE: &str = ".env.local";
/// Env file tried when [`LOCAL_ENV_FILE`] is absent
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Name of the file the main table is written to
pub const OUTPUT_FILE_NAME: &str = "ecosystem-table.json";

/// Runtime configuration for one fetch run
#[derive(Clone, Debug)]
pub struct Config {
    /// Bearer token sent on every request
    pub api_key: String,

    /// Base identifier
    pub base_id: String,

    /// Table identifier or table name
    pub table_id: String,

    /// Timezone (default: "UTC"); informational only
    pub timezone: String,

    /// User locale (default: "en-US"); informational only
    pub user_locale: String,

    /// API root (default: "https://api.airtable.com/v0")
    pub api_url: String,

    /// Directory the output file is written to (default: "./public/data")
    pub output_dir: PathBuf,

    /// Per-request timeout (default: 30 seconds)
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration for a project rooted at `project_root`
    ///
    /// Loads the env file (if any) first, then reads the process environment.
    pub fn from_env(project_root: &Path) -> Result<Self> {
        if let Some(path) = load_env_file(project_root)? {
            debug!(path = %path.display(), "loaded env file");
        }
        Self::from_lookup(project_root, |key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    ///
    /// Empty values count as unset. All missing required variables are
    /// reported together in a single [`Error::Config`].
    pub fn from_lookup<F>(project_root: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get(ENV_API_KEY);
        let base_id = get(ENV_BASE_ID);
        let table_id = get(ENV_TABLE_ID);

        let (api_key, base_id, table_id) = match (api_key, base_id, table_id) {
            (Some(k), Some(b), Some(t)) => (k, b, t),
            (k, b, t) => {
                let missing: Vec<&str> = [
                    (k.is_none(), ENV_API_KEY),
                    (b.is_none(), ENV_BASE_ID),
                    (t.is_none(), ENV_TABLE_ID),
                ]
                .into_iter()
                .filter_map(|(absent, name)| absent.then_some(name))
                .collect();

                return Err(Error::Config {
                    message: format!(
                        "ensure {} are set in {} or the environment (missing: {})",
                        [ENV_API_KEY, ENV_BASE_ID, ENV_TABLE_ID].join(", "),
                        LOCAL_ENV_FILE,
                        missing.join(", ")
                    ),
                    key: missing.first().map(|k| k.to_string()),
                });
            }
        };

        let api_url = get(ENV_API_URL).unwrap_or_else(default_api_url);
        url::Url::parse(&api_url)
            .map_err(|e| Error::config(format!("invalid {ENV_API_URL}: {e}"), ENV_API_URL))?;

        let output_dir = get(ENV_OUTPUT_DIR)
            .map(PathBuf::from)
            .map(|p| if p.is_absolute() { p } else { project_root.join(p) })
            .unwrap_or_else(|| project_root.join(default_output_dir()));

        Ok(Self {
            api_key,
            base_id,
            table_id,
            timezone: get(ENV_TIMEZONE).unwrap_or_else(default_timezone),
            user_locale: get(ENV_USER_LOCALE).unwrap_or_else(default_user_locale),
            api_url: api_url.trim_end_matches('/').to_string(),
            output_dir,
            request_timeout: default_request_timeout(),
        })
    }

    /// Full path of the output file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}

/// Load `.env.local` if present, else `.env` if present
///
/// Returns the path that was loaded. Variables already in the environment
/// are left alone.
pub fn load_env_file(project_root: &Path) -> Result<Option<PathBuf>> {
    for name in [LOCAL_ENV_FILE, DEFAULT_ENV_FILE] {
        let path = project_root.join(name);
        if path.is_file() {
            dotenvy::from_path(&path).map_err(|e| {
                Error::config(format!("failed to load {}: {e}", path.display()), name)
            })?;
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_user_locale() -> String {
    "en-US".to_string()
}

fn default_api_url() -> String {
    "https://api.airtable.com/v0".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public").join("data")
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}
