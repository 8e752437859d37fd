//! Configuration management for the onit application.
//!
//! The configuration record is the sole source of truth for which day file
//! is "today" and which is "yesterday". It is never inferred from the
//! filesystem; the pointers only move when a new day file is created.
//!
//! ## Storage
//!
//! The record is persisted as pretty-printed JSON at `<onitRoot>/config.json`
//! with camelCase keys (`today`, `yesterday`, `fileHeader`, `copyIncomplete`,
//! `githubToken`). Unset optional fields are omitted from the file. Each
//! invocation is a fresh load-mutate-save cycle; no locking is attempted, so
//! concurrent invocations racing on the same file is an accepted hazard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use onit::libs::{config::Config, workspace::Workspace};
//!
//! let workspace = Workspace::new();
//! let mut config = Config::read(&workspace)?;
//! config.copy_incomplete = true;
//! config.save(&workspace)?;
//! # anyhow::Ok(())
//! ```

use crate::libs::workspace::Workspace;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name, stored directly under the onit root.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default strftime template for day-file headings ("Tuesday Jan.02.2024").
pub const DEFAULT_FILE_HEADER: &str = "%A %b.%d.%Y";

/// Persisted key-value state of the journal.
///
/// `today` and `yesterday`, when present, each name a day file that may or
/// may not currently exist on disk; existence is re-checked on every read.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// File name of the entry currently considered "today's".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,

    /// File name of the entry considered "yesterday's".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yesterday: Option<String>,

    /// strftime template used for the Markdown heading of new day files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_header: Option<String>,

    /// Whether new-day creation auto-carries incomplete tasks.
    pub copy_incomplete: bool,

    /// Credential for gist API calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
}

impl Config {
    /// Reads the configuration from the workspace root.
    ///
    /// A missing file is not an error; it yields the default record so the
    /// application can run before `init` has ever been invoked. A file that
    /// exists but cannot be read or parsed is reported as an error.
    pub fn read(workspace: &Workspace) -> Result<Config> {
        let config_file_path = workspace.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, creating the onit
    /// root if needed and overwriting any existing file.
    pub fn save(&self, workspace: &Workspace) -> Result<()> {
        let config_file_path = workspace.get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The heading template to use, falling back to the built-in default
    /// when none has been configured.
    pub fn header_format(&self) -> &str {
        self.file_header.as_deref().unwrap_or(DEFAULT_FILE_HEADER)
    }
}
