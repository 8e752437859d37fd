//! GitHub gist client for publishing and importing day files.
//!
//! Talks to the gists v3 REST API. Creating a gist requires the
//! `githubToken` config value; fetching works anonymously. Requests are
//! one-shot with no retry; failures surface as a single reported error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use onit::api::gist::GistClient;
//!
//! # async fn publish() -> anyhow::Result<()> {
//! let client = GistClient::new(Some("ghp_xxxxxxxxxxxxxxxxxxxx"));
//! let gist = client.create("2024-01-02.md", "# Tuesday Jan.02.2024\n").await?;
//! println!("{}", gist.html_url);
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base endpoint of the gists API.
pub const GIST_API_URL: &str = "https://api.github.com/gists";

/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = "onit";

/// Client for creating and fetching gists.
#[derive(Debug)]
pub struct GistClient {
    client: Client,
    token: Option<String>,
}

/// A single file inside a gist payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct GistFile {
    pub content: String,
}

/// The subset of the gist payload onit cares about.
#[derive(Debug, Deserialize)]
pub struct Gist {
    pub html_url: String,
    pub files: BTreeMap<String, GistFile>,
}

#[derive(Debug, Serialize)]
struct CreateGistRequest {
    description: String,
    public: bool,
    files: BTreeMap<String, GistFile>,
}

impl GistClient {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            token: token.map(str::to_owned),
        }
    }

    /// Creates a secret gist holding a single file and returns the payload.
    pub async fn create(&self, file_name: &str, content: &str) -> Result<Gist> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| msg_error_anyhow!(Message::GithubTokenMissing))?;

        let mut files = BTreeMap::new();
        files.insert(
            file_name.to_string(),
            GistFile {
                content: content.to_string(),
            },
        );
        let request = CreateGistRequest {
            description: file_name.to_string(),
            public: false,
            files,
        };

        let response = self
            .client
            .post(GIST_API_URL)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", format!("token {}", token))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(msg_error_anyhow!(Message::GistCreateFailed(response.status().to_string())));
        }

        Ok(response.json::<Gist>().await?)
    }

    /// Fetches a gist by its identifier.
    pub async fn fetch(&self, id: &str) -> Result<Gist> {
        let mut request = self
            .client
            .get(format!("{}/{}", GIST_API_URL, id))
            .header("User-Agent", USER_AGENT);
        if let Some(token) = self.token.as_deref() {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(msg_error_anyhow!(Message::GistFetchFailed(response.status().to_string())));
        }

        Ok(response.json::<Gist>().await?)
    }
}

impl Gist {
    /// Content of the first file in the payload, if any. The API keys files
    /// by name; "first" is the alphabetically first, which matches the
    /// single-file gists onit creates.
    pub fn first_file_content(&self) -> Option<&str> {
        self.files.values().next().map(|file| file.content.as_str())
    }
}

/// Extracts the gist identifier from a full URL or a bare id.
pub fn gist_id(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gist_id_from_url() {
        assert_eq!(gist_id("https://gist.github.com/lacodda/abc123"), "abc123");
        assert_eq!(gist_id("https://gist.github.com/lacodda/abc123/"), "abc123");
        assert_eq!(gist_id("abc123"), "abc123");
    }

    #[test]
    fn test_first_file_content_from_payload() {
        let gist: Gist = serde_json::from_str(
            r##"{
                "html_url": "https://gist.github.com/abc123",
                "files": {
                    "2024-01-01.md": { "content": "# Monday\n" }
                }
            }"##,
        )
        .unwrap();
        assert_eq!(gist.first_file_content(), Some("# Monday\n"));
    }

    #[test]
    fn test_first_file_content_empty_payload() {
        let gist: Gist = serde_json::from_str(r#"{ "html_url": "u", "files": {} }"#).unwrap();
        assert_eq!(gist.first_file_content(), None);
    }
}
