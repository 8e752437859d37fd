//! Publishes today's entry as a gist.
//!
//! The resulting URL is printed, copied to the clipboard, and opened in the
//! browser. Requires `githubToken` in the configuration.

use crate::api::GistClient;
use crate::libs::clipboard;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use std::fs;

pub async fn cmd() -> Result<()> {
    let workspace = Workspace::new();
    let config = Config::read(&workspace)?;

    let Some(today) = config.today.as_deref() else {
        msg_bail_anyhow!(Message::TodayNotSet)
    };
    let path = workspace.day_path(today)?;
    if !path.exists() {
        msg_bail_anyhow!(Message::TodayNotFound(today.to_string()));
    }

    let content = fs::read_to_string(&path)?;
    if content.is_empty() {
        msg_bail_anyhow!(Message::TodayFileEmpty(today.to_string()));
    }

    let client = GistClient::new(config.github_token.as_deref());
    let gist = client.create(today, &content).await?;

    msg_success!(Message::GistCreated(gist.html_url.clone()));
    clipboard::copy(&gist.html_url)?;
    msg_print!(Message::GistUrlCopied);

    opener::open(&gist.html_url)
}
