//! Imports a gist as the yesterday file.
//!
//! Fetches the gist named by URL or id and overwrites the file the
//! `yesterday` pointer names with the first file's content from the payload.

use crate::api::gist::{self, GistClient};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::workspace::Workspace;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct YesterdayGistArgs {
    /// URL or id of the Gist to import
    url: Option<String>,
}

pub async fn cmd(args: YesterdayGistArgs) -> Result<()> {
    let Some(url) = args.url else {
        msg_bail_anyhow!(Message::GistUrlRequired)
    };

    let workspace = Workspace::new();
    let config = Config::read(&workspace)?;

    let Some(yesterday) = config.yesterday.as_deref() else {
        msg_bail_anyhow!(Message::YesterdayNotSet)
    };

    let client = GistClient::new(config.github_token.as_deref());
    let payload = client.fetch(gist::gist_id(&url)).await?;

    let Some(content) = payload.first_file_content() else {
        msg_bail_anyhow!(Message::GistEmptyPayload)
    };

    let path = workspace.day_path(yesterday)?;
    fs::write(&path, content)?;

    msg_success!(Message::GistWrittenToYesterday(yesterday.to_string()));
    Ok(())
}
