//! Opens the file the `yesterday` pointer names, when it exists on disk.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::msg_error;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let workspace = Workspace::new();
    let config = Config::read(&workspace)?;

    let Some(yesterday) = config.yesterday else {
        msg_error!(Message::YesterdayNotSet);
        return Ok(());
    };

    let path = workspace.day_path(&yesterday)?;
    if !path.exists() {
        msg_error!(Message::YesterdayNotFound(yesterday));
        return Ok(());
    }

    opener::open(&path)
}
