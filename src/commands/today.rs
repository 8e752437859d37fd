//! Opens the file the `today` pointer names, when it exists on disk.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::msg_error;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let workspace = Workspace::new();
    let config = Config::read(&workspace)?;

    let Some(today) = config.today else {
        msg_error!(Message::TodayNotSet);
        return Ok(());
    };

    let path = workspace.day_path(&today)?;
    if !path.exists() {
        msg_error!(Message::TodayNotFound(today));
        return Ok(());
    }

    opener::open(&path)
}
