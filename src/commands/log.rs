//! Prints today's and yesterday's entries together and copies them to the
//! clipboard, today first with a blank-line separator.

use crate::libs::clipboard;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::workspace::Workspace;
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use std::fs;

pub fn cmd() -> Result<()> {
    let workspace = Workspace::new();
    let config = Config::read(&workspace)?;

    let Some(today) = config.today.as_deref() else {
        msg_bail_anyhow!(Message::TodayNotSet)
    };
    let today_path = workspace.day_path(today)?;
    if !today_path.exists() {
        msg_bail_anyhow!(Message::TodayNotFound(today.to_string()));
    }
    let today_content = fs::read_to_string(&today_path)?;

    let yesterday_content = match config.yesterday.as_deref() {
        Some(yesterday) => {
            let path = workspace.day_path(yesterday)?;
            if path.exists() {
                Some(fs::read_to_string(&path)?)
            } else {
                None
            }
        }
        None => None,
    };

    let log = assemble(&today_content, yesterday_content.as_deref());
    print!("{}", log);
    clipboard::copy(&log)?;
    msg_info!(Message::LogCopied);
    Ok(())
}

/// Joins today's content with yesterday's; day files end in a newline, so
/// the single `\n` separator yields a blank line between the two entries.
pub fn assemble(today: &str, yesterday: Option<&str>) -> String {
    match yesterday {
        Some(yesterday) => format!("{}\n{}", today, yesterday),
        None => today.to_string(),
    }
}
