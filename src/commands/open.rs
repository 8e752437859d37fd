//! Opens the day file for a given date; never creates one.

use crate::libs::messages::Message;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::{msg_bail_anyhow, msg_error};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Date of the day file to open (YYYY-MM-DD)
    day: Option<String>,
}

pub fn cmd(open_args: OpenArgs) -> Result<()> {
    let Some(day) = open_args.day else {
        msg_bail_anyhow!(Message::DayArgumentRequired)
    };

    let workspace = Workspace::new();
    let file_name = format!("{}.md", day);
    let path = workspace.day_path(&file_name)?;

    if !path.exists() {
        msg_error!(Message::DayFileNotFound(file_name));
        return Ok(());
    }

    opener::open(&path)
}
