//! Opens one of the onit folders by shortcut name.

use crate::libs::messages::Message;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::msg_error;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder shortcut: onit, day, notes or query (the root when omitted)
    name: Option<String>,
}

pub fn cmd(folder_args: FolderArgs) -> Result<()> {
    let workspace = Workspace::new();

    let dir = match folder_args.name.as_deref() {
        None | Some("onit") => workspace.root().to_path_buf(),
        Some("day") | Some("days") => workspace.day_dir(),
        Some("notes") => workspace.note_dir(),
        Some("query") => workspace.query_dir(),
        Some(other) => {
            msg_error!(Message::UnknownFolder(other.to_string()));
            return Ok(());
        }
    };

    opener::open(&dir)
}
