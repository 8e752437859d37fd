//! Onit directory and configuration initialization.
//!
//! Creates the onit root and its `days/`, `notes/`, `archive/` and `query/`
//! subdirectories, sets the default heading template when none is
//! configured, and persists the configuration. Safe to re-run.

use crate::libs::config::{Config, DEFAULT_FILE_HEADER};
use crate::libs::messages::Message;
use crate::libs::workspace::Workspace;
use crate::{msg_print, msg_success};
use anyhow::Result;
use std::fs;

pub fn cmd() -> Result<()> {
    let workspace = Workspace::new();

    for dir in workspace.all_dirs() {
        if dir.exists() {
            msg_print!(Message::DirectoryFound(dir.display().to_string()));
        } else {
            msg_print!(Message::MakingDirectory(dir.display().to_string()));
            fs::create_dir_all(&dir)?;
        }
    }

    let mut config = Config::read(&workspace)?;
    if config.file_header.is_none() {
        config.file_header = Some(DEFAULT_FILE_HEADER.to_string());
    }
    config.copy_incomplete = false;
    config.save(&workspace)?;

    msg_success!(Message::OnitInitialized);
    Ok(())
}
