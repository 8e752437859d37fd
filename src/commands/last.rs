//! Concatenates the most recent day files, on screen or saved as a query.

use crate::libs::day;
use crate::libs::messages::Message;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct LastArgs {
    /// Number of day files to show
    #[arg(default_value_t = 5)]
    count: usize,

    /// Save the output to a query file and open it
    #[arg(short, long)]
    save: bool,
}

pub fn cmd(last_args: LastArgs) -> Result<()> {
    let workspace = Workspace::new();

    let names = day::recent_day_files(&workspace, last_args.count)?;
    if names.is_empty() {
        msg_print!(Message::NoDayFilesFound);
        return Ok(());
    }

    let mut output = String::new();
    for name in &names {
        let content = fs::read_to_string(workspace.day_path(name)?)?;
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&content);
    }

    if last_args.save {
        let file_name = format!("{}-last-{}.md", Local::now().format("%Y-%m-%d"), last_args.count);
        let path = workspace.query_path(&file_name)?;
        fs::write(&path, &output)?;
        msg_success!(Message::QuerySaved(file_name));
        opener::open(&path)
    } else {
        print!("{}", output);
        Ok(())
    }
}
