//! Creates a note from a title and opens it.

use crate::libs::messages::Message;
use crate::libs::note;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Title of the note
    title: Option<String>,

    /// Prefix the file name with the current date
    #[arg(short, long)]
    date: bool,
}

pub fn cmd(note_args: NoteArgs) -> Result<()> {
    let Some(title) = note_args.title else {
        msg_bail_anyhow!(Message::NoteTitleRequired)
    };

    let workspace = Workspace::new();
    let date = note_args.date.then(|| Local::now().date_naive());
    let file_name = note::note_file_name(&title, date);
    let (path, created) = note::create_note(&workspace, &title, date)?;

    if created {
        msg_success!(Message::NoteCreated(file_name));
    } else {
        msg_print!(Message::NoteAlreadyExists(file_name));
    }

    opener::open(&path)
}
