//! Note creation: slugified Markdown files in the note directory.

use crate::libs::workspace::Workspace;
use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Reduces a title to a file-name-safe slug: ASCII alphanumerics lowered,
/// every other run of characters collapsed to a single dash.
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// File name for a note, optionally prefixed with a date.
pub fn note_file_name(title: &str, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{}-{}.md", date.format("%Y-%m-%d"), slugify(title)),
        None => format!("{}.md", slugify(title)),
    }
}

/// Creates a note with a `# <title>` heading unless a note with the same
/// resolved name already exists; an existing note is never overwritten.
///
/// Returns the note path and whether a new file was written.
pub fn create_note(workspace: &Workspace, title: &str, date: Option<NaiveDate>) -> Result<(PathBuf, bool)> {
    let path = workspace.note_path(&note_file_name(title, date))?;
    if path.exists() {
        return Ok((path, false));
    }

    fs::write(&path, format!("# {}\n\n", title))?;
    Ok((path, true))
}
