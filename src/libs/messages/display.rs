//! Display implementation for onit application messages.
//!
//! Converts structured [`Message`] data into the human-readable text the
//! msg_* macros print. All user-facing wording lives here.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === INIT MESSAGES ===
            Message::MakingDirectory(dir) => format!("Making directory: {}", dir),
            Message::DirectoryFound(dir) => format!("Onit directory found: {}", dir),
            Message::OnitInitialized => "Onit initialized!".to_string(),

            // === DAY FILE MESSAGES ===
            Message::DayFileCreated(name) => format!("New file created: {}", name),
            Message::DayFileExists(name) => format!("File already exists: {}", name),
            Message::DayFileNotFound(name) => format!("File for day not found: {}", name),
            Message::DayArgumentRequired => "A day must be given (YYYY-MM-DD)".to_string(),
            Message::TodayNotSet => "Today does not exist yet. Run 'onit new' first.".to_string(),
            Message::TodayNotFound(name) => format!("Today file not found: {}", name),
            Message::YesterdayNotSet => "Yesterday does not exist yet.".to_string(),
            Message::YesterdayNotFound(name) => format!("Yesterday file not found: {}", name),
            Message::NoPreviousDayFile => "Cannot copy: there is no file for the current day".to_string(),

            // === LOG MESSAGES ===
            Message::LogCopied => "Log copied to clipboard".to_string(),

            // === NOTE MESSAGES ===
            Message::NoteTitleRequired => "A title must be given for the note".to_string(),
            Message::NoteCreated(name) => format!("Note created: {}", name),
            Message::NoteAlreadyExists(name) => format!("Note already exists: {}", name),

            // === FOLDER MESSAGES ===
            Message::UnknownFolder(name) => {
                format!("Unknown folder '{}'. Valid folders: onit, day, notes, query", name)
            }

            // === QUERY MESSAGES ===
            Message::NoDayFilesFound => "No day files found".to_string(),
            Message::QuerySaved(name) => format!("Query saved: {}", name),

            // === GIST MESSAGES ===
            Message::GistUrlRequired => "Must enter URL of Gist".to_string(),
            Message::GistCreated(url) => format!("Gist created at {}", url),
            Message::GistUrlCopied => "URL copied to clipboard".to_string(),
            Message::GistCreateFailed(status) => format!("Could not create Gist. Status: {}", status),
            Message::GistFetchFailed(status) => format!("Error getting Gist. Status: {}", status),
            Message::GistEmptyPayload => "Gist contains no files".to_string(),
            Message::GistWrittenToYesterday(name) => format!("File from Gist written to {}", name),
            Message::GithubTokenMissing => "No githubToken configured. Add one to config.json to create Gists.".to_string(),
            Message::TodayFileEmpty(name) => format!("Cannot create Gist - file is empty: {}", name),

            // === CLIPBOARD MESSAGES ===
            Message::ClipboardCommandFailed(detail) => format!("Clipboard command failed: {}", detail),
            Message::ClipboardUnavailable => "Clipboard is not supported on this platform".to_string(),

            // === OPENER MESSAGES ===
            Message::OpenCommandFailed(detail) => format!("Failed to open with the system opener: {}", detail),
        };
        write!(f, "{}", text)
    }
}
