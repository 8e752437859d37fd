//! # Onit - Personal Command-Line Journal
//!
//! A command-line utility for keeping a directory of dated Markdown day
//! files, tracking which file is "today" and "yesterday", and publishing
//! entries as GitHub gists.
//!
//! ## Features
//!
//! - **Day Tracking**: Create a file per day and advance today/yesterday pointers
//! - **Task Carry-Over**: Copy incomplete checklist items into the new day
//! - **Notes**: Create slugified Markdown notes, optionally date-prefixed
//! - **Log**: Print and copy today's and yesterday's entries together
//! - **Queries**: Concatenate the most recent day files, on screen or saved
//! - **Gists**: Publish today's entry as a gist or import one as yesterday
//!
//! ## Usage
//!
//! ```rust,no_run
//! use onit::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
