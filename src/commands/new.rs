//! Creation of the file for a new day.
//!
//! Runs the day tracker for the target date (today unless `--date` is
//! given), persists the advanced pointers, and opens the resulting file.

use crate::libs::config::Config;
use crate::libs::day::{self, NewDayOptions};
use crate::libs::messages::Message;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Create an empty file without the heading
    #[arg(short, long)]
    empty: bool,

    /// Overwrite the file if it already exists
    #[arg(short, long)]
    overwrite: bool,

    /// Copy the current day's full content into the new file
    #[arg(short, long)]
    copy: bool,

    /// Carry over incomplete tasks from the current day
    #[arg(short, long)]
    incomplete: bool,

    /// Target date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

pub fn cmd(new_args: NewArgs) -> Result<()> {
    let workspace = Workspace::new();
    let mut config = Config::read(&workspace)?;

    let date = new_args.date.unwrap_or_else(|| Local::now().date_naive());
    let options = NewDayOptions {
        empty: new_args.empty,
        overwrite: new_args.overwrite,
        copy: new_args.copy,
        incomplete: new_args.incomplete,
    };

    let outcome = day::create_day_file(&workspace, &mut config, date, &options)?;
    config.save(&workspace)?;

    if outcome.wrote {
        msg_success!(Message::DayFileCreated(outcome.file_name.clone()));
    } else {
        msg_print!(Message::DayFileExists(outcome.file_name.clone()));
    }

    opener::open(&outcome.path)
}
