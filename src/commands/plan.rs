//! Look-ahead day creation.
//!
//! Unlike `new`, planning a day never moves the today/yesterday pointers:
//! the file gets its heading if absent and is opened either way, so an
//! upcoming day can be filled in without becoming "today".

use crate::libs::config::Config;
use crate::libs::day;
use crate::libs::messages::Message;
use crate::libs::opener;
use crate::libs::workspace::Workspace;
use crate::msg_success;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Date to plan for (YYYY-MM-DD), defaults to today
    date: Option<NaiveDate>,
}

pub fn cmd(plan_args: PlanArgs) -> Result<()> {
    let workspace = Workspace::new();
    let config = Config::read(&workspace)?;

    let date = plan_args.date.unwrap_or_else(|| Local::now().date_naive());
    let (path, created) = day::prepare_day_file(&workspace, &config, date)?;

    if created {
        msg_success!(Message::DayFileCreated(day::day_file_name(date)));
    }

    opener::open(&path)
}
