//! Day-tracking core: deciding what a new day file contains and how the
//! today/yesterday pointers advance.
//!
//! The rule set, evaluated in order:
//!
//! 1. If the target file already exists and `overwrite` is not set, content
//!    is never rewritten. The pointers still advance when the target differs
//!    from the current `today` pointer; re-running for the same day is a
//!    no-op. This lets a user fast-forward "today" to an already-existing
//!    file without risk of data loss.
//! 2. Otherwise the file is written fresh: an empty body or a formatted
//!    heading, optionally followed by the previous day's full content
//!    (`copy`) or just its incomplete checklist items (`incomplete` /
//!    persisted `copyIncomplete`). `copy` wins when both are requested.
//!    The pointers advance unconditionally on this branch.
//!
//! The decision itself (`plan_new_day`) and the content construction
//! (`build_content`) are pure; `create_day_file` applies them to disk.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::workspace::Workspace;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Literal prefix marking an incomplete checklist item in a day file.
pub const INCOMPLETE_MARKER: &str = "- [ ]";

/// File name of the day file for a date, e.g. `2024-01-02.md`.
pub fn day_file_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y-%m-%d"))
}

/// Options accepted by new-day creation.
#[derive(Debug, Clone, Default)]
pub struct NewDayOptions {
    /// Create the file without the heading.
    pub empty: bool,
    /// Rewrite the file even when it already exists.
    pub overwrite: bool,
    /// Append the previous day's full content.
    pub copy: bool,
    /// Append the previous day's incomplete checklist items.
    pub incomplete: bool,
}

/// Outcome of the planning step: whether to write the target file and
/// whether to advance the today/yesterday pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub file_name: String,
    pub write: bool,
    pub advance: bool,
}

/// Decides what a new-day invocation does, without touching the filesystem.
pub fn plan_new_day(today: Option<&str>, target_name: &str, exists: bool, options: &NewDayOptions) -> DayPlan {
    if exists && !options.overwrite {
        // A pre-existing file for a new target date becomes the new "today"
        // even though its content stays untouched.
        return DayPlan {
            file_name: target_name.to_string(),
            write: false,
            advance: today != Some(target_name),
        };
    }

    DayPlan {
        file_name: target_name.to_string(),
        write: true,
        advance: true,
    }
}

/// Constructs the content of a fresh day file.
///
/// `previous` is the full content of the file the `today` pointer named
/// before this invocation. Incomplete lines are filtered, not transformed.
pub fn build_content(
    date: NaiveDate,
    header_format: &str,
    options: &NewDayOptions,
    carry_incomplete: bool,
    previous: Option<&str>,
) -> String {
    let mut content = if options.empty {
        String::new()
    } else {
        format!("# {}\n\n", date.format(header_format))
    };

    if options.copy {
        if let Some(previous) = previous {
            content.push_str(previous);
            content.push('\n');
        }
    } else if options.incomplete || carry_incomplete {
        if let Some(previous) = previous {
            for line in previous.lines().filter(|line| line.starts_with(INCOMPLETE_MARKER)) {
                content.push_str(line);
                content.push('\n');
            }
        }
    }

    content
}

/// Result of applying a day plan to disk.
#[derive(Debug)]
pub struct DayOutcome {
    pub path: PathBuf,
    pub file_name: String,
    /// Whether the file was actually (re)written; callers use this only
    /// to pick the right message.
    pub wrote: bool,
}

/// Creates (or fast-forwards to) the day file for `date` and advances the
/// pointers in `config` accordingly. The caller persists the config.
pub fn create_day_file(workspace: &Workspace, config: &mut Config, date: NaiveDate, options: &NewDayOptions) -> Result<DayOutcome> {
    let target_name = day_file_name(date);
    let path = workspace.day_path(&target_name)?;
    let exists = path.exists();
    let plan = plan_new_day(config.today.as_deref(), &target_name, exists, options);

    if plan.write {
        let previous = read_previous(workspace, config, options)?;
        let content = build_content(date, config.header_format(), options, config.copy_incomplete, previous.as_deref());
        fs::write(&path, content)?;
    }

    if plan.advance {
        config.yesterday = config.today.take();
        config.today = Some(target_name.clone());
    }

    Ok(DayOutcome {
        path,
        file_name: target_name,
        wrote: plan.write,
    })
}

/// Creates the day file for `date` with its heading when absent, without
/// moving any pointer. This is the look-ahead used by `plan`.
pub fn prepare_day_file(workspace: &Workspace, config: &Config, date: NaiveDate) -> Result<(PathBuf, bool)> {
    let path = workspace.day_path(&day_file_name(date))?;
    if path.exists() {
        return Ok((path, false));
    }

    let content = build_content(date, config.header_format(), &NewDayOptions::default(), false, None);
    fs::write(&path, content)?;
    Ok((path, true))
}

/// Lists day-file names in reverse lexicographic order, which for the
/// `YYYY-MM-DD.md` naming is reverse chronological, truncated to `count`.
pub fn recent_day_files(workspace: &Workspace, count: usize) -> Result<Vec<String>> {
    let day_dir = workspace.day_dir();
    let mut names = Vec::new();

    if day_dir.exists() {
        for entry in fs::read_dir(&day_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_file() && name.ends_with(".md") {
                names.push(name);
            }
        }
    }

    names.sort();
    names.reverse();
    names.truncate(count);
    Ok(names)
}

/// Reads the content of the file the `today` pointer currently names, when
/// the requested options need it.
///
/// `copy` with no previous file is an explicit error rather than a silently
/// propagated I/O fault; the incomplete filter just skips carrying over.
fn read_previous(workspace: &Workspace, config: &Config, options: &NewDayOptions) -> Result<Option<String>> {
    if !options.copy && !options.incomplete && !config.copy_incomplete {
        return Ok(None);
    }

    let Some(previous_name) = config.today.as_deref() else {
        if options.copy {
            return Err(msg_error_anyhow!(Message::NoPreviousDayFile));
        }
        return Ok(None);
    };

    let previous_path = workspace.day_path(previous_name)?;
    if !previous_path.exists() {
        if options.copy {
            return Err(msg_error_anyhow!(Message::NoPreviousDayFile));
        }
        return Ok(None);
    }

    Ok(Some(fs::read_to_string(&previous_path)?))
}
