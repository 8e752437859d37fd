use chrono::NaiveDate;
use onit::libs::config::{Config, DEFAULT_FILE_HEADER};
use onit::libs::day::{self, NewDayOptions};
use onit::libs::workspace::Workspace;
use std::fs;
use tempfile::TempDir;
use test_context::{test_context, TestContext};

struct DayTestContext {
    workspace: Workspace,
    _temp_dir: TempDir,
}

impl TestContext for DayTestContext {
    fn setup() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::with_root(temp_dir.path().join("onit"));
        DayTestContext {
            workspace,
            _temp_dir: temp_dir,
        }
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn heading(d: NaiveDate) -> String {
    format!("# {}\n\n", d.format(DEFAULT_FILE_HEADER))
}

// === PLANNING RULES ===

#[test]
fn test_plan_fresh_file_writes_and_advances() {
    let plan = day::plan_new_day(Some("2024-01-01.md"), "2024-01-02.md", false, &NewDayOptions::default());
    assert!(plan.write);
    assert!(plan.advance);
}

#[test]
fn test_plan_existing_same_day_is_idempotent() {
    let plan = day::plan_new_day(Some("2024-01-02.md"), "2024-01-02.md", true, &NewDayOptions::default());
    assert!(!plan.write);
    assert!(!plan.advance);
}

#[test]
fn test_plan_existing_other_day_advances_without_writing() {
    let plan = day::plan_new_day(Some("2024-01-01.md"), "2024-01-02.md", true, &NewDayOptions::default());
    assert!(!plan.write);
    assert!(plan.advance);
}

#[test]
fn test_plan_overwrite_always_writes() {
    let options = NewDayOptions {
        overwrite: true,
        ..Default::default()
    };
    let plan = day::plan_new_day(Some("2024-01-02.md"), "2024-01-02.md", true, &options);
    assert!(plan.write);
    assert!(plan.advance);
}

#[test]
fn test_day_file_name_format() {
    assert_eq!(day::day_file_name(date("2024-01-02")), "2024-01-02.md");
}

// === CONTENT CONSTRUCTION ===

#[test]
fn test_build_content_default_heading() {
    let content = day::build_content(date("2024-01-02"), DEFAULT_FILE_HEADER, &NewDayOptions::default(), false, None);
    assert_eq!(content, "# Tuesday Jan.02.2024\n\n");
}

#[test]
fn test_build_content_empty_option() {
    let options = NewDayOptions {
        empty: true,
        ..Default::default()
    };
    let content = day::build_content(date("2024-01-02"), DEFAULT_FILE_HEADER, &options, false, None);
    assert_eq!(content, "");
}

#[test]
fn test_build_content_copy_takes_precedence_over_incomplete() {
    let options = NewDayOptions {
        copy: true,
        incomplete: true,
        ..Default::default()
    };
    let previous = "# Old\n\n- [ ] task A\n- [x] task B\n";
    let content = day::build_content(date("2024-01-02"), DEFAULT_FILE_HEADER, &options, false, Some(previous));
    let expected = format!("{}{}\n", heading(date("2024-01-02")), previous);
    assert_eq!(content, expected);
}

#[test]
fn test_build_content_incomplete_filters_lines_in_order() {
    let options = NewDayOptions {
        incomplete: true,
        ..Default::default()
    };
    let previous = "# Old\n\n- [ ] task A\n- [x] task B\nnotes\n- [ ] task C\n";
    let content = day::build_content(date("2024-01-02"), DEFAULT_FILE_HEADER, &options, false, Some(previous));
    let expected = format!("{}- [ ] task A\n- [ ] task C\n", heading(date("2024-01-02")));
    assert_eq!(content, expected);
}

// === FILE CREATION ===

#[test_context(DayTestContext)]
#[test]
fn test_create_day_file_fresh(ctx: &mut DayTestContext) {
    let mut config = Config {
        today: Some("2024-01-01.md".to_string()),
        yesterday: Some("2023-12-31.md".to_string()),
        ..Default::default()
    };

    let outcome = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &NewDayOptions::default()).unwrap();

    assert!(outcome.wrote);
    assert_eq!(outcome.file_name, "2024-01-02.md");
    assert_eq!(fs::read_to_string(&outcome.path).unwrap(), heading(date("2024-01-02")));
    assert_eq!(config.today.as_deref(), Some("2024-01-02.md"));
    assert_eq!(config.yesterday.as_deref(), Some("2024-01-01.md"));
}

#[test_context(DayTestContext)]
#[test]
fn test_existing_file_untouched_but_pointers_advance(ctx: &mut DayTestContext) {
    let existing = ctx.workspace.day_path("2024-01-02.md").unwrap();
    fs::write(&existing, "do not touch\n").unwrap();

    let mut config = Config {
        today: Some("2024-01-01.md".to_string()),
        ..Default::default()
    };

    let outcome = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &NewDayOptions::default()).unwrap();

    assert!(!outcome.wrote);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "do not touch\n");
    assert_eq!(config.today.as_deref(), Some("2024-01-02.md"));
    assert_eq!(config.yesterday.as_deref(), Some("2024-01-01.md"));
}

#[test_context(DayTestContext)]
#[test]
fn test_rerun_for_same_day_leaves_pointers_unchanged(ctx: &mut DayTestContext) {
    let existing = ctx.workspace.day_path("2024-01-02.md").unwrap();
    fs::write(&existing, "already today\n").unwrap();

    let mut config = Config {
        today: Some("2024-01-02.md".to_string()),
        yesterday: Some("2024-01-01.md".to_string()),
        ..Default::default()
    };

    let outcome = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &NewDayOptions::default()).unwrap();

    assert!(!outcome.wrote);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "already today\n");
    assert_eq!(config.today.as_deref(), Some("2024-01-02.md"));
    assert_eq!(config.yesterday.as_deref(), Some("2024-01-01.md"));
}

#[test_context(DayTestContext)]
#[test]
fn test_overwrite_rewrites_existing_file(ctx: &mut DayTestContext) {
    let existing = ctx.workspace.day_path("2024-01-02.md").unwrap();
    fs::write(&existing, "old content\n").unwrap();

    let mut config = Config {
        today: Some("2024-01-02.md".to_string()),
        yesterday: Some("2024-01-01.md".to_string()),
        ..Default::default()
    };
    let options = NewDayOptions {
        overwrite: true,
        ..Default::default()
    };

    let outcome = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &options).unwrap();

    assert!(outcome.wrote);
    assert_eq!(fs::read_to_string(&existing).unwrap(), heading(date("2024-01-02")));
    // The overwrite branch always advances, so "yesterday" now names the
    // same file that was just overwritten.
    assert_eq!(config.today.as_deref(), Some("2024-01-02.md"));
    assert_eq!(config.yesterday.as_deref(), Some("2024-01-02.md"));
}

#[test_context(DayTestContext)]
#[test]
fn test_incomplete_carry_over_scenario(ctx: &mut DayTestContext) {
    let previous = ctx.workspace.day_path("2024-01-01.md").unwrap();
    fs::write(&previous, "# Heading\n\n- [ ] task A\n- [x] task B\n").unwrap();

    let mut config = Config {
        today: Some("2024-01-01.md".to_string()),
        yesterday: Some("2023-12-31.md".to_string()),
        ..Default::default()
    };
    let options = NewDayOptions {
        incomplete: true,
        ..Default::default()
    };

    let outcome = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &options).unwrap();

    let expected = format!("{}- [ ] task A\n", heading(date("2024-01-02")));
    assert_eq!(fs::read_to_string(&outcome.path).unwrap(), expected);
    assert_eq!(config.today.as_deref(), Some("2024-01-02.md"));
    assert_eq!(config.yesterday.as_deref(), Some("2024-01-01.md"));
}

#[test_context(DayTestContext)]
#[test]
fn test_persisted_copy_incomplete_carries_without_flag(ctx: &mut DayTestContext) {
    let previous = ctx.workspace.day_path("2024-01-01.md").unwrap();
    fs::write(&previous, "# Heading\n\n- [ ] task A\n").unwrap();

    let mut config = Config {
        today: Some("2024-01-01.md".to_string()),
        copy_incomplete: true,
        ..Default::default()
    };

    let outcome = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &NewDayOptions::default()).unwrap();

    let expected = format!("{}- [ ] task A\n", heading(date("2024-01-02")));
    assert_eq!(fs::read_to_string(&outcome.path).unwrap(), expected);
}

#[test_context(DayTestContext)]
#[test]
fn test_copy_appends_full_previous_content(ctx: &mut DayTestContext) {
    let previous_content = "# Heading\n\n- [ ] task A\n- [x] task B\n";
    let previous = ctx.workspace.day_path("2024-01-01.md").unwrap();
    fs::write(&previous, previous_content).unwrap();

    let mut config = Config {
        today: Some("2024-01-01.md".to_string()),
        ..Default::default()
    };
    let options = NewDayOptions {
        copy: true,
        ..Default::default()
    };

    let outcome = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &options).unwrap();

    let content = fs::read_to_string(&outcome.path).unwrap();
    let stripped = content.strip_prefix(&heading(date("2024-01-02"))).unwrap();
    assert_eq!(stripped, format!("{}\n", previous_content));
}

#[test_context(DayTestContext)]
#[test]
fn test_copy_without_previous_file_is_an_error(ctx: &mut DayTestContext) {
    let mut config = Config::default();
    let options = NewDayOptions {
        copy: true,
        ..Default::default()
    };

    let result = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &options);

    assert!(result.is_err());
    // Failed creation must not move the pointers.
    assert_eq!(config.today, None);
    assert_eq!(config.yesterday, None);
}

#[test_context(DayTestContext)]
#[test]
fn test_incomplete_without_previous_file_just_skips(ctx: &mut DayTestContext) {
    let mut config = Config::default();
    let options = NewDayOptions {
        incomplete: true,
        ..Default::default()
    };

    let outcome = day::create_day_file(&ctx.workspace, &mut config, date("2024-01-02"), &options).unwrap();

    assert_eq!(fs::read_to_string(&outcome.path).unwrap(), heading(date("2024-01-02")));
    assert_eq!(config.today.as_deref(), Some("2024-01-02.md"));
}

// === LOOK-AHEAD PLANNING ===

#[test_context(DayTestContext)]
#[test]
fn test_prepare_day_file_creates_with_heading(ctx: &mut DayTestContext) {
    let config = Config::default();

    let (path, created) = day::prepare_day_file(&ctx.workspace, &config, date("2024-02-14")).unwrap();

    assert!(created);
    assert_eq!(fs::read_to_string(&path).unwrap(), heading(date("2024-02-14")));
}

#[test_context(DayTestContext)]
#[test]
fn test_prepare_day_file_leaves_existing_content(ctx: &mut DayTestContext) {
    let config = Config::default();
    let path = ctx.workspace.day_path("2024-02-14.md").unwrap();
    fs::write(&path, "planned already\n").unwrap();

    let (_, created) = day::prepare_day_file(&ctx.workspace, &config, date("2024-02-14")).unwrap();

    assert!(!created);
    assert_eq!(fs::read_to_string(&path).unwrap(), "planned already\n");
}
