use std::fs;
use std::path::Path;

use tempfile::tempdir;

use todo_cli::bot::handler::CommandHandler;
use todo_cli::bot::message::InboundCommand;
use todo_cli::cmd::{execute, Outcome};
use todo_cli::command::parse;
use todo_cli::config::{bootstrap, set_name, set_path, Defaults};
use todo_cli::db::TaskStore;
use todo_cli::error::TodoError;

fn run(config_file: &Path, words: &[&str]) -> Result<Outcome, TodoError> {
    let mut args = vec!["todo"];
    args.extend_from_slice(words);
    let mut store = TaskStore::open(config_file)?;
    let command = parse(&args)?;
    execute(&command, &mut store, config_file)
}

fn listing(config_file: &Path, words: &[&str]) -> Vec<String> {
    match run(config_file, words).unwrap() {
        Outcome::Listing(lines) => lines,
        other => panic!("expected a listing, got {other:?}"),
    }
}

#[test]
fn test_full_workflow_across_invocations() {
    let home = tempdir().unwrap();
    let defaults = Defaults::from_home(home.path());
    bootstrap(&defaults).unwrap();
    let config_file = defaults.config_file();

    // Fresh install: nothing to show, no data file yet
    assert!(listing(&config_file, &[]).is_empty());
    assert!(!defaults.data_dir.join("checklist.json").exists());

    run(&config_file, &["add", "Write", "report"]).unwrap();
    run(&config_file, &["add", "Call", "Alice"]).unwrap();
    run(&config_file, &["add", "Water", "plants"]).unwrap();
    run(&config_file, &["done", "1"]).unwrap();

    assert_eq!(
        listing(&config_file, &["list"]),
        ["0. [ ] Write report", "1. [x] Call Alice", "2. [ ] Water plants"]
    );

    // Removing index 0 shifts everything down by one
    run(&config_file, &["remove", "0"]).unwrap();
    assert_eq!(
        listing(&config_file, &["list", "pending"]),
        ["1. [ ] Water plants"]
    );
    run(&config_file, &["edit", "0", "Call", "Alice", "back"]).unwrap();
    assert_eq!(
        listing(&config_file, &["list", "completed"]),
        ["0. [x] Call Alice back"]
    );

    run(&config_file, &["clear"]).unwrap();
    assert!(listing(&config_file, &[]).is_empty());

    let on_disk = fs::read_to_string(defaults.data_dir.join("checklist.json")).unwrap();
    assert_eq!(on_disk, "[]");
}

#[test]
fn test_config_change_applies_to_next_store() {
    let home = tempdir().unwrap();
    let defaults = Defaults::from_home(home.path());
    bootstrap(&defaults).unwrap();
    let config_file = defaults.config_file();

    run(&config_file, &["add", "old", "list"]).unwrap();

    let mut open = TaskStore::open(&config_file).unwrap();
    let elsewhere = home.path().join("elsewhere");
    set_path(elsewhere.to_str().unwrap(), &config_file).unwrap();
    set_name("work.json", &config_file).unwrap();

    // The store opened before the change still writes its original file
    open.add_task("still old");
    open.save().unwrap();
    assert_eq!(open.data_file(), defaults.data_dir.join("checklist.json"));
    assert_eq!(TaskStore::open(&config_file).unwrap().len(), 0);

    run(&config_file, &["add", "new", "list"]).unwrap();
    assert!(elsewhere.join("work.json").exists());
    assert_eq!(listing(&config_file, &[]), ["0. [ ] new list"]);
}

#[test]
fn test_corrupt_data_file_is_surfaced() {
    let home = tempdir().unwrap();
    let defaults = Defaults::from_home(home.path());
    bootstrap(&defaults).unwrap();
    let data_file = defaults.data_dir.join("checklist.json");
    fs::write(&data_file, "not an array").unwrap();

    match TaskStore::open(&defaults.config_file()) {
        Err(TodoError::InvalidFormat { path, .. }) => assert_eq!(path, data_file),
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
    // Never silently repaired
    assert_eq!(fs::read_to_string(&data_file).unwrap(), "not an array");
}

#[test]
fn test_missing_config_without_bootstrap() {
    let home = tempdir().unwrap();
    let defaults = Defaults::from_home(home.path());
    assert!(matches!(
        TaskStore::open(&defaults.config_file()),
        Err(TodoError::ConfigNotFound { .. })
    ));
}

#[test]
fn test_bot_and_cli_share_the_same_list() {
    let home = tempdir().unwrap();
    let defaults = Defaults::from_home(home.path());
    bootstrap(&defaults).unwrap();
    let config_file = defaults.config_file();

    run(&config_file, &["add", "from", "terminal"]).unwrap();

    let store = TaskStore::open(&config_file).unwrap();
    let mut handler = CommandHandler::new(store, config_file.clone());
    let reply = handler.handle(&InboundCommand {
        keyword: "add".into(),
        argument: "from chat".into(),
        chat_id: 99,
    });
    assert_eq!(reply, "Task added successfully.");

    assert_eq!(
        listing(&config_file, &[]),
        ["0. [ ] from terminal", "1. [ ] from chat"]
    );
}
