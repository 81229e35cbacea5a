use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn cli(root: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sanitize"));
    cmd.arg("--saves-root")
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("SANITIZE_SAVES_ROOT");
    cmd
}

fn run_cli(root: &Path, args: &[&str]) -> Output {
    cli(root, args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run sanitize CLI")
}

fn run_cli_with_input(root: &Path, input: &str) -> Output {
    let mut child = cli(root, &[])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run sanitize CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn single_save_tree(root: &Path) -> PathBuf {
    let save = root.join("76561198000000001/SaveGame_1");
    write(&save.join("Game.json"), r#"{"OrganisationName": "Acme"}"#);
    write(&save.join("Trash/Trash.json"), r#"{"Items": [1, 2, 3]}"#);
    write(
        &save.join("Trash/Generators/Generator_1.json"),
        r#"{"GeneratedItems": ["a"]}"#,
    );
    write(
        &save.join("Trash/Generators/Generator_2.json"),
        r#"{"GeneratedItems": []}"#,
    );
    fs::create_dir_all(root.join("TempPlayer")).unwrap();
    save
}

#[test]
fn cleans_single_save_without_prompting() {
    let dir = tempfile::tempdir().unwrap();
    let save = single_save_tree(dir.path());

    let output = run_cli(dir.path(), &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Selected player: 76561198000000001"));
    assert!(stdout.contains("Selected save: Acme"));
    assert!(stdout.contains("Cleaned 3 items from Trash.json"));
    assert!(stdout.contains("Cleaned 1 generator files"));
    assert!(stdout.contains("Summary: Cleaned 3 trash items and 1 generators"));

    let trash: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(save.join("Trash/Trash.json")).unwrap())
            .unwrap();
    assert_eq!(trash["Items"], serde_json::json!([]));
}

#[test]
fn second_run_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    single_save_tree(dir.path());

    assert!(run_cli(dir.path(), &[]).status.success());
    let output = run_cli(dir.path(), &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No items found in Trash.json"));
    assert!(stdout.contains("No items found in generator files"));
    assert!(stdout.contains("Summary: Cleaned 0 trash items and 0 generators"));
}

#[test]
fn dry_run_leaves_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    let save = single_save_tree(dir.path());

    let output = run_cli(dir.path(), &["--dry-run"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would clean 3 items from Trash.json"));
    assert_eq!(
        fs::read_to_string(save.join("Trash/Trash.json")).unwrap(),
        r#"{"Items": [1, 2, 3]}"#
    );
}

#[test]
fn no_players_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("TempPlayer")).unwrap();

    let output = run_cli(dir.path(), &[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No players found"));
}

#[test]
fn no_saves_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("111/WriteTest.txt"), "");

    let output = run_cli(dir.path(), &[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No saves found"));
}

#[test]
fn missing_root_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_cli(&dir.path().join("missing"), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

// Players 111 and 222; 222 holds "Alpha" (SaveGame_1) and "Beta" (SaveGame_2).
fn two_player_tree(root: &Path) -> (PathBuf, PathBuf) {
    write(
        &root.join("111/SaveGame_1/Game.json"),
        r#"{"OrganisationName": "Solo"}"#,
    );
    let alpha = root.join("222/SaveGame_1");
    let beta = root.join("222/SaveGame_2");
    write(&alpha.join("Game.json"), r#"{"OrganisationName": "Alpha"}"#);
    write(&alpha.join("Trash/Trash.json"), r#"{"Items": [1]}"#);
    write(&beta.join("Game.json"), r#"{"OrganisationName": "Beta"}"#);
    write(&beta.join("Trash/Trash.json"), r#"{"Items": [1, 2]}"#);
    (alpha, beta)
}

#[test]
fn prompts_pick_by_index_and_label() {
    let dir = tempfile::tempdir().unwrap();
    let (alpha, beta) = two_player_tree(dir.path());

    let output = run_cli_with_input(dir.path(), "2\nBeta\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Select player (STEAM64ID):"));
    assert!(stdout.contains("1) 111"));
    assert!(stdout.contains("2) 222"));
    assert!(stdout.contains("Select save:"));
    assert!(stdout.contains("1) Alpha"));
    assert!(stdout.contains("2) Beta"));
    assert!(stdout.contains("Processing save: Beta"));
    assert!(stdout.contains("Cleaned 2 items from Trash.json"));

    assert_eq!(
        fs::read_to_string(beta.join("Trash/Trash.json")).unwrap(),
        "{\n  \"Items\": []\n}"
    );
    assert_eq!(
        fs::read_to_string(alpha.join("Trash/Trash.json")).unwrap(),
        r#"{"Items": [1]}"#
    );
}

#[test]
fn prompt_asks_again_after_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let (alpha, _) = two_player_tree(dir.path());

    let output = run_cli_with_input(dir.path(), "9\nnobody\n2\n1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Enter a number between 1 and 2").count(), 2);
    assert!(stdout.contains("Processing save: Alpha"));
    assert!(stdout.contains("Cleaned 1 items from Trash.json"));
    assert_eq!(
        fs::read_to_string(alpha.join("Trash/Trash.json")).unwrap(),
        "{\n  \"Items\": []\n}"
    );
}

#[test]
fn closed_input_cancels_without_writes() {
    let dir = tempfile::tempdir().unwrap();
    let (alpha, beta) = two_player_tree(dir.path());

    let output = run_cli_with_input(dir.path(), "");
    assert_eq!(output.status.code(), Some(130));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cancelled"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Processing save"));
    assert_eq!(
        fs::read_to_string(alpha.join("Trash/Trash.json")).unwrap(),
        r#"{"Items": [1]}"#
    );
    assert_eq!(
        fs::read_to_string(beta.join("Trash/Trash.json")).unwrap(),
        r#"{"Items": [1, 2]}"#
    );
}
