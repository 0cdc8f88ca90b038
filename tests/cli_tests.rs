use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn textsift() -> Command {
    Command::cargo_bin("textsift").unwrap()
}

#[test]
fn test_filters_into_three_files() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "42\n3.14\nhello\n-7\n").unwrap();
    let out_dir = temp_dir.path().join("out");

    textsift()
        .arg(&input)
        .arg("-o")
        .arg(&out_dir)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out_dir.join("integers.txt")).unwrap(),
        "42\n-7\n"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("floats.txt")).unwrap(),
        "3.14\n"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("strings.txt")).unwrap(),
        "hello\n"
    );
}

#[test]
fn test_prefix_applied_to_file_names() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "1\n").unwrap();

    textsift()
        .arg(&input)
        .arg("-o")
        .arg(temp_dir.path())
        .arg("-p")
        .arg("run1_")
        .assert()
        .success();

    assert!(temp_dir.path().join("run1_integers.txt").exists());
    assert!(temp_dir.path().join("run1_floats.txt").exists());
    assert!(temp_dir.path().join("run1_strings.txt").exists());
}

#[test]
fn test_full_statistics_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "10\n20\n1.5\nabc\n").unwrap();

    textsift()
        .arg(&input)
        .arg("-o")
        .arg(temp_dir.path())
        .arg("-f")
        .assert()
        .success()
        .stdout(predicate::str::contains("Integers"))
        .stdout(predicate::str::contains("mean: 15"))
        .stdout(predicate::str::contains("shortest: 3"));
}

#[test]
fn test_append_flag_preserves_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "1\n").unwrap();

    for _ in 0..2 {
        textsift()
            .arg(&input)
            .arg("-o")
            .arg(temp_dir.path())
            .arg("-a")
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("integers.txt")).unwrap(),
        "1\n1\n"
    );
}

#[test]
fn test_directory_input_is_walked() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    fs::write(data_dir.join("a.txt"), "1\n").unwrap();
    fs::write(data_dir.join("b.txt"), "2\n").unwrap();
    fs::write(data_dir.join("ignored.log"), "3\n").unwrap();
    let out_dir = temp_dir.path().join("out");

    textsift()
        .arg(&data_dir)
        .arg("-o")
        .arg(&out_dir)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out_dir.join("integers.txt")).unwrap(),
        "1\n2\n"
    );
}

#[test]
fn test_missing_input_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let present = temp_dir.path().join("present.txt");
    fs::write(&present, "7\n").unwrap();

    textsift()
        .arg(temp_dir.path().join("absent.txt"))
        .arg(&present)
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("integers.txt")).unwrap(),
        "7\n"
    );
}

#[test]
fn test_no_inputs_is_a_usage_error() {
    textsift().assert().failure();
}

#[test]
fn test_only_unrecognized_inputs_fail() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.bin");
    fs::write(&input, "1\n").unwrap();

    textsift()
        .arg(&input)
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(".txt"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "1\n").unwrap();

    let config = temp_dir.path().join("settings.toml");
    fs::write(
        &config,
        format!("output = {:?}\nprefix = \"cfg_\"\n", temp_dir.path().join("out")),
    )
    .unwrap();

    textsift()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(temp_dir.path().join("out").join("cfg_integers.txt").exists());
}
