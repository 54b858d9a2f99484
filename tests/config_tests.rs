mod common;
use common::{rbs, setup_data_dir, temp_home};
use predicates::str::contains;
use std::fs;

#[test]
fn test_config_print_defaults_and_overrides() {
    rbs("config_print_defaults")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("data_dir: ."))
        .stdout(contains("sample_size: 5"))
        .stdout(contains("show_timing: true"));

    rbs("config_print_overrides")
        .args(["--data-dir", "/srv/bikeshare", "--no-timing", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("data_dir: /srv/bikeshare"))
        .stdout(contains("show_timing: false"));
}

#[test]
fn test_config_init_writes_file_once() {
    let home = temp_home("config_init_writes_file_once");
    let conf = home.join(".rbikeshare").join("rbikeshare.conf");

    let mut cmd = rbs("config_init_scratch");
    cmd.env("HOME", &home)
        .args(["config", "--init"])
        .assert()
        .success();
    assert!(conf.exists());

    let mut again = rbs("config_init_scratch");
    again
        .env("HOME", &home)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_config_file_is_used() {
    let data = setup_data_dir("config_file_is_used");
    let home = temp_home("config_file_is_used");
    let dir = home.join(".rbikeshare");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("rbikeshare.conf"),
        format!("data_dir: {data}\nshow_timing: false\n"),
    )
    .unwrap();

    let mut cmd = rbs("config_file_is_used_scratch");
    cmd.env("HOME", &home)
        .args(["stats", "--city", "washington"])
        .assert()
        .success()
        .stdout(contains("Trips matching city=washington month=all day=all: 2"));
}

#[test]
fn test_malformed_config_fails() {
    let home = temp_home("malformed_config_fails");
    let dir = home.join(".rbikeshare");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("rbikeshare.conf"), "sample_size: lots\n").unwrap();

    let mut cmd = rbs("malformed_config_fails_scratch");
    cmd.env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_zero_sample_size_config_fails() {
    let home = temp_home("zero_sample_size_config_fails");
    let dir = home.join(".rbikeshare");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("rbikeshare.conf"), "sample_size: 0\n").unwrap();

    let mut cmd = rbs("zero_sample_size_config_fails_scratch");
    cmd.env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("sample_size must be at least 1"));
}
