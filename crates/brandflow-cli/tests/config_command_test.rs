mod common;
use common::TestFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_show_without_file_uses_defaults() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["config", "show"]);

    assert_eq!(result["content"]["exists"], false);
    assert_eq!(result["content"]["currency"], "$");
    assert_eq!(result["badge"]["label"], "Using defaults (no config file)");
}

#[test]
fn test_init_writes_file_once() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(fixture.config_path().exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration reset"));
}

#[test]
fn test_config_mode_applies_to_commands() {
    let fixture = TestFixture::with_config("default_mode = \"vendor\"\n");
    let result = fixture.json(&["products"]);
    assert_eq!(result["content"]["mode"], "Vendor");

    let result = fixture.json(&["--mode", "seller", "products"]);
    assert_eq!(result["content"]["mode"], "Seller");
}

#[test]
fn test_invalid_config_is_reported() {
    let fixture = TestFixture::new();
    fs::write(fixture.config_path(), "default_mode = \"wholesale\"\n").unwrap();

    fixture
        .command()
        .args(["products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_guidance_without_subcommand() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("brandflow - seller and vendor analytics"))
        .stdout(predicate::str::contains("brandflow config init"));
}
