mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_default_filters_render_as_chips() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["filters", "chips", "--width", "400"]);

    let chips = result["content"]["chips"].as_array().unwrap();
    let texts: Vec<&str> = chips.iter().map(|c| c["text"].as_str().unwrap()).collect();
    assert_eq!(
        texts,
        vec![
            "Active Package Types: 3PL WMS, Agency Old",
            "Trial End Time Before 2025-12-16"
        ]
    );
    assert_eq!(result["content"]["hidden"], 0);
}

#[test]
fn test_filter_spec_is_applied_with_configured_currency() {
    let fixture = TestFixture::with_config("currency = \"€\"\n");
    let result = fixture.json(&[
        "filters",
        "chips",
        "--no-defaults",
        "--filter",
        "price:between:10:50",
        "--filter",
        "status=Active,Paused",
    ]);

    let chips = result["content"]["chips"].as_array().unwrap();
    assert_eq!(chips.len(), 2);
    assert_eq!(chips[0]["text"], "Price between €10 and €50");
    assert_eq!(chips[1]["text"], "Status: Active, Paused");
}

#[test]
fn test_collapsed_row_hides_wrapped_chips() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["filters", "chips", "--width", "60", "--collapsed"]);

    assert_eq!(result["content"]["visible"], 0);
    assert_eq!(result["content"]["hidden"], 2);
    assert_eq!(result["content"]["toggle_label"], "Show all");
    assert_eq!(result["badge"]["label"], "2 filter(s) hidden");
}

#[test]
fn test_verbose_chips_list_layout_per_chip() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["filters", "chips", "--width", "60", "--collapsed", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: Seller"))
        .stdout(predicate::str::contains("activePackageTypes"))
        .stdout(predicate::str::contains("hidden"))
        .stdout(predicate::str::contains("toggle: Show all"));
}

#[test]
fn test_unknown_option_is_rejected() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["filters", "chips", "--filter", "status=Deleted"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Deleted' is not an option of Status"));
}

#[test]
fn test_vendor_only_filter_needs_vendor_mode() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["filters", "chips", "--filter", "poStatus=Open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown filter 'poStatus'"));

    fixture
        .command()
        .args(["--mode", "vendor", "filters", "chips", "--filter", "poStatus=Open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PO Status: Open"));
}

#[test]
fn test_catalog_counts_applied_filters() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["filters", "catalog"]);

    let sections = result["content"]["sections"].as_array().unwrap();
    let labels: Vec<&str> = sections
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert!(!labels.iter().any(|l| l.eq_ignore_ascii_case("vendor operations")));

    let trial = sections
        .iter()
        .flat_map(|s| s["entries"].as_array().unwrap())
        .find(|e| e["key"] == "trialEndTime")
        .unwrap();
    assert_eq!(trial["badge"], 1);
}

#[test]
fn test_preview_shows_match_preview_for_tags() {
    let fixture = TestFixture::new();
    let result = fixture.json(&[
        "filters",
        "preview",
        "tagList",
        "--option",
        "Best Seller",
        "--option",
        "Discounted",
        "--match",
        "all",
    ]);

    assert_eq!(result["content"]["chip"], "Tag List: Best Seller, Discounted");
    assert_eq!(
        result["content"]["match_preview"],
        "Best Seller AND Discounted"
    );
}

#[test]
fn test_preview_of_number_filter_lists_operators() {
    let fixture = TestFixture::new();
    let result = fixture.json(&[
        "filters",
        "preview",
        "price",
        "--operator",
        "less than",
        "--value1",
        "25",
    ]);

    assert_eq!(result["content"]["chip"], "Price < $25");
    let operators = result["content"]["operators"].as_array().unwrap();
    assert_eq!(operators.len(), 6);
}
