use std::collections::BTreeSet;

use geo_engine::{fixtures, hash, mock_error, mock_result_for, should_simulate_error};
use pretty_assertions::assert_eq;

#[test]
fn same_url_yields_equal_results() {
    let first = mock_result_for("https://acme.io");
    let second = mock_result_for("https://acme.io");

    assert_eq!(first, second);
    assert_eq!(first.url, "https://acme.io");
}

#[test]
fn fixture_choice_is_pinned_to_the_hash() {
    assert_eq!(mock_result_for("example.com").overall_score, 42);
    assert_eq!(mock_result_for("https://acme.io").overall_score, 61);
    assert_eq!(mock_result_for("https://shop.example.org").overall_score, 78);
}

#[test]
fn results_are_deep_copies() {
    let mut result = mock_result_for("https://acme.io");
    result.tested_queries[0].cited = false;
    result.overall_score = 0;

    let fresh = mock_result_for("https://acme.io");
    assert_eq!(fresh.overall_score, 61);
    assert_eq!(fresh.tested_queries, fixtures()[1].tested_queries);
    assert!(fixtures()[1].url.is_empty());
}

#[test]
fn distinct_urls_cover_all_three_fixtures() {
    let scores: BTreeSet<u8> = (0..20)
        .map(|i| mock_result_for(&format!("https://site{i}.com")).overall_score)
        .collect();

    assert_eq!(scores, BTreeSet::from([42, 61, 78]));
}

#[test]
fn only_known_scores_are_produced() {
    for i in 0..500 {
        let score = mock_result_for(&format!("https://bulk{i}.example")).overall_score;
        assert!([42, 61, 78].contains(&score), "unexpected score {score}");
    }
}

#[test]
fn roughly_one_in_ten_urls_fail() {
    let failures = (0..100)
        .filter(|i| should_simulate_error(&format!("https://example{i}.com")))
        .count();

    assert!((5..=15).contains(&failures), "failures = {failures}");
}

#[test]
fn error_simulation_is_deterministic() {
    assert!(should_simulate_error("https://example.com"));
    assert!(should_simulate_error("https://example.com"));
    assert!(!should_simulate_error("https://acme.io"));
}

#[test]
fn mock_error_is_retryable_and_fresh() {
    let mut first = mock_error();
    first.message.clear();

    let second = mock_error();
    assert_eq!(second.message, "Unable to analyze website. Please try again.");
    assert!(second.retryable);
}

#[test]
fn hash_is_stable_for_the_same_input() {
    assert_eq!(hash("https://example.com"), hash("https://example.com"));
    assert_ne!(hash("https://example.com"), hash("https://example.org"));
}
