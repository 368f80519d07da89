// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use sgbr::ai::{
    MAX_SUGGESTIONS, SuggestRequest, SuggestionTracker, apply_suggestions, sanitize_suggestions,
};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn suggestions_outside_the_offered_list_are_dropped() {
    let available = names(&["Software", "Marketing", "Consultoria"]);
    let got = sanitize_suggestions(names(&["Software", "Viagens", "Marketing"]), &available);
    assert_eq!(got, names(&["Software", "Marketing"]));
}

#[test]
fn duplicate_suggestions_are_deduplicated() {
    let available = names(&["Software", "Marketing"]);
    let got = sanitize_suggestions(
        names(&["Software", "Software", "Marketing", "Software"]),
        &available,
    );
    assert_eq!(got, names(&["Software", "Marketing"]));
}

#[test]
fn suggestions_are_capped() {
    let available = names(&["A", "B", "C", "D", "E"]);
    let got = sanitize_suggestions(names(&["A", "B", "C", "D", "E"]), &available);
    assert_eq!(got.len(), MAX_SUGGESTIONS);
    assert_eq!(got, names(&["A", "B", "C"]));
}

#[test]
fn empty_inputs_yield_no_suggestions() {
    assert!(sanitize_suggestions(Vec::new(), &names(&["A"])).is_empty());
    assert!(sanitize_suggestions(names(&["A"]), &[]).is_empty());
}

#[test]
fn request_serializes_with_camel_case_fields() {
    let req = SuggestRequest {
        transaction_description: "Hospedagem mensal".to_string(),
        available_categories: names(&["Software"]),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["transactionDescription"], "Hospedagem mensal");
    assert_eq!(json["availableCategories"][0], "Software");
}

#[test]
fn only_the_newest_request_token_is_accepted() {
    let mut tracker = SuggestionTracker::new();
    let first = tracker.begin();
    let second = tracker.begin();
    assert!(!tracker.accept(first));
    assert!(tracker.accept(second));

    // A late answer from an older request stays rejected after more churn.
    let third = tracker.begin();
    assert!(!tracker.accept(second));
    assert!(tracker.accept(third));
}

#[test]
fn stale_answers_are_dropped_and_fresh_ones_sanitized() {
    let available = names(&["Software", "Marketing"]);
    let mut tracker = SuggestionTracker::new();
    let first = tracker.begin();
    let second = tracker.begin();

    // The first request's answer arrives after a newer request started.
    assert!(apply_suggestions(&tracker, first, names(&["Software"]), &available).is_none());

    let got = apply_suggestions(
        &tracker,
        second,
        names(&["Software", "Viagens", "Software"]),
        &available,
    );
    assert_eq!(got, Some(names(&["Software"])));
}
