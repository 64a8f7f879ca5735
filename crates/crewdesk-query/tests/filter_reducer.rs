use crewdesk_model::{Bucket, Candidate, MarkerPair, Posting, UserAccount, USER_TOMBSTONE};
use crewdesk_query::{apply, classify_postings, FilterParams, Tab};
use std::collections::BTreeSet;

fn candidate(name: &str, department: &str, markers: MarkerPair) -> Candidate {
    Candidate {
        row_index: 2,
        timestamp: "2024-01-01 10:00:00".to_string(),
        indent_number: "IND-1".to_string(),
        candidate_name: name.to_string(),
        phone: "9876543210".to_string(),
        department: department.to_string(),
        designation: "Executive".to_string(),
        joining_date: "2024-02-01".to_string(),
        markers,
    }
}

#[test]
fn tab_filter_uses_classifier_buckets() {
    let records = vec![
        candidate("Pending P", "HR", MarkerPair::new("t", "")),
        candidate("History H", "HR", MarkerPair::new("t", "done")),
        candidate("Invisible I", "HR", MarkerPair::new("", "")),
    ];
    let pending = apply(&records, &FilterParams::tab(Tab::Pending));
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].candidate_name, "Pending P");

    let all = apply(&records, &FilterParams::tab(Tab::All));
    assert_eq!(all.len(), 2, "neither-bucket rows stay invisible on every tab");
}

#[test]
fn search_is_case_insensitive_substring_over_page_fields() {
    let records = vec![
        candidate("Asha Verma", "HR", MarkerPair::new("t", "")),
        candidate("Ravi Kumar", "HR", MarkerPair::new("t", "")),
    ];
    let params = FilterParams::tab(Tab::Pending).with_search("asha");
    let hits = apply(&records, &params);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].candidate_name, "Asha Verma");
}

#[test]
fn category_filters_are_exact_and_case_sensitive() {
    let records = vec![
        candidate("A", "HR", MarkerPair::new("t", "")),
        candidate("B", "Finance", MarkerPair::new("t", "")),
        candidate("C", "hr", MarkerPair::new("t", "")),
    ];
    let params = FilterParams::tab(Tab::Pending).with_category("department", "HR");
    let hits = apply(&records, &params);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].candidate_name, "A");

    // Empty filter values are no-ops, unknown category names never match.
    let noop = FilterParams::tab(Tab::Pending).with_category("department", "");
    assert_eq!(apply(&records, &noop).len(), 3);
    let unknown = FilterParams::tab(Tab::Pending).with_category("shift", "night");
    assert!(apply(&records, &unknown).is_empty());
}

#[test]
fn filtering_is_stable_and_idempotent() {
    let records = vec![
        candidate("Zeta", "HR", MarkerPair::new("t", "")),
        candidate("Alpha", "HR", MarkerPair::new("t", "")),
        candidate("Mid", "Finance", MarkerPair::new("t", "")),
    ];
    let params = FilterParams::tab(Tab::All).with_search("a");
    let first = apply(&records, &params);
    let second = apply(&records, &params);
    assert_eq!(first, second);
    // Input order preserved: Zeta before Alpha.
    let names: Vec<&str> = first.iter().map(|c| c.candidate_name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn deleted_users_disappear_from_every_tab() {
    let users = vec![
        UserAccount {
            row_index: 1,
            username: "priya".to_string(),
            full_name: "Priya N".to_string(),
            role: "admin".to_string(),
            department: "HR".to_string(),
            status: String::new(),
        },
        UserAccount {
            row_index: 2,
            username: "gone".to_string(),
            full_name: "Gone G".to_string(),
            role: "viewer".to_string(),
            department: "HR".to_string(),
            status: USER_TOMBSTONE.to_string(),
        },
    ];
    let visible = apply(&users, &FilterParams::tab(Tab::All));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].username, "priya");
}

#[test]
fn posting_history_comes_from_the_membership_set() {
    let postings = vec![
        Posting {
            row_index: 2,
            timestamp: "t".to_string(),
            posting_id: "POST-1".to_string(),
            platform: "LinkedIn".to_string(),
            title: "Opening: Fitter".to_string(),
            content_url: "https://example.com/1".to_string(),
            posted_by: "priya".to_string(),
        },
        Posting {
            row_index: 3,
            timestamp: "t".to_string(),
            posting_id: "POST-2".to_string(),
            platform: "Naukri".to_string(),
            title: "Opening: Welder".to_string(),
            content_url: "https://example.com/2".to_string(),
            posted_by: "priya".to_string(),
        },
    ];
    let history_ids = BTreeSet::from(["POST-2".to_string()]);
    let classified = classify_postings(postings, &history_ids);
    assert_eq!(classified[0].bucket, Bucket::Pending);
    assert_eq!(classified[1].bucket, Bucket::History);

    let history = apply(&classified, &FilterParams::tab(Tab::History));
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].posting.posting_id, "POST-2");
}
