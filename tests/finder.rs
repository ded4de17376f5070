//! Usage Finder Integration Tests
//!
//! End-to-end scans over the in-memory store, covering discovery order,
//! de-duplication and the metadata traversal.

use mediascan::{MemoryStore, RecordId, UsageFinder};

/// The three-record reference scenario: B is attached to the media, A
/// matches by body, C matches inside serialized gallery metadata.
fn scenario_store() -> (MemoryStore, RecordId) {
    let mut store = MemoryStore::new();

    store.add_record(1, "Article A", "article", "published", "see image.jpg here");
    let b = store.add_record(2, "Page B", "page", "draft", "no textual reference");
    let c = store.add_record(3, "Article C", "article", "published", "gallery post");
    store.add_meta(c, r#"{"gallery": ["a.jpg", "image.jpg"]}"#);

    let media = store.add_attachment(10, "image.jpg", Some(b));

    // Unrelated record that must never match
    store.add_record(4, "Quiet", "article", "published", "nothing here");

    (store, media)
}

#[test]
fn test_scenario_match_order() {
    let (store, media) = scenario_store();
    let finder = UsageFinder::new(&store);

    let matches = finder.find_usage("image.jpg", media).unwrap();

    let ids: Vec<RecordId> = matches.iter().map(|m| m.id).collect();
    // Attachment first, then body/metadata matches in pool order
    assert_eq!(ids, vec![RecordId(2), RecordId(1), RecordId(3)]);
}

#[test]
fn test_idempotent_across_calls() {
    let (store, media) = scenario_store();
    let finder = UsageFinder::new(&store);

    let first = finder.find_usage("image.jpg", media).unwrap();
    let second = finder.find_usage("image.jpg", media).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_duplicate_ids_when_matching_by_every_reason() {
    let mut store = MemoryStore::new();
    // One record that is attached AND has a body match AND a metadata match
    let page = store.add_record(1, "Page", "page", "draft", "inline image.jpg");
    store.add_meta(page, r#"["image.jpg"]"#);
    let media = store.add_attachment(2, "image.jpg", Some(page));

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage("image.jpg", media).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, page);
}

#[test]
fn test_no_matching_content_returns_empty() {
    let mut store = MemoryStore::new();
    store.add_record(1, "Post", "article", "published", "unrelated body");
    let finder = UsageFinder::new(&store);

    assert!(finder
        .find_usage("missing.png", RecordId(99))
        .unwrap()
        .is_empty());
}

#[test]
fn test_nested_metadata_only_reference_is_found() {
    let mut store = MemoryStore::new();
    let post = store.add_record(1, "Deep", "article", "published", "");
    // List containing a mapping whose value is the file name
    store.add_meta(post, r#"[{"src": "image.jpg"}]"#);

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage("image.jpg", RecordId(50)).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, post);
}

#[test]
fn test_scalar_meta_exact_and_substring() {
    let mut store = MemoryStore::new();
    let exact = store.add_record(1, "Exact", "article", "published", "");
    store.add_meta(exact, "image.jpg");
    let longer = store.add_record(2, "Longer", "article", "published", "");
    store.add_meta(longer, "thumb for image.jpg, cropped");

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage("image.jpg", RecordId(50)).unwrap();

    let ids: Vec<RecordId> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![exact, longer]);
}

#[test]
fn test_case_sensitive_matching() {
    let mut store = MemoryStore::new();
    store.add_record(1, "Post", "article", "published", "see image.jpg");

    let finder = UsageFinder::new(&store);
    assert!(finder
        .find_usage("Image.JPG", RecordId(50))
        .unwrap()
        .is_empty());
}

#[test]
fn test_unanchored_substring_matches_inside_longer_names() {
    let mut store = MemoryStore::new();
    // "a.jpg" also occurs inside "sea.jpg"; both records match by design
    let short = store.add_record(1, "Short", "article", "published", "see a.jpg");
    let coincidental = store.add_record(2, "Coincidence", "article", "published", "see sea.jpg");

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage("a.jpg", RecordId(50)).unwrap();

    let ids: Vec<RecordId> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![short, coincidental]);
}

#[test]
fn test_trashed_and_scheduled_records_still_scanned() {
    let mut store = MemoryStore::new();
    let trashed = store.add_record(1, "Binned", "article", "trashed", "had image.jpg");
    let scheduled = store.add_record(2, "Later", "article", "scheduled", "will show image.jpg");

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage("image.jpg", RecordId(50)).unwrap();

    let ids: Vec<RecordId> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![trashed, scheduled]);
}
