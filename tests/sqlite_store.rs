//! SQLite Store Integration Tests
//!
//! Full scans against the SQLite backend, plus persistence across reopen.

use mediascan::{RecordId, SqliteStore, UsageFinder};
use tempfile::TempDir;

fn seeded_store() -> (SqliteStore, RecordId) {
    let store = SqliteStore::open_in_memory().unwrap();

    store
        .add_record("Article A", "article", "published", "see image.jpg here")
        .unwrap();
    let b = store.add_record("Page B", "page", "draft", "").unwrap();
    let c = store
        .add_record("Article C", "article", "published", "gallery post")
        .unwrap();
    store
        .add_meta(c, "gallery", r#"{"images": ["a.jpg", "image.jpg"]}"#)
        .unwrap();

    let media = store
        .add_attachment("https://example.com/uploads/image.jpg", Some(b))
        .unwrap();

    // Noise the scan must ignore
    store
        .add_record("Old revision", "revision", "published", "image.jpg everywhere")
        .unwrap();

    (store, media)
}

#[test]
fn test_end_to_end_scan_order() {
    let (store, media_id) = seeded_store();

    let media = store.media(media_id).unwrap().unwrap();
    assert_eq!(media.file_name, "image.jpg");

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage(&media.file_name, media.id).unwrap();

    let titles: Vec<&str> = matches.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Page B", "Article A", "Article C"]);
}

#[test]
fn test_end_to_end_grouping() {
    let (store, media_id) = seeded_store();
    let media = store.media(media_id).unwrap().unwrap();

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage(&media.file_name, media.id).unwrap();
    let report = finder.group_by_status(matches);

    let labels: Vec<&str> = report.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Draft", "Published"]);
    assert_eq!(report.len(), 3);
}

#[test]
fn test_malformed_meta_degrades_to_raw_containment() {
    let store = SqliteStore::open_in_memory().unwrap();
    let post = store.add_record("Post", "article", "published", "").unwrap();
    // Broken JSON that still contains the file name as raw text
    store.add_meta(post, "broken", r#"{"src": "image.jpg"#).unwrap();

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage("image.jpg", RecordId(999)).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, post);
}

#[test]
fn test_attachment_rows_never_in_candidate_pool() {
    let store = SqliteStore::open_in_memory().unwrap();
    let page = store.add_record("Page", "page", "published", "").unwrap();
    // A second attachment whose stored path mentions the traced file name
    store
        .add_attachment("/uploads/copy-of-image.jpg", Some(page))
        .unwrap();
    let media = store.add_attachment("/uploads/image.jpg", None).unwrap();

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage("image.jpg", media).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_scan_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("store.db");

    let media_id = {
        let store = SqliteStore::open(&db_path).unwrap();
        store
            .add_record("Post", "article", "published", "body with image.jpg")
            .unwrap();
        store.add_attachment("/uploads/image.jpg", None).unwrap()
    };

    let store = SqliteStore::open(&db_path).unwrap();
    let media = store.media(media_id).unwrap().unwrap();

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage(&media.file_name, media.id).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Post");
}

#[test]
fn test_list_media() {
    let (store, media_id) = seeded_store();
    let orphan = store.add_attachment("/uploads/other.png", None).unwrap();

    let media = store.list_media().unwrap();
    let ids: Vec<RecordId> = media.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![media_id, orphan]);
    assert_eq!(media[1].file_name, "other.png");
    assert!(media[1].parent.is_none());
}
