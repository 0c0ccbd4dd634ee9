//! Frame extraction properties over realistic Figma document shapes.

use figma_features::extract::extract_frame_names;
use serde_json::json;

#[test]
fn test_duplicate_frame_names_are_kept_in_order() {
    let doc = json!({"document": {"children": [{"children": [
        {"type": "FRAME", "name": "Login"},
        {"type": "GROUP", "name": "Ignored"},
        {"type": "FRAME", "name": "Login"}
    ]}]}});
    assert_eq!(extract_frame_names(&doc), vec!["Login", "Login"]);
}

#[test]
fn test_realistic_file_keeps_only_depth_two_frames() {
    // Shape mirrors a real /v1/files response: extra metadata alongside the
    // document, frames carrying ids and style fields.
    let doc = json!({
        "name": "Mobile App",
        "lastModified": "2026-07-01T12:00:00Z",
        "document": {
            "id": "0:0",
            "type": "DOCUMENT",
            "children": [
                {
                    "id": "0:1",
                    "type": "CANVAS",
                    "name": "Page 1",
                    "children": [
                        {"id": "1:2", "type": "FRAME", "name": "Onboarding",
                         "children": [{"type": "FRAME", "name": "Step 1"}]},
                        {"id": "1:3", "type": "COMPONENT", "name": "Button"},
                        {"id": "1:4", "type": "FRAME", "name": "Home"}
                    ]
                },
                {
                    "id": "0:2",
                    "type": "CANVAS",
                    "name": "Archive",
                    "children": []
                }
            ]
        }
    });
    assert_eq!(extract_frame_names(&doc), vec!["Onboarding", "Home"]);
}

#[test]
fn test_document_without_pages_is_empty() {
    let doc = json!({"document": {"children": []}});
    assert!(extract_frame_names(&doc).is_empty());
}

#[test]
fn test_unexpected_shapes_do_not_panic() {
    for doc in [
        json!(null),
        json!("not a document"),
        json!({"document": "flat"}),
        json!({"document": {"children": "flat"}}),
        json!({"document": {"children": [{"children": "flat"}]}}),
    ] {
        assert!(extract_frame_names(&doc).is_empty());
    }
}
