//! Frame extraction from a Figma document tree.
//!
//! Walks the document's pages and collects the names of their immediate
//! FRAME children. Depth is fixed at two levels below the root: nested frames
//! and non-frame containers are never descended into.

use serde_json::Value;

/// Node type tag marking a top-level frame.
const FRAME_TYPE: &str = "FRAME";

/// Collect the names of top-level frames, in document order.
///
/// Duplicates are preserved; nodes with a missing or empty `name` are
/// skipped. A document with no pages or no matching nodes yields an empty
/// vector.
pub fn extract_frame_names(file_data: &Value) -> Vec<String> {
    let mut frames = Vec::new();

    let pages = file_data
        .get("document")
        .and_then(|doc| doc.get("children"))
        .and_then(Value::as_array);

    for page in pages.into_iter().flatten() {
        let nodes = page.get("children").and_then(Value::as_array);
        for node in nodes.into_iter().flatten() {
            if node.get("type").and_then(Value::as_str) != Some(FRAME_TYPE) {
                continue;
            }
            if let Some(name) = node.get("name").and_then(Value::as_str)
                && !name.is_empty()
            {
                frames.push(name.to_string());
            }
        }
    }

    frames
}
