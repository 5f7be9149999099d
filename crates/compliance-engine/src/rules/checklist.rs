//! Required-document checklist inferred from list formatting and document names

use crate::patterns::{
    contains_any, fold_case, DOCUMENT_KEYWORDS, LIST_MARKER_PATTERN, PAGE_MARKERS,
};

pub const CHECKLIST_PLACEHOLDER: &str =
    "Otomatik liste çıkarılamadı. Lütfen metni kontrol edin.";

/// Lines shorter than this (in characters) are layout noise
pub const MIN_ITEM_CHARS: usize = 5;

/// Checklist candidates in source line order
pub fn find_checklist_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();

    for line in text.split('\n') {
        let line = line.trim();
        let line_lower = fold_case(line);

        if line.chars().count() < MIN_ITEM_CHARS || contains_any(&line_lower, PAGE_MARKERS) {
            continue;
        }

        if let Some(marker) = LIST_MARKER_PATTERN.find(line) {
            items.push(line[marker.end()..].to_string());
        } else if contains_any(&line_lower, DOCUMENT_KEYWORDS) {
            items.push(line.to_string());
        }
    }

    items
}

/// Checklist for display; never empty
pub fn analyze_checklist_items(text: &str) -> Vec<String> {
    let items = find_checklist_items(text);
    if items.is_empty() {
        vec![CHECKLIST_PLACEHOLDER.to_string()]
    } else {
        items
    }
}
