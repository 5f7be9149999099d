//! Minimum travel-insurance coverage

use crate::patterns::INSURANCE_LIMIT_PATTERN;
use shared_types::Finding;

/// Schengen minimum, shown when the document names no amount
pub const DEFAULT_INSURANCE_LIMIT: &str = "30.000 € (Standart)";

pub fn find_insurance_limit(text: &str) -> Finding {
    match INSURANCE_LIMIT_PATTERN.captures(text) {
        Some(cap) => Finding::matched(format!("{} {}", &cap[2], &cap[3])),
        None => Finding::fallback(DEFAULT_INSURANCE_LIMIT),
    }
}

pub fn extract_insurance_limit(text: &str) -> String {
    find_insurance_limit(text).into_inner()
}
