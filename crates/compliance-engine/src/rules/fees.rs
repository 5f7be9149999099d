//! Visa fee amounts found near fee wording

use crate::patterns::FEE_PATTERN;

pub const FEE_UNSPECIFIED: &str = "Belirtilmemiş";

/// Distinct fee mentions as "<fee word> <amount> <currency>", first-seen order
pub fn find_fees(text: &str) -> Vec<String> {
    let mut fees: Vec<String> = Vec::new();

    for cap in FEE_PATTERN.captures_iter(text) {
        let fee = format!("{} {} {}", &cap[1], &cap[2], &cap[3]);
        if !fees.contains(&fee) {
            fees.push(fee);
        }
    }

    fees
}

/// Fees for display; never empty
pub fn extract_fees(text: &str) -> Vec<String> {
    let fees = find_fees(text);
    if fees.is_empty() {
        vec![FEE_UNSPECIFIED.to_string()]
    } else {
        fees
    }
}
