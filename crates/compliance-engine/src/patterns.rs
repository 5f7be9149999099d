//! Regex patterns and keyword vocabularies for visa-regulation text
//!
//! Turkish consular documents are the primary input, so every vocabulary
//! carries the Turkish terms first and English equivalents after.

use lazy_static::lazy_static;
use regex::Regex;

// Turkish `i` is written `[iİ]`: `(?i)` does not fold the dotted capital `İ`.
lazy_static! {
    /// Passport keyword, validity keyword, then a duration in months/years
    pub static ref PASSPORT_VALIDITY_PATTERN: Regex = Regex::new(
        r"(?i)(pasaport|passport|travel document).*?(en az|geçerl[iİ]|at least|valid).*?(\d+\s*(?:ay|yıl|months?|years?))"
    )
    .unwrap();

    /// Photo keyword followed by a "3.5 x 4.5" or "5 x 6" dimension
    pub static ref PHOTO_SPEC_PATTERN: Regex = Regex::new(
        r"(?i)(b[iİ]yometr[iİ]k|fotoğraf|photo).*?(\d\.\d\s*x\s*\d\.\d|\d\s*x\s*\d)"
    )
    .unwrap();

    /// Fee word, then a 2-3 digit amount and a currency token
    pub static ref FEE_PATTERN: Regex = Regex::new(
        r"(?i)\b((?:ücret|harç|harc|fee|price)\w*).*?(\d{2,3})\s*(€|EUR|TL|USD|\$)"
    )
    .unwrap();

    /// Insurance word, then an amount with optional thousands separator and a Euro token.
    /// `Euro` precedes `EUR` so the whole word is reported, not "Eur".
    pub static ref INSURANCE_LIMIT_PATTERN: Regex = Regex::new(
        r"(?i)(s[iİ]gorta|tem[iİ]nat|insurance|coverage).*?(\d{2,3}[.,]?\d{0,3})\s*(Euro|EUR|€)"
    )
    .unwrap();

    /// Leading list marker: "1. ", "- ", "* " or "• "
    pub static ref LIST_MARKER_PATTERN: Regex = Regex::new(r"^(\d+\.|-|\*|•)\s+").unwrap();
}

/// Biometric / fingerprint mentions
pub const BIOMETRIC_KEYWORDS: &[&str] = &["parmak izi", "biyometri", "fingerprint", "biometric"];

/// Page header/footer markers that never form a checklist item
pub const PAGE_MARKERS: &[&str] = &["sayfa", "page"];

/// Names of documents an applicant typically has to bring
pub const DOCUMENT_KEYWORDS: &[&str] = &[
    "belge",
    "form",
    "dilekçe",
    "bordro",
    "banka",
    "rezervasyon",
    "sigorta",
];

/// Travel insurance / coverage mentions
pub const INSURANCE_KEYWORDS: &[&str] = &["sigorta", "teminat", "insurance", "coverage"];

/// Flight and accommodation booking mentions
pub const TRAVEL_BOOKING_KEYWORDS: &[&str] = &[
    "uçak",
    "otel",
    "konaklama",
    "rezervasyon",
    "bilet",
    "flight",
    "hotel",
    "accommodation",
    "reservation",
    "ticket",
];

/// Premium / expert handling mentions
pub const VIP_KEYWORDS: &[&str] = &["vip", "eksper", "expert"];

/// Lowercase for keyword lookup, folding the Turkish dotted capital `İ` to `i`
pub fn fold_case(text: &str) -> String {
    text.replace('İ', "i").to_lowercase()
}

/// True if the already-folded text contains any of the keywords
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any() {
        assert!(contains_any("seyahat sigortası", INSURANCE_KEYWORDS));
        assert!(!contains_any("pasaport fotokopisi", INSURANCE_KEYWORDS));
        assert!(!contains_any("", VIP_KEYWORDS));
    }

    #[test]
    fn test_fold_case_dotted_capital() {
        assert_eq!(fold_case("SİGORTA DİLEKÇESİ"), "sigorta dilekçesi");
        assert!(contains_any(&fold_case("TEMİNAT"), INSURANCE_KEYWORDS));
    }

    #[test]
    fn test_list_marker_requires_trailing_whitespace() {
        assert!(LIST_MARKER_PATTERN.is_match("1. Pasaport"));
        assert!(LIST_MARKER_PATTERN.is_match("• Banka dökümü"));
        assert!(!LIST_MARKER_PATTERN.is_match("1.5 x 2"));
        assert!(!LIST_MARKER_PATTERN.is_match("-eksik"));
    }

    #[test]
    fn test_patterns_do_not_cross_lines() {
        assert!(!PASSPORT_VALIDITY_PATTERN.is_match("Pasaport\nen az 6 ay"));
        assert!(PASSPORT_VALIDITY_PATTERN.is_match("Pasaport en az 6 ay"));
    }
}
