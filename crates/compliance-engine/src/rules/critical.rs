//! Critical rules: passport validity, photo specification, biometrics
//!
//! Always three slots in fixed order. A slot with no evidence is either a
//! fixed recommendation (passport) or filled by padding at the end.

use crate::patterns::{
    contains_any, fold_case, BIOMETRIC_KEYWORDS, PASSPORT_VALIDITY_PATTERN, PHOTO_SPEC_PATTERN,
};
use shared_types::Finding;

pub const PASSPORT_LABEL: &str = "⚠️ Pasaport Geçerliliği";
pub const PASSPORT_FALLBACK: &str = "En az 6 ay önerilir (Dokümanda bulunamadı)";
pub const PHOTO_LABEL: &str = "📸 Fotoğraf";
pub const BIOMETRIC_ADVISORY: &str =
    "Fingerprint: Son 59 ayda verilmemişse şahsen başvuru gerekir.";
pub const NO_ADDITIONAL_RULE: &str = "Ek kural bulunamadı.";

/// Passport validity span, or the 6-month recommendation
pub fn find_passport_validity(text: &str) -> Finding {
    match PASSPORT_VALIDITY_PATTERN.find(text) {
        Some(m) => Finding::matched(m.as_str()),
        None => Finding::fallback(PASSPORT_FALLBACK),
    }
}

/// Photo dimension span; there is no sensible default size to suggest
pub fn find_photo_spec(text: &str) -> Option<Finding> {
    PHOTO_SPEC_PATTERN
        .find(text)
        .map(|m| Finding::matched(m.as_str()))
}

pub fn requires_biometrics(text: &str) -> bool {
    contains_any(&fold_case(text), BIOMETRIC_KEYWORDS)
}

/// Build the three critical-rule lines shown to the agent
pub fn extract_critical_rules(text: &str) -> [String; 3] {
    let mut rules = Vec::with_capacity(3);

    rules.push(format!("{}: {}", PASSPORT_LABEL, find_passport_validity(text)));

    if let Some(photo) = find_photo_spec(text) {
        rules.push(format!("{}: {}", PHOTO_LABEL, photo));
    }

    if requires_biometrics(text) {
        rules.push(BIOMETRIC_ADVISORY.to_string());
    }

    // Pads missing slots and drops anything past the third
    let mut rules = rules.into_iter();
    std::array::from_fn(|_| {
        rules
            .next()
            .unwrap_or_else(|| NO_ADDITIONAL_RULE.to_string())
    })
}
