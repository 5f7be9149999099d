use std::fmt;

/// Outcome of a single heuristic over document text.
///
/// Heuristics never fail: when the pattern finds nothing they hand back a
/// fixed fallback instead, so callers must read every value as a best guess.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Finding {
    /// Excerpt taken from the document
    Matched(String),
    /// Fixed value used because nothing matched
    Default(String),
}

impl Finding {
    pub fn matched(span: impl Into<String>) -> Self {
        Self::Matched(span.into())
    }

    pub fn fallback(value: &str) -> Self {
        Self::Default(value.to_string())
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Matched(s) | Self::Default(s) => s,
        }
    }

    pub fn into_inner(self) -> String {
        match self {
            Self::Matched(s) | Self::Default(s) => s,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-sell signals raised by keyword presence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpsellFlags {
    pub insurance: bool,
    pub flight_hotel: bool,
    pub vip: bool,
}

impl UpsellFlags {
    pub fn any(&self) -> bool {
        self.insurance || self.flight_hotel || self.vip
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Analysis {
    pub file_name: Option<String>,
    pub critical_rules: [String; 3], // passport, photo, biometric (padded)
    pub fees: Vec<String>,           // never empty
    pub insurance_limit: String,
    pub checklist: Vec<String>, // never empty, source line order
    pub upsells: UpsellFlags,
    pub analyzed_at: u64, // unix seconds
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finding_display_uses_inner_text() {
        assert_eq!(Finding::matched("120 €").to_string(), "120 €");
        assert_eq!(Finding::fallback("Belirtilmemiş").to_string(), "Belirtilmemiş");
    }

    #[test]
    fn test_finding_tracks_origin() {
        assert!(Finding::matched("x").is_matched());
        assert!(!Finding::fallback("x").is_matched());
    }

    #[test]
    fn test_upsell_flags_serialize_with_fixed_keys() {
        let flags = UpsellFlags {
            insurance: true,
            flight_hotel: false,
            vip: true,
        };
        let json = serde_json::to_value(flags).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"insurance": true, "flight_hotel": false, "vip": true})
        );
    }

    #[test]
    fn test_finding_serializes_tagged() {
        let json = serde_json::to_value(Finding::fallback("30.000 € (Standart)")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "default", "value": "30.000 € (Standart)"})
        );
    }
}
