pub mod patterns;
pub mod rules;

use shared_types::{Analysis, UpsellFlags};

/// Rule extraction over the text of one visa-regulation document.
///
/// Every query is a pure function of the stored text: calls can be made in
/// any order, repeated, or shared across threads, and none of them fail.
#[derive(Debug, Clone)]
pub struct RuleExtractor {
    text: String,
}

impl RuleExtractor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Passport validity, photo spec and biometric advisory, padded to three
    pub fn extract_critical_rules(&self) -> [String; 3] {
        rules::critical::extract_critical_rules(&self.text)
    }

    pub fn extract_fees(&self) -> Vec<String> {
        rules::fees::extract_fees(&self.text)
    }

    pub fn extract_insurance_limit(&self) -> String {
        rules::insurance::extract_insurance_limit(&self.text)
    }

    pub fn analyze_checklist_items(&self) -> Vec<String> {
        rules::checklist::analyze_checklist_items(&self.text)
    }

    pub fn upsell_opportunities(&self) -> UpsellFlags {
        rules::upsell::detect_upsell_opportunities(&self.text)
    }

    /// Run every extraction once and bundle the results
    pub fn analyze(&self, file_name: Option<&str>) -> Analysis {
        let analysis = Analysis {
            file_name: file_name.map(str::to_string),
            critical_rules: self.extract_critical_rules(),
            fees: self.extract_fees(),
            insurance_limit: self.extract_insurance_limit(),
            checklist: self.analyze_checklist_items(),
            upsells: self.upsell_opportunities(),
            analyzed_at: chrono::Utc::now().timestamp() as u64,
        };

        tracing::debug!(
            file = file_name.unwrap_or("<text>"),
            chars = self.text.chars().count(),
            fees = analysis.fees.len(),
            checklist_items = analysis.checklist.len(),
            "Document analyzed"
        );

        analysis
    }
}
