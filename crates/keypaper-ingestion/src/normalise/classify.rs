//! Paper-type tagging from title text.
//!
//! Case-insensitive substring rules evaluated in order; the first rule
//! with a matching keyword wins. This is a display hint, not a validated
//! classification.

use crate::models::PaperType;

/// Assigns a `PaperType` to a title.
pub trait PaperClassifier: Send + Sync {
    fn classify(&self, title: &str) -> PaperType;
}

/// Ordered keyword rules. Earlier entries take priority.
pub const TITLE_RULES: &[(&[&str], PaperType)] = &[
    (&["review", "overview", "state-of-the-art"],             PaperType::Review),
    (&["framework", "model", "theory"],                       PaperType::Framework),
    (&["assess", "evaluat", "measur", "effectiveness"],       PaperType::Eval),
];

/// The default rule table over `TITLE_RULES`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleRuleClassifier;

impl PaperClassifier for TitleRuleClassifier {
    fn classify(&self, title: &str) -> PaperType {
        let t = title.to_lowercase();
        TITLE_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| t.contains(k)))
            .map(|(_, label)| *label)
            .unwrap_or(PaperType::Research)
    }
}
