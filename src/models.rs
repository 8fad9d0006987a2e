// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Symbols used both for generation and for strength detection.
pub const SYMBOLS: &str = "!@#$%&*";

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_BATCH_COUNT: usize = 100;

// Password generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    /// Number of characters to draw (default 12, minimum 4 at the API boundary)
    pub length: usize,
    /// Include `A-Z` (default true)
    pub include_uppercase: bool,
    /// Include `a-z` (default true)
    pub include_lowercase: bool,
    /// Include `0-9` (default true)
    pub include_digits: bool,
    /// Include `!@#$%&*` (default true)
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn any_class_enabled(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_digits || self.include_symbols
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Moderate,
            3 => StrengthLabel::Strong,
            4 => StrengthLabel::VeryStrong,
            _ => StrengthLabel::VeryWeak,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::VeryWeak => write!(f, "Very Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Moderate => write!(f, "Moderate"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub label: StrengthLabel,
    pub recommendations: Vec<String>,
}

impl StrengthReport {
    /// Recommendations as a single advisory sentence.
    pub fn recommendation(&self) -> String {
        if self.recommendations.is_empty() {
            "Good password.".to_string()
        } else {
            self.recommendations.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enable_every_class() {
        let options = PasswordGenerationOptions::default();
        assert_eq!(options.length, 12);
        assert!(options.include_uppercase && options.include_lowercase);
        assert!(options.include_digits && options.include_symbols);
    }

    #[test]
    fn labels_serialize_with_spaces() {
        assert_eq!(serde_json::to_string(&StrengthLabel::VeryWeak).unwrap(), "\"Very Weak\"");
        assert_eq!(serde_json::to_string(&StrengthLabel::Moderate).unwrap(), "\"Moderate\"");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn recommendation_joins_or_praises() {
        let report = StrengthReport {
            score: 2,
            label: StrengthLabel::Moderate,
            recommendations: vec!["Add digits.".into(), "Add symbols such as !@#$%&*.".into()],
        };
        assert_eq!(report.recommendation(), "Add digits. Add symbols such as !@#$%&*.");

        let clean = StrengthReport { score: 4, label: StrengthLabel::VeryStrong, recommendations: vec![] };
        assert_eq!(clean.recommendation(), "Good password.");
    }
}
