use crate::models::{StrengthLabel, StrengthReport, SYMBOLS};

const MIN_SCORED_LENGTH: usize = 6;

/// Score a password from 0 to 4, one point per character class present.
///
/// Passwords shorter than six characters are always "Very Weak" and are not
/// checked any further.
pub fn evaluate(password: &str) -> StrengthReport {
    if password.chars().count() < MIN_SCORED_LENGTH {
        return StrengthReport {
            score: 0,
            label: StrengthLabel::VeryWeak,
            recommendations: vec!["Use at least 6 characters.".to_string()],
        };
    }

    let checks: [(fn(char) -> bool, &str); 4] = [
        (char::is_lowercase, "Add lowercase letters."),
        (char::is_uppercase, "Add uppercase letters."),
        (|c| c.is_ascii_digit(), "Add digits."),
        (|c| SYMBOLS.contains(c), "Add symbols such as !@#$%&*."),
    ];

    let mut score = 0;
    let mut recommendations = Vec::new();
    for (present, advice) in checks {
        if password.chars().any(present) {
            score += 1;
        } else {
            recommendations.push(advice.to_string());
        }
    }

    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_are_very_weak() {
        let report = evaluate("abc");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::VeryWeak);
        assert_eq!(report.recommendation(), "Use at least 6 characters.");

        // Every class present, still too short.
        let report = evaluate("Aa1$");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn all_classes_is_very_strong() {
        let report = evaluate("Abc123$%");
        assert_eq!(report.score, 4);
        assert_eq!(report.label, StrengthLabel::VeryStrong);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.recommendation(), "Good password.");
    }

    #[test]
    fn missing_classes_are_reported_in_order() {
        let report = evaluate("abcdefgh");
        assert_eq!(report.score, 1);
        assert_eq!(report.label, StrengthLabel::Weak);
        assert_eq!(
            report.recommendation(),
            "Add uppercase letters. Add digits. Add symbols such as !@#$%&*."
        );

        let report = evaluate("Abcdef12");
        assert_eq!(report.score, 3);
        assert_eq!(report.label, StrengthLabel::Strong);
        assert_eq!(report.recommendations, vec!["Add symbols such as !@#$%&*.".to_string()]);
    }

    #[test]
    fn symbols_outside_the_alphabet_do_not_count() {
        let report = evaluate("abc123^^");
        assert_eq!(report.score, 2);
        assert_eq!(report.label, StrengthLabel::Moderate);
        assert_eq!(report.recommendation(), "Add uppercase letters. Add symbols such as !@#$%&*.");
    }

    #[test]
    fn six_characters_without_any_class_scores_zero() {
        let report = evaluate("^^^^^^");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::VeryWeak);
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five characters, more than six bytes.
        assert_eq!(evaluate("ééééé").recommendation(), "Use at least 6 characters.");
        assert_eq!(evaluate("Éééééé1!").score, 4);
    }

    #[test]
    fn only_decimal_digits_count_as_digits() {
        let report = evaluate("abcdef½");
        assert_eq!(report.score, 1);
        assert_eq!(
            report.recommendation(),
            "Add uppercase letters. Add digits. Add symbols such as !@#$%&*."
        );
        assert_eq!(evaluate("abcdef7").score, 2);
    }

    #[test]
    fn evaluation_is_deterministic() {
        assert_eq!(evaluate("Pa55word"), evaluate("Pa55word"));
    }
}
