//! Sentiment correction: re-derives the pedagogically correct influence
//! direction for each factor. The sign reported by the model reflects an
//! encoding artifact for most categorical features, so this module — not
//! the explanation text — is the source of truth for "is this good or
//! bad for the student".

mod rules;

pub use rules::{ATTENDANCE_FEATURE, CATEGORICAL_RULES, GENERIC_NEGATIVE, GENERIC_POSITIVE};

use crate::bounds;
use crate::types::{FeatureValue, Influence};

/// Correct the reported influence for one factor.
///
/// Ordered evaluation, first match wins:
/// 1. attendance threshold (the only rule that overrides a numeric value)
/// 2. feature-specific categorical keyword rules
/// 3. generic keyword fallback (non-numeric values only)
/// 4. passthrough of the reported sign
pub fn correct(canonical_name: &str, value: &FeatureValue, reported: Influence) -> Influence {
    if canonical_name == ATTENDANCE_FEATURE {
        if let Some(pct) = value.as_number() {
            return if pct >= bounds::ATTENDANCE_OK_MIN {
                Influence::Positive
            } else {
                Influence::Negative
            };
        }
    }

    let FeatureValue::Text(raw) = value else {
        return reported;
    };
    let text = raw.trim().to_lowercase();

    if let Some(rule) = CATEGORICAL_RULES.iter().find(|r| r.feature == canonical_name) {
        if let Some(corrected) = rule.apply(&text) {
            return corrected;
        }
    }

    if GENERIC_POSITIVE.iter().any(|kw| text.contains(kw)) {
        return Influence::Positive;
    }
    if GENERIC_NEGATIVE.iter().any(|kw| text.contains(kw)) {
        return Influence::Negative;
    }

    reported
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FeatureValue {
        FeatureValue::Text(s.to_string())
    }

    #[test]
    fn attendance_threshold_is_inclusive_at_80() {
        let n79 = FeatureValue::Number(79.0);
        let n80 = FeatureValue::Number(80.0);
        assert_eq!(
            correct(ATTENDANCE_FEATURE, &n79, Influence::Positive),
            Influence::Negative
        );
        assert_eq!(
            correct(ATTENDANCE_FEATURE, &n80, Influence::Negative),
            Influence::Positive
        );
    }

    #[test]
    fn other_numeric_features_pass_through() {
        let n = FeatureValue::Number(15.0);
        assert_eq!(
            correct("Horas de Estudo", &n, Influence::Negative),
            Influence::Negative
        );
        assert_eq!(
            correct("Horas de Estudo", &n, Influence::Positive),
            Influence::Positive
        );
    }

    #[test]
    fn yes_polarity_is_per_feature() {
        assert_eq!(
            correct("Deficiências de Aprendizagem", &text("Yes"), Influence::Positive),
            Influence::Negative
        );
        assert_eq!(
            correct("Atividades Extracurriculares", &text("Yes"), Influence::Negative),
            Influence::Positive
        );
    }

    #[test]
    fn no_polarity_is_per_feature() {
        assert_eq!(
            correct("Deficiências de Aprendizagem", &text("No"), Influence::Negative),
            Influence::Positive
        );
        assert_eq!(
            correct("Atividades Extracurriculares", &text("No"), Influence::Positive),
            Influence::Negative
        );
    }

    #[test]
    fn absence_buckets() {
        assert_eq!(
            correct("Faltas Escolares", &text("Under-7"), Influence::Negative),
            Influence::Positive
        );
        assert_eq!(
            correct("Faltas Escolares", &text("Above-7"), Influence::Positive),
            Influence::Negative
        );
    }

    #[test]
    fn distance_keywords() {
        assert_eq!(
            correct("Distância de Casa", &text("Near"), Influence::Negative),
            Influence::Positive
        );
        assert_eq!(
            correct("Distância de Casa", &text("Far"), Influence::Positive),
            Influence::Negative
        );
    }

    #[test]
    fn resource_quality_average_counts_as_positive() {
        assert_eq!(
            correct("Acesso a Recursos", &text("Average"), Influence::Negative),
            Influence::Positive
        );
        assert_eq!(
            correct("Qualidade do Professor", &text("Poor"), Influence::Positive),
            Influence::Negative
        );
    }

    #[test]
    fn generic_fallback_for_unmapped_features() {
        assert_eq!(
            correct("Tipo de Escola", &text("good public"), Influence::Negative),
            Influence::Positive
        );
        assert_eq!(
            correct("Tipo de Escola", &text("bad option"), Influence::Positive),
            Influence::Negative
        );
    }

    #[test]
    fn high_school_hits_generic_high_keyword() {
        // "High School" carries no feature-specific keyword for parental
        // education; the generic "high" substring decides.
        assert_eq!(
            correct("Nível Educacional dos Pais", &text("High School"), Influence::Negative),
            Influence::Positive
        );
    }

    #[test]
    fn unmatched_text_passes_through() {
        assert_eq!(
            correct("Gênero", &text("Female"), Influence::Positive),
            Influence::Positive
        );
        assert_eq!(
            correct("Gênero", &text("Female"), Influence::Negative),
            Influence::Negative
        );
    }
}
