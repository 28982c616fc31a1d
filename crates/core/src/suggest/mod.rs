//! Suggestion synthesis: per-feature actionable sentences, with top-up
//! and escalation policies so the list is never empty and never exceeds
//! the cap.

mod grammar;
pub mod templates;

pub use grammar::article;

use crate::bounds;
use crate::picker::{pick, Picker};
use crate::types::{Domain, Influence, ParsedFeature, Severity};
use templates::*;

/// Generate the suggestion list for the corrected feature set.
///
/// Per-feature suggestions come first, in feature order. Then, in this
/// order: the general-purpose bundle when fewer than 2 exist, the fixed
/// escalation bundle when the performance band is critical and fewer
/// than 5 exist, the consolidation bundle when the outcome is favorable
/// and fewer than 5 exist. The result is truncated to 8.
pub fn synthesize(
    features: &[ParsedFeature],
    severity: Severity,
    picker: &mut dyn Picker,
) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    for feature in features {
        match feature.influence {
            Influence::Negative => match negative_bundle(feature, picker) {
                Some(bundle) => suggestions.extend(bundle.iter().map(|s| s.to_string())),
                None => suggestions.push(generic_negative(feature)),
            },
            Influence::Positive => {
                let sentence = positive_sentence(feature, severity.is_favorable(), picker);
                suggestions.push(sentence);
            }
        }
    }

    if suggestions.len() < bounds::TOPUP_MIN {
        let pool = match severity.domain() {
            Domain::Performance => GENERAL_PERFORMANCE,
            Domain::Dropout => GENERAL_DROPOUT,
        };
        let bundle = pick(picker, pool);
        suggestions.extend(bundle.iter().map(|s| s.to_string()));
    }

    if severity.is_critical() && suggestions.len() < bounds::BUNDLE_MIN {
        suggestions.extend(ESCALATION.iter().map(|s| s.to_string()));
    }

    if severity.is_favorable() && suggestions.len() < bounds::BUNDLE_MIN {
        suggestions.extend(CONSOLIDATE.iter().map(|s| s.to_string()));
    }

    suggestions.truncate(bounds::MAX_SUGGESTIONS);
    suggestions
}

/// Improvement bundle for a negative feature. Numeric features are
/// bucketed by value; `None` means the feature has no dedicated pool and
/// the caller falls back to the generic article-agreeing sentence.
fn negative_bundle(
    feature: &ParsedFeature,
    picker: &mut dyn Picker,
) -> Option<&'static [&'static str]> {
    let pool: templates::BundlePool = match feature.feature.as_str() {
        "Horas de Estudo" => match feature.value.as_number() {
            Some(weekly) if weekly >= bounds::STUDY_HOURS_HIGH => STUDY_NEG_HIGH,
            Some(weekly) if weekly < bounds::STUDY_HOURS_LOW => STUDY_NEG_VERY_LOW,
            Some(weekly) if weekly < bounds::STUDY_HOURS_MID => STUDY_NEG_LOW,
            // 28-50h and non-numeric values: push on quality, not amount.
            _ => STUDY_NEG_MID,
        },
        "Frequência às Aulas" => ATTENDANCE_NEG,
        "Participação em Aula" => PARTICIPATION_NEG,
        "Horas de Sono" => {
            let nightly = feature.value.as_number();
            match nightly {
                Some(h) if h < bounds::SLEEP_HOURS_LOW => SLEEP_NEG_LOW,
                Some(h) if h > bounds::SLEEP_HOURS_HIGH => SLEEP_NEG_HIGH,
                _ => SLEEP_NEG_REGULAR,
            }
        }
        "Nível de Motivação" => MOTIVATION_NEG,
        "Faltas Escolares" => ABSENCE_NEG,
        "Materiais Acessados" => MATERIALS_NEG,
        "Participações em Discussões" => DISCUSSION_NEG,
        _ => return None,
    };
    Some(*pick(picker, pool))
}

/// Generic negative sentence for features with no dedicated pool.
fn generic_negative(feature: &ParsedFeature) -> String {
    format!(
        "Melhore {} {} para obter melhores resultados",
        article(&feature.feature),
        feature.feature.to_lowercase()
    )
}

/// Encouragement sentence for a positive feature; favorable outcomes get
/// the celebrate-and-nudge variant.
fn positive_sentence(feature: &ParsedFeature, favorable: bool, picker: &mut dyn Picker) -> String {
    let pool: templates::SentencePool = match (feature.feature.as_str(), favorable) {
        ("Horas de Estudo", false) => STUDY_POS,
        ("Horas de Estudo", true) => STUDY_POS_FAVORABLE,
        ("Frequência às Aulas", false) => ATTENDANCE_POS,
        ("Frequência às Aulas", true) => ATTENDANCE_POS_FAVORABLE,
        ("Participação em Aula", false) => PARTICIPATION_POS,
        ("Participação em Aula", true) => PARTICIPATION_POS_FAVORABLE,
        ("Horas de Sono", false) => SLEEP_POS,
        ("Horas de Sono", true) => SLEEP_POS_FAVORABLE,
        (_, false) => GENERIC_POS,
        (_, true) => GENERIC_POS_FAVORABLE,
    };
    pick(picker, pool).to_string()
}
