//! Performance-score feedback composer.

use super::templates::*;
use super::{fill, fill_study, parse_features, secondary_sentence};
use crate::bounds;
use crate::extract::extract;
use crate::picker::{pick, Picker, ThreadRngPicker};
use crate::suggest::synthesize;
use crate::types::{Domain, FeedbackMessage, Influence, ParsedFeature, PerformanceBand, Severity};

/// Coaching feedback for a predicted performance score (0-100).
///
/// Total over all inputs: malformed or missing explanations route to the
/// no-explanation path, a missing score bands as 0.
pub fn performance_feedback(
    explanation: &str,
    predicted_score: Option<f64>,
    classification: Option<&str>,
) -> FeedbackMessage {
    let mut picker = ThreadRngPicker;
    performance_feedback_with(explanation, predicted_score, classification, &mut picker)
}

/// [`performance_feedback`] with an injected template picker.
pub fn performance_feedback_with(
    explanation: &str,
    predicted_score: Option<f64>,
    classification: Option<&str>,
    picker: &mut dyn Picker,
) -> FeedbackMessage {
    if let Some(label) = classification {
        tracing::trace!(classification = label, "classification label carried, not phrased");
    }

    let band = PerformanceBand::from_score(predicted_score.unwrap_or(0.0));
    let severity = Severity::Performance(band);
    tracing::debug!(band = band.as_str(), "performance feedback requested");

    let signals = extract(explanation, Domain::Performance);
    let mut features = parse_features(&signals);

    if features.is_empty() {
        return no_explanation(band, severity, picker);
    }

    let mut message = lead_sentence(&features[0], band, picker);
    if let Some(rest) = secondary_sentence(&features, "Outros fatores importantes: ") {
        message.push_str(&rest);
    }

    let suggestions = synthesize(&features, severity, picker);
    features.truncate(bounds::MAX_FEATURES);

    FeedbackMessage {
        title: pick(picker, PERF_TITLES).to_string(),
        message,
        features,
        suggestions,
    }
}

fn no_explanation(
    band: PerformanceBand,
    severity: Severity,
    picker: &mut dyn Picker,
) -> FeedbackMessage {
    let pool = match band {
        PerformanceBand::Excellent => PERF_EXCELLENT_MSGS,
        PerformanceBand::Good => PERF_GOOD_MSGS,
        PerformanceBand::Approved => PERF_APPROVED_MSGS,
        PerformanceBand::Critical => PERF_CRITICAL_MSGS,
    };
    FeedbackMessage {
        title: pick(picker, PERF_FALLBACK_TITLES).to_string(),
        message: pick(picker, pool).to_string(),
        features: Vec::new(),
        suggestions: synthesize(&[], severity, picker),
    }
}

/// Lead sentence for the top factor: opener naming the feature plus a
/// specialized detail sentence on the negative side, a single
/// per-feature sentence on the positive side.
fn lead_sentence(feature: &ParsedFeature, band: PerformanceBand, picker: &mut dyn Picker) -> String {
    match feature.influence {
        Influence::Negative => {
            let opener_pool = if band == PerformanceBand::Critical {
                PERF_NEG_OPENERS_CRITICAL
            } else {
                PERF_NEG_OPENERS
            };
            let mut sentence = fill(pick::<&str>(picker, opener_pool), feature);
            sentence.push_str(&negative_detail(feature, picker));
            sentence
        }
        Influence::Positive => positive_lead(feature, band, picker),
    }
}

fn negative_detail(feature: &ParsedFeature, picker: &mut dyn Picker) -> String {
    match (feature.feature.as_str(), feature.value.as_number()) {
        ("Horas de Estudo", Some(weekly)) => {
            let pool = if weekly >= bounds::STUDY_HOURS_HIGH {
                STUDY_DETAIL_HIGH
            } else if weekly < bounds::STUDY_HOURS_LOW {
                STUDY_DETAIL_VERY_LOW
            } else if weekly < bounds::STUDY_HOURS_MID {
                STUDY_DETAIL_LOW
            } else {
                STUDY_DETAIL_MID
            };
            fill_study(pick::<&str>(picker, pool), weekly)
        }
        ("Frequência às Aulas", Some(pct)) => {
            let pool = if pct < bounds::ATTENDANCE_VERY_LOW_MAX {
                ATTENDANCE_DETAIL_VERY_LOW
            } else {
                ATTENDANCE_DETAIL_LOW
            };
            fill(pick::<&str>(picker, pool), feature)
        }
        ("Horas de Sono", Some(hours)) => {
            let pool = if hours < bounds::SLEEP_HOURS_LOW {
                SLEEP_DETAIL_VERY_LOW
            } else if hours > bounds::SLEEP_HOURS_HIGH {
                SLEEP_DETAIL_VERY_HIGH
            } else {
                SLEEP_DETAIL_MID
            };
            fill(pick::<&str>(picker, pool), feature)
        }
        ("Nível de Motivação", _) => fill(pick::<&str>(picker, MOTIVATION_DETAIL), feature),
        ("Notas Anteriores", _) => fill(pick::<&str>(picker, PREVIOUS_SCORES_DETAIL), feature),
        _ => fill(pick::<&str>(picker, GENERIC_NEG_DETAIL), feature),
    }
}

fn positive_lead(feature: &ParsedFeature, band: PerformanceBand, picker: &mut dyn Picker) -> String {
    if band == PerformanceBand::Critical {
        return fill(pick::<&str>(picker, PERF_POS_LEADS_CRITICAL), feature);
    }
    match (feature.feature.as_str(), feature.value.as_number()) {
        ("Horas de Estudo", Some(weekly)) => fill_study(pick::<&str>(picker, STUDY_POS_LEADS), weekly),
        ("Frequência às Aulas", _) => fill(pick::<&str>(picker, ATTENDANCE_POS_LEADS), feature),
        ("Acesso a Recursos" | "Qualidade do Professor", _) => {
            fill(pick::<&str>(picker, RESOURCE_POS_LEADS), feature)
        }
        ("Envolvimento dos Pais" | "Nível de Motivação", _) => {
            fill(pick::<&str>(picker, SUPPORT_POS_LEADS), feature)
        }
        _ => fill(pick::<&str>(picker, GENERIC_POS_LEADS), feature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::FirstPicker;
    use crate::suggest::templates::{ESCALATION, GENERAL_PERFORMANCE};

    #[test]
    fn empty_explanation_takes_no_explanation_path() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with("", Some(95.0), None, &mut p);
        assert_eq!(fb.title, PERF_FALLBACK_TITLES[0]);
        assert_eq!(fb.message, PERF_EXCELLENT_MSGS[0]);
        assert!(fb.features.is_empty());
        assert_eq!(fb.suggestions[0], GENERAL_PERFORMANCE[0][0]);
    }

    #[test]
    fn empty_explanation_critical_band_escalates() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with("", Some(40.0), None, &mut p);
        assert_eq!(fb.message, PERF_CRITICAL_MSGS[0]);
        // general top-up bundle (2) + fixed escalation bundle (4)
        assert_eq!(fb.suggestions.len(), 6);
        for sentence in ESCALATION {
            assert!(fb.suggestions.iter().any(|s| s == sentence));
        }
    }

    #[test]
    fn missing_score_bands_as_zero() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with("", None, None, &mut p);
        assert_eq!(fb.message, PERF_CRITICAL_MSGS[0]);
    }

    #[test]
    fn study_hours_lead_carries_weekly_and_daily_figures() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with(
            "Horas de Estudo: 14 (influência negativa)",
            Some(65.0),
            None,
            &mut p,
        );
        assert!(fb.message.contains("horas de estudo"));
        assert!(fb.message.contains("14 horas semanais"));
        assert!(fb.message.contains("2.0h por dia"));
    }

    #[test]
    fn critical_band_uses_urgent_opener() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with(
            "Horas de Estudo: 14 (influência negativa)",
            Some(45.0),
            None,
            &mut p,
        );
        assert!(fb.message.starts_with("Atenção: horas de estudo"));
    }

    #[test]
    fn attendance_detail_splits_at_70() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with(
            "Frequência às Aulas: 65 (influência negativa)",
            Some(65.0),
            None,
            &mut p,
        );
        assert_eq!(fb.features[0].influence, Influence::Negative);
        assert!(fb.message.contains("65% está muito abaixo do ideal"));

        let fb = performance_feedback_with(
            "Frequência às Aulas: 75 (influência negativa)",
            Some(65.0),
            None,
            &mut p,
        );
        assert!(fb.message.contains("75% pode estar afetando"));
    }

    #[test]
    fn secondary_sentence_names_further_features() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with(
            "Horas de Estudo: 15 (influência negativa); \
             Horas de Sono: 5 (influência negativa); \
             Nível de Motivação: 3 (influência negativa); \
             Faltas Escolares: 12 (influência negativa)",
            Some(50.0),
            None,
            &mut p,
        );
        assert!(fb
            .message
            .contains("Outros fatores importantes: horas de sono, nível de motivação."));
        assert_eq!(fb.features.len(), bounds::MAX_FEATURES);
        assert!(fb.suggestions.len() <= bounds::MAX_SUGGESTIONS);
    }

    #[test]
    fn positive_top_factor_on_critical_band_keeps_urgency() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with(
            "Frequência às Aulas: 95 (influência negativa)",
            Some(40.0),
            None,
            &mut p,
        );
        // 95% attendance is corrected to positive despite the reported sign
        assert_eq!(fb.features[0].influence, Influence::Positive);
        assert_eq!(
            fb.message,
            fill(PERF_POS_LEADS_CRITICAL[0], &fb.features[0])
        );
    }

    #[test]
    fn resource_and_support_groups_take_their_pools() {
        let mut p = FirstPicker;
        let fb = performance_feedback_with(
            "Qualidade do Professor: Good (influência negativa)",
            Some(75.0),
            None,
            &mut p,
        );
        // "Good" corrects to positive via the categorical rule
        assert_eq!(fb.message, fill(RESOURCE_POS_LEADS[0], &fb.features[0]));

        let fb = performance_feedback_with(
            "Envolvimento dos Pais: High (influência negativa)",
            Some(75.0),
            None,
            &mut p,
        );
        assert_eq!(fb.message, fill(SUPPORT_POS_LEADS[0], &fb.features[0]));
    }
}
