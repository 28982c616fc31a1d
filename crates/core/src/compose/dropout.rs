//! Dropout-risk feedback composer.

use super::templates::*;
use super::{fill, parse_features, secondary_sentence};
use crate::bounds;
use crate::extract::extract;
use crate::picker::{pick, Picker, ThreadRngPicker};
use crate::suggest::synthesize;
use crate::types::{Domain, DropoutBand, FeedbackMessage, Influence, ParsedFeature, Severity};

/// Coaching feedback for a predicted dropout probability (0-1).
///
/// Total over all inputs: malformed or missing explanations route to the
/// no-explanation path, a missing probability bands as 0 (low risk).
pub fn dropout_feedback(
    explanation: &str,
    probability: Option<f64>,
    classification: Option<&str>,
) -> FeedbackMessage {
    let mut picker = ThreadRngPicker;
    dropout_feedback_with(explanation, probability, classification, &mut picker)
}

/// [`dropout_feedback`] with an injected template picker.
pub fn dropout_feedback_with(
    explanation: &str,
    probability: Option<f64>,
    classification: Option<&str>,
    picker: &mut dyn Picker,
) -> FeedbackMessage {
    if let Some(label) = classification {
        tracing::trace!(classification = label, "classification label carried, not phrased");
    }

    let band = DropoutBand::from_probability(probability.unwrap_or(0.0));
    let severity = Severity::Dropout(band);
    tracing::debug!(band = band.as_str(), "dropout feedback requested");

    let signals = extract(explanation, Domain::Dropout);
    let mut features = parse_features(&signals);

    if features.is_empty() {
        return no_explanation(band, severity, picker);
    }

    let mut message = lead_sentence(&features[0], picker);
    if let Some(rest) = secondary_sentence(&features, "Outros fatores: ") {
        message.push_str(&rest);
    }

    let suggestions = synthesize(&features, severity, picker);
    features.truncate(bounds::MAX_FEATURES);

    FeedbackMessage {
        title: pick(picker, DROPOUT_TITLES).to_string(),
        message,
        features,
        suggestions,
    }
}

fn no_explanation(band: DropoutBand, severity: Severity, picker: &mut dyn Picker) -> FeedbackMessage {
    let pool = match band {
        DropoutBand::High => DROPOUT_HIGH_MSGS,
        DropoutBand::Medium => DROPOUT_MEDIUM_MSGS,
        DropoutBand::Low => DROPOUT_LOW_MSGS,
    };
    FeedbackMessage {
        title: pick(picker, DROPOUT_FALLBACK_TITLES).to_string(),
        message: pick(picker, pool).to_string(),
        features: Vec::new(),
        suggestions: synthesize(&[], severity, picker),
    }
}

fn lead_sentence(feature: &ParsedFeature, picker: &mut dyn Picker) -> String {
    match feature.influence {
        Influence::Negative => {
            let mut sentence = fill(pick::<&str>(picker, DROPOUT_NEG_OPENERS), feature);
            sentence.push_str(&negative_detail(feature, picker));
            sentence
        }
        Influence::Positive => {
            let mut sentence = fill(pick::<&str>(picker, DROPOUT_POS_OPENERS), feature);
            sentence.push_str(positive_closer(&feature.feature));
            sentence
        }
    }
}

fn negative_detail(feature: &ParsedFeature, picker: &mut dyn Picker) -> String {
    let pool = match feature.feature.as_str() {
        "Faltas Escolares" => DROPOUT_ABSENCE_DETAIL,
        "Participação em Aula" => DROPOUT_PARTICIPATION_DETAIL,
        "Materiais Acessados" => DROPOUT_MATERIALS_DETAIL,
        _ => DROPOUT_GENERIC_DETAIL,
    };
    fill(pick::<&str>(picker, pool), feature)
}

fn positive_closer(feature: &str) -> &'static str {
    match feature {
        "Faltas Escolares" => DROPOUT_POS_CLOSER_ABSENCE,
        "Participação em Aula" => DROPOUT_POS_CLOSER_PARTICIPATION,
        "Materiais Acessados" => DROPOUT_POS_CLOSER_MATERIALS,
        _ => DROPOUT_POS_CLOSER_GENERIC,
    }
}
