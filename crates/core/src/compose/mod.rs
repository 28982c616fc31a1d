//! Feedback composition: the public entry points of the engine.
//!
//! Each domain composer runs the same pipeline — extract signals,
//! resolve names, correct sentiment, build the message and suggestion
//! list — and differs only in banding and template pools. Both are
//! total: any input string yields a complete
//! [`FeedbackMessage`](crate::types::FeedbackMessage).

mod dropout;
mod performance;
pub mod templates;

pub use dropout::{dropout_feedback, dropout_feedback_with};
pub use performance::{performance_feedback, performance_feedback_with};

use crate::resolve::resolve;
use crate::sentiment::correct;
use crate::types::{Impact, ParsedFeature, RawFeatureSignal};

/// Resolve, coerce and sentiment-correct raw signals, keeping order.
fn parse_features(signals: &[RawFeatureSignal]) -> Vec<ParsedFeature> {
    signals
        .iter()
        .map(|signal| {
            let feature = resolve(&signal.feature_key);
            let value = crate::types::FeatureValue::parse(&signal.raw_value);
            let influence = correct(&feature, &value, signal.reported);
            ParsedFeature {
                feature,
                value,
                influence,
                impact: Impact::High,
            }
        })
        .collect()
}

/// Substitute the placeholders a template may carry. Feature names are
/// interpolated in lowercase mid-sentence form; `{art}` is the agreeing
/// possessive article.
fn fill(template: &str, feature: &ParsedFeature) -> String {
    template
        .replace("{feature}", &feature.feature.to_lowercase())
        .replace("{value}", &feature.value.to_string())
        .replace("{art}", crate::suggest::article(&feature.feature))
}

/// Study-hour templates additionally carry the weekly figure and the
/// derived daily figure (weekly / 7, one decimal).
fn fill_study(template: &str, weekly: f64) -> String {
    template
        .replace("{weekly}", &crate::types::FeatureValue::Number(weekly).to_string())
        .replace("{daily}", &format!("{:.1}", weekly / 7.0))
}

/// " <prefix>a, b." naming the second and third features, when present.
fn secondary_sentence(features: &[ParsedFeature], prefix: &str) -> Option<String> {
    let rest: Vec<String> = features
        .iter()
        .skip(1)
        .take(crate::bounds::MAX_FEATURES - 1)
        .map(|f| f.feature.to_lowercase())
        .collect();
    if rest.is_empty() {
        return None;
    }
    Some(format!(" {}{}.", prefix, rest.join(", ")))
}
