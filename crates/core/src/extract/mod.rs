//! Explanation parsing: turns the loosely formatted explanation string
//! produced by the model into an ordered, deduplicated list of raw
//! feature signals. Malformed or empty input never fails — it yields an
//! empty list and the composer takes the no-explanation path.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resolve::resolve;
use crate::types::{Domain, FeatureValue, Influence, RawFeatureSignal};

/// Placeholder the upstream producer emits when it has no explanation.
pub const NO_EXPLANATION_SENTINEL: &str = "Sem explicação disponível";

/// Value assigned to signals inferred by the keyword fallback.
pub const INFERRED_VALUE: &str = "detectado";

/// One explanation segment: `label: value (influência positiva|negativa)`.
/// Labels and values stop at `:` and `;` so segment separators and
/// leading prose never bleed into the captures; values also stop at the
/// opening parenthesis.
static SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([^:;]+):\s*([^(:;]+)\(influência\s+(positiva|negativa)\)")
        .expect("segment pattern is valid")
});

/// Keyword fallback table for the dropout domain: whole-string intensity
/// phrases, tested in declaration order, first match wins.
static INFERENCE_PATTERNS: Lazy<Vec<(Regex, &'static str, Influence)>> = Lazy::new(|| {
    let table: &[(&str, &str, Influence)] = &[
        (r"(?i)(poucas|baixas?)\s+horas?\s+de\s+estudo", "Horas de Estudo", Influence::Negative),
        (r"(?i)(muitas?|altas?)\s+horas?\s+de\s+estudo", "Horas de Estudo", Influence::Positive),
        (r"(?i)(baixa|pouca)\s+frequência", "Frequência às Aulas", Influence::Negative),
        (r"(?i)(alta|boa)\s+frequência", "Frequência às Aulas", Influence::Positive),
        (r"(?i)(poucas?|baixas?)\s+participações?", "Participação em Aula", Influence::Negative),
        (r"(?i)(muitas?|altas?)\s+participações?", "Participação em Aula", Influence::Positive),
        (r"(?i)(muitas?|altas?)\s+faltas?", "Faltas Escolares", Influence::Negative),
        (r"(?i)(poucas?|baixas?)\s+faltas?", "Faltas Escolares", Influence::Positive),
    ];
    table
        .iter()
        .map(|(pattern, feature, influence)| {
            (Regex::new(pattern).expect("inference pattern is valid"), *feature, *influence)
        })
        .collect()
});

/// Extract raw feature signals from an explanation string.
///
/// Signals are kept in first-occurrence order and deduplicated by
/// (canonical name, lowercased stringified value); the seen-set lives
/// and dies inside this call. For the dropout domain an intensity-phrase
/// fallback fires when the structured scan finds nothing.
pub fn extract(explanation: &str, domain: Domain) -> Vec<RawFeatureSignal> {
    let trimmed = explanation.trim();
    if trimmed.is_empty() || trimmed == NO_EXPLANATION_SENTINEL {
        return Vec::new();
    }

    let mut signals = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for caps in SEGMENT_RE.captures_iter(explanation) {
        let label = caps[1].trim().to_string();
        let raw_value = caps[2].trim().to_string();
        let Some(reported) = Influence::parse(&caps[3]) else {
            continue;
        };

        let canonical = resolve(&label);
        let value_key = FeatureValue::parse(&raw_value).to_string().to_lowercase();
        if !seen.insert((canonical, value_key)) {
            continue;
        }

        signals.push(RawFeatureSignal {
            feature_key: label,
            raw_value,
            reported,
        });
    }

    if signals.is_empty() && domain == Domain::Dropout {
        if let Some(inferred) = infer_from_keywords(explanation) {
            tracing::debug!(feature = %inferred.feature_key, "keyword fallback matched");
            signals.push(inferred);
        }
    }

    tracing::debug!(
        domain = domain.as_str(),
        count = signals.len(),
        "explanation segments extracted"
    );
    signals
}

/// At most one inferred signal, from the first matching intensity phrase.
fn infer_from_keywords(explanation: &str) -> Option<RawFeatureSignal> {
    INFERENCE_PATTERNS
        .iter()
        .find(|(pattern, _, _)| pattern.is_match(explanation))
        .map(|(_, feature, influence)| RawFeatureSignal {
            feature_key: (*feature).to_string(),
            raw_value: INFERRED_VALUE.to_string(),
            reported: *influence,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_sentinel_yield_no_signals() {
        assert!(extract("", Domain::Performance).is_empty());
        assert!(extract("   ", Domain::Performance).is_empty());
        assert!(extract(NO_EXPLANATION_SENTINEL, Domain::Dropout).is_empty());
    }

    #[test]
    fn single_segment() {
        let signals = extract("Horas de Estudo: 15 (influência negativa)", Domain::Performance);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].feature_key, "Horas de Estudo");
        assert_eq!(signals[0].raw_value, "15");
        assert_eq!(signals[0].reported, Influence::Negative);
    }

    #[test]
    fn segments_keep_text_order() {
        let signals = extract(
            "Horas de Estudo: 15 (influência negativa); Frequência às Aulas: 90 (influência positiva)",
            Domain::Performance,
        );
        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].feature_key, "Horas de Estudo");
        assert_eq!(signals[1].feature_key, "Frequência às Aulas");
        assert_eq!(signals[1].reported, Influence::Positive);
    }

    #[test]
    fn exact_duplicates_collapse_to_first() {
        let signals = extract(
            "Horas de Estudo: 15 (influência negativa); \
             Horas de Estudo: 15 (influência negativa)",
            Domain::Performance,
        );
        assert_eq!(signals.len(), 1);
    }

    #[test]
    fn dedup_key_uses_canonical_name() {
        // Two spellings of the same feature with the same value: one signal.
        let signals = extract(
            "hours_studied: 15 (influência negativa); study_hours: 15 (influência positiva)",
            Domain::Performance,
        );
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].feature_key, "hours_studied");
    }

    #[test]
    fn same_feature_different_value_is_kept() {
        let signals = extract(
            "Horas de Estudo: 15 (influência negativa); Horas de Estudo: 30 (influência positiva)",
            Domain::Performance,
        );
        assert_eq!(signals.len(), 2);
    }

    #[test]
    fn numerically_equal_formattings_collapse() {
        // "7" and "7.0" stringify to the same dedup key after coercion.
        let signals = extract(
            "Horas de Sono: 7 (influência positiva); Horas de Sono: 7.0 (influência positiva)",
            Domain::Performance,
        );
        assert_eq!(signals.len(), 1);
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let signals = extract(
            "A predição considerou os fatores: Frequência às Aulas: 65 (influência negativa), \
             entre outros aspectos do histórico.",
            Domain::Performance,
        );
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].raw_value, "65");
    }

    #[test]
    fn dropout_fallback_infers_one_signal() {
        let signals = extract(
            "O aluno apresenta poucas horas de estudo e muitas faltas.",
            Domain::Dropout,
        );
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].feature_key, "Horas de Estudo");
        assert_eq!(signals[0].raw_value, INFERRED_VALUE);
        assert_eq!(signals[0].reported, Influence::Negative);
    }

    #[test]
    fn fallback_is_dropout_only() {
        let signals = extract(
            "O aluno apresenta poucas horas de estudo.",
            Domain::Performance,
        );
        assert!(signals.is_empty());
    }

    #[test]
    fn fallback_positive_mirror() {
        let signals = extract("aluno com boa frequência este semestre", Domain::Dropout);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].feature_key, "Frequência às Aulas");
        assert_eq!(signals[0].reported, Influence::Positive);
    }

    #[test]
    fn pathological_input_stays_ordered_and_finite() {
        let mut text = String::new();
        for i in 0..15 {
            text.push_str(&format!("Fator {i}: {i} (influência negativa); "));
        }
        let signals = extract(&text, Domain::Performance);
        assert_eq!(signals.len(), 15);
        assert_eq!(signals[0].feature_key, "Fator 0");
        assert_eq!(signals[14].feature_key, "Fator 14");
    }
}
