use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bounds;

/// Corrected directional sign of a feature: did it push the outcome
/// toward favorable or unfavorable. Distinct from whatever sign the
/// upstream model reported in the explanation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Influence {
    Positive,
    Negative,
}

impl Influence {
    /// Wire spelling used by the upstream explanation text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positiva",
            Self::Negative => "negativa",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "positiva" => Some(Self::Positive),
            "negativa" => Some(Self::Negative),
            _ => None,
        }
    }
}

/// A feature value as carried in the explanation: numeric when the raw
/// text coerces to a finite float, otherwise kept as a categorical string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
}

impl FeatureValue {
    /// Coerce raw value text. Leading-prefix float parse, matching the
    /// permissive coercion of the upstream producer ("85%" is 85).
    /// Non-numeric text is kept as-is, trimmed — never rejected.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match leading_number(trimmed) {
            Some(n) => Self::Number(n),
            None => Self::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Longest numeric prefix of `s` as a finite float, if any.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Significance tier of a mentioned feature. Every feature the model
/// bothers to mention is treated as high impact today; the field exists
/// so the render layer does not need a schema change when tiers arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A (label, value, sign) triple as lexically found in the explanation
/// text, before name resolution and sentiment correction.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeatureSignal {
    pub feature_key: String,
    pub raw_value: String,
    pub reported: Influence,
}

/// A fully processed factor: canonical display name, coerced value and
/// the domain-corrected influence direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFeature {
    pub feature: String,
    pub value: FeatureValue,
    pub influence: Influence,
    pub impact: Impact,
}

/// Final coaching message handed to the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub title: String,
    pub message: String,
    /// At most 3, first-occurrence order.
    pub features: Vec<ParsedFeature>,
    /// At most 8, generation order.
    pub suggestions: Vec<String>,
}

/// Which prediction the explanation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Performance,
    Dropout,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Dropout => "dropout",
        }
    }
}

/// Discretization of the predicted score (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    Excellent,
    Good,
    Approved,
    Critical,
}

impl PerformanceBand {
    pub fn from_score(score: f64) -> Self {
        if score >= bounds::PERF_EXCELLENT_MIN {
            Self::Excellent
        } else if score >= bounds::PERF_GOOD_MIN {
            Self::Good
        } else if score >= bounds::PERF_APPROVED_MIN {
            Self::Approved
        } else {
            Self::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Approved => "approved",
            Self::Critical => "critical",
        }
    }
}

/// Discretization of the dropout probability (0–1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropoutBand {
    High,
    Medium,
    Low,
}

impl DropoutBand {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= bounds::DROPOUT_HIGH_MIN {
            Self::High
        } else if probability >= bounds::DROPOUT_MEDIUM_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Banded scalar signal, carried across the pipeline as a cross-cutting
/// tone modifier for template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Performance(PerformanceBand),
    Dropout(DropoutBand),
}

impl Severity {
    pub fn domain(&self) -> Domain {
        match self {
            Self::Performance(_) => Domain::Performance,
            Self::Dropout(_) => Domain::Dropout,
        }
    }

    /// Outcome is already where the student wants it: approved or better,
    /// or low dropout risk.
    pub fn is_favorable(&self) -> bool {
        match self {
            Self::Performance(band) => !matches!(band, PerformanceBand::Critical),
            Self::Dropout(band) => matches!(band, DropoutBand::Low),
        }
    }

    /// Failing-grade territory. Only the performance domain escalates.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Performance(PerformanceBand::Critical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn influence_wire_roundtrip() {
        assert_eq!(Influence::parse("positiva"), Some(Influence::Positive));
        assert_eq!(Influence::parse("NEGATIVA"), Some(Influence::Negative));
        assert_eq!(Influence::parse("neutra"), None);
        assert_eq!(Influence::Positive.as_str(), "positiva");
    }

    #[test]
    fn feature_value_numeric_coercion() {
        assert_eq!(FeatureValue::parse(" 15 "), FeatureValue::Number(15.0));
        assert_eq!(FeatureValue::parse("7.5"), FeatureValue::Number(7.5));
        assert_eq!(FeatureValue::parse("85%"), FeatureValue::Number(85.0));
        assert_eq!(FeatureValue::parse("-3"), FeatureValue::Number(-3.0));
        assert_eq!(
            FeatureValue::parse("Yes"),
            FeatureValue::Text("Yes".to_string())
        );
    }

    #[test]
    fn feature_value_display_drops_trailing_zero() {
        assert_eq!(FeatureValue::Number(7.0).to_string(), "7");
        assert_eq!(FeatureValue::Number(7.5).to_string(), "7.5");
    }

    #[test]
    fn performance_bands_are_inclusive_at_lower_edge() {
        assert_eq!(PerformanceBand::from_score(90.0), PerformanceBand::Excellent);
        assert_eq!(PerformanceBand::from_score(89.9), PerformanceBand::Good);
        assert_eq!(PerformanceBand::from_score(70.0), PerformanceBand::Good);
        assert_eq!(PerformanceBand::from_score(60.0), PerformanceBand::Approved);
        assert_eq!(PerformanceBand::from_score(59.9), PerformanceBand::Critical);
    }

    #[test]
    fn dropout_bands_are_inclusive_at_lower_edge() {
        assert_eq!(DropoutBand::from_probability(0.7), DropoutBand::High);
        assert_eq!(DropoutBand::from_probability(0.69), DropoutBand::Medium);
        assert_eq!(DropoutBand::from_probability(0.4), DropoutBand::Medium);
        assert_eq!(DropoutBand::from_probability(0.39), DropoutBand::Low);
    }

    #[test]
    fn severity_tone_flags() {
        let critical = Severity::Performance(PerformanceBand::Critical);
        assert!(critical.is_critical());
        assert!(!critical.is_favorable());

        let approved = Severity::Performance(PerformanceBand::Approved);
        assert!(approved.is_favorable());
        assert!(!approved.is_critical());

        let high_risk = Severity::Dropout(DropoutBand::High);
        assert!(!high_risk.is_favorable());
        assert!(!high_risk.is_critical());

        let low_risk = Severity::Dropout(DropoutBand::Low);
        assert!(low_risk.is_favorable());
    }

    #[test]
    fn parsed_feature_serializes_impact_lowercase() {
        let f = ParsedFeature {
            feature: "Horas de Estudo".to_string(),
            value: FeatureValue::Number(15.0),
            influence: Influence::Negative,
            impact: Impact::High,
        };
        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains("\"impact\":\"high\""));
        assert!(json.contains("\"value\":15.0"));
    }
}
