//! Declarative sentiment rule tables.
//!
//! Polarity is per feature, not a generic yes/no heuristic: "Yes" is bad
//! news for learning disabilities and good news for extracurricular
//! activities. Adding a feature means adding a row here.

use crate::types::Influence;

/// Canonical name of the one feature whose numeric value overrides the
/// reported sign (attendance threshold rule).
pub const ATTENDANCE_FEATURE: &str = "Frequência às Aulas";

/// Keyword rule for one categorical feature. Positive keywords are
/// checked before negative ones; both lists hold lowercase substrings.
pub struct CategoricalRule {
    pub feature: &'static str,
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

impl CategoricalRule {
    /// Direction for a lowercased value, if any keyword matches.
    pub fn apply(&self, value: &str) -> Option<Influence> {
        if self.positive.iter().any(|kw| value.contains(kw)) {
            return Some(Influence::Positive);
        }
        if self.negative.iter().any(|kw| value.contains(kw)) {
            return Some(Influence::Negative);
        }
        None
    }
}

pub const CATEGORICAL_RULES: &[CategoricalRule] = &[
    CategoricalRule {
        feature: "Deficiências de Aprendizagem",
        positive: &["no"],
        negative: &["yes"],
    },
    CategoricalRule {
        feature: "Atividades Extracurriculares",
        positive: &["yes"],
        negative: &["no"],
    },
    CategoricalRule {
        feature: "Acesso à Internet",
        positive: &["yes"],
        negative: &["no"],
    },
    CategoricalRule {
        feature: "Pais Responderam Pesquisa",
        positive: &["yes"],
        negative: &["no"],
    },
    CategoricalRule {
        feature: "Satisfação dos Pais",
        positive: &["good"],
        negative: &["bad"],
    },
    CategoricalRule {
        feature: "Acesso a Recursos",
        positive: &["good", "average"],
        negative: &["poor"],
    },
    CategoricalRule {
        feature: "Qualidade do Professor",
        positive: &["good", "average"],
        negative: &["poor"],
    },
    CategoricalRule {
        feature: "Nível Educacional dos Pais",
        positive: &["bachelor's", "master's", "some college"],
        negative: &["none"],
    },
    CategoricalRule {
        feature: "Envolvimento dos Pais",
        positive: &["high"],
        negative: &["low"],
    },
    CategoricalRule {
        feature: "Nível de Motivação",
        positive: &["high"],
        negative: &["low"],
    },
    CategoricalRule {
        feature: "Renda Familiar",
        positive: &["high"],
        negative: &["low"],
    },
    CategoricalRule {
        feature: "Atividade Física",
        positive: &["high"],
        negative: &["low"],
    },
    CategoricalRule {
        feature: "Influência dos Colegas",
        positive: &["positive"],
        negative: &["negative"],
    },
    CategoricalRule {
        feature: "Faltas Escolares",
        positive: &["under-7", "under 7"],
        negative: &["above-7", "above 7"],
    },
    CategoricalRule {
        feature: "Distância de Casa",
        positive: &["near"],
        negative: &["far"],
    },
];

/// Generic keyword fallback, applied only when no feature-specific rule
/// produced a direction.
pub const GENERIC_POSITIVE: &[&str] =
    &["good", "high", "positive", "near", "bachelor's", "master's", "some college"];
pub const GENERIC_NEGATIVE: &[&str] =
    &["poor", "low", "negative", "far", "none", "bad", "above-7"];
