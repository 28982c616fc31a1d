//! Grammatical agreement for generated Portuguese sentences.

/// Possessive article per canonical feature name (gender and number of
/// the head noun). Features missing from the table take the masculine
/// singular default.
const ARTICLES: &[(&str, &str)] = &[
    ("Horas de Estudo", "suas"),
    ("Horas de Sono", "suas"),
    ("Notas Anteriores", "suas"),
    ("Faltas Escolares", "suas"),
    ("Atividades Extracurriculares", "suas"),
    ("Sessões de Tutoria", "suas"),
    ("Participações em Discussões", "suas"),
    ("Deficiências de Aprendizagem", "suas"),
    ("Frequência às Aulas", "sua"),
    ("Participação em Aula", "sua"),
    ("Distância de Casa", "sua"),
    ("Atividade Física", "sua"),
    ("Renda Familiar", "sua"),
    ("Qualidade do Professor", "sua"),
    ("Influência dos Colegas", "sua"),
    ("Satisfação dos Pais", "sua"),
    ("Materiais Acessados", "seus"),
    ("Avisos Visualizados", "seus"),
];

/// Possessive article ("seu"/"sua"/"seus"/"suas") agreeing with the
/// feature name.
pub fn article(feature: &str) -> &'static str {
    ARTICLES
        .iter()
        .find(|(name, _)| *name == feature)
        .map(|(_, art)| *art)
        .unwrap_or("seu")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agreement_covers_gender_and_number() {
        assert_eq!(article("Horas de Estudo"), "suas");
        assert_eq!(article("Frequência às Aulas"), "sua");
        assert_eq!(article("Materiais Acessados"), "seus");
        assert_eq!(article("Nível de Motivação"), "seu");
    }

    #[test]
    fn unknown_feature_defaults_to_masculine_singular() {
        assert_eq!(article("Commute Time"), "seu");
    }
}
