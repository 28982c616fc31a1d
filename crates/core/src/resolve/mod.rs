//! Feature name resolution: arbitrary upstream identifiers to one
//! canonical display name. Pure and total — unknown keys fall back to a
//! readable title-cased formatting instead of failing.

mod aliases;

use aliases::ALIASES;

/// Resolve a raw feature key to its canonical display name.
///
/// Lookup order: exact match against the alias table, then a
/// bidirectional substring scan in table order (handles prefixed keys
/// like `preprocessor__Hours_studied`), then the formatter fallback.
/// Empty input is returned unchanged.
pub fn resolve(raw_key: &str) -> String {
    if raw_key.is_empty() {
        return String::new();
    }

    let normalized = normalize(raw_key);

    for (alias, canonical) in ALIASES {
        if *alias == normalized {
            return (*canonical).to_string();
        }
    }

    for (alias, canonical) in ALIASES {
        if normalized.contains(alias) || alias.contains(normalized.as_str()) {
            return (*canonical).to_string();
        }
    }

    prettify(raw_key)
}

/// Lowercase, with spaces, underscores and hyphens stripped.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .to_lowercase()
}

/// Formatter fallback: split on separators and case transitions,
/// title-case each token, join with spaces.
fn prettify(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 8);
    let mut prev: Option<char> = None;
    for c in raw.chars() {
        if matches!(c, '_' | '-') {
            spaced.push(' ');
            prev = Some(' ');
            continue;
        }
        if c.is_uppercase() {
            if let Some(p) = prev {
                if p.is_lowercase() || p.is_numeric() {
                    spaced.push(' ');
                }
            }
        }
        spaced.push(c);
        prev = Some(c);
    }

    spaced
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_on_known_spellings() {
        assert_eq!(resolve("hours_studied"), "Horas de Estudo");
        assert_eq!(resolve("HoursStudied"), "Horas de Estudo");
        assert_eq!(resolve("attendance_rate"), "Frequência às Aulas");
        assert_eq!(resolve("raisedhands"), "Participação em Aula");
    }

    #[test]
    fn canonical_names_are_fixed_points() {
        for (_, canonical) in ALIASES {
            assert_eq!(resolve(canonical), *canonical);
        }
    }

    #[test]
    fn substring_match_handles_pipeline_prefixes() {
        assert_eq!(resolve("preprocessor__Hours_studied"), "Horas de Estudo");
        assert_eq!(resolve("Hours_studied__0"), "Horas de Estudo");
    }

    #[test]
    fn unknown_keys_get_title_cased() {
        assert_eq!(resolve("commute_time"), "Commute Time");
        assert_eq!(resolve("examAnxiety"), "Exam Anxiety");
    }

    #[test]
    fn empty_key_returned_unchanged() {
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn resolve_is_pure() {
        assert_eq!(resolve("study_hours"), resolve("study_hours"));
    }
}
