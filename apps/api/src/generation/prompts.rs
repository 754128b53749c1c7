// LLM prompt text for plant profile generation.
// The wording is French because the catalogue's source language is French;
// the requested profile covers all four languages regardless.

use crate::generation::profile::{LANGUAGES, PROFILE_FIELDS};

/// Sampling temperature for every profile request.
pub const TEMPERATURE: f32 = 0.7;

/// System prompt — botanical expert persona, pure JSON with the fixed 4 × 9 shape.
pub const SYSTEM_PROMPT: &str = "Tu es un expert botaniste. \
    Réponds uniquement avec un objet JSON contenant les clés 'fr', 'en', 'es', 'de'. \
    Chaque langue contient un objet avec les clés : \
    'type', 'description', 'origine', 'lumière', 'arrosage', 'température', 'floraison', 'conseils', 'sol'. \
    Pas d'explication, pas de texte autour, juste un JSON pur.";

/// User prompt template. Replace `{name}`, `{fields}` and `{languages}` before sending.
const USER_PROMPT_TEMPLATE: &str = r#"Génère une fiche pour la plante "{name}" :
- {fields}

En 4 langues ({languages}).

Ne mets que l'objet JSON pur."#;

/// Builds the user turn for `name`. The name is interpolated verbatim.
pub fn user_prompt(name: &str) -> String {
    USER_PROMPT_TEMPLATE
        .replace("{fields}", &PROFILE_FIELDS.join(", "))
        .replace("{languages}", &LANGUAGES.join(", "))
        // last, so a name containing a placeholder is not expanded
        .replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_every_language_and_field() {
        for lang in LANGUAGES {
            assert!(SYSTEM_PROMPT.contains(&format!("'{lang}'")), "missing {lang}");
        }
        for field in PROFILE_FIELDS {
            assert!(SYSTEM_PROMPT.contains(&format!("'{field}'")), "missing {field}");
        }
    }

    #[test]
    fn test_user_prompt_interpolates_name_and_lists() {
        let prompt = user_prompt("Monstera deliciosa");
        assert!(prompt.starts_with(r#"Génère une fiche pour la plante "Monstera deliciosa" :"#));
        assert!(prompt.contains(
            "- type, description, origine, lumière, arrosage, température, floraison, conseils, sol"
        ));
        assert!(prompt.contains("En 4 langues (fr, en, es, de)."));
        assert!(prompt.ends_with("Ne mets que l'objet JSON pur."));
    }

    #[test]
    fn test_user_prompt_does_not_expand_placeholders_in_name() {
        let prompt = user_prompt("{fields}");
        assert!(prompt.contains(r#"la plante "{fields}" :"#));
    }

    #[test]
    fn test_user_prompt_passes_empty_name_through() {
        assert!(user_prompt("").contains(r#"la plante "" :"#));
    }
}
