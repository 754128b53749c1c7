//! LocalizedPlantProfile shape: the language keys and per-language fields the
//! model is asked to produce, plus an opt-in structural check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Language codes every profile is keyed by, in prompt order.
pub const LANGUAGES: [&str; 4] = ["fr", "en", "es", "de"];

/// Fields of each per-language record, in prompt order.
pub const PROFILE_FIELDS: [&str; 9] = [
    "type",
    "description",
    "origine",
    "lumière",
    "arrosage",
    "température",
    "floraison",
    "conseils",
    "sol",
];

/// Body of `POST /generate`. The name is forwarded to the model untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantRequest {
    pub name: String,
}

/// Checks that `value` is a full profile: an object holding every language key,
/// each an object holding every field as a string. Extra keys are allowed.
///
/// Returns a description of the first offending path.
pub fn validate_profile(value: &Value) -> Result<(), String> {
    let root = value
        .as_object()
        .ok_or_else(|| format!("profile must be an object, got {}", kind(value)))?;

    for lang in LANGUAGES {
        let record = root
            .get(lang)
            .ok_or_else(|| format!("missing language '{lang}'"))?;
        let record = record
            .as_object()
            .ok_or_else(|| format!("'{lang}' must be an object, got {}", kind(record)))?;

        for field in PROFILE_FIELDS {
            match record.get(field) {
                None => return Err(format!("missing field '{lang}.{field}'")),
                Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(format!(
                        "'{lang}.{field}' must be a string, got {}",
                        kind(other)
                    ))
                }
            }
        }
    }

    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::full_profile;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_profile_passes() {
        assert!(validate_profile(&full_profile()).is_ok());
    }

    #[test]
    fn test_extra_keys_are_tolerated() {
        let mut profile = full_profile();
        profile["it"] = json!({"type": "Pianta"});
        profile["fr"]["nom"] = json!("Monstera");
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_missing_language_is_reported() {
        let mut profile = full_profile();
        profile.as_object_mut().unwrap().remove("es");
        assert_eq!(
            validate_profile(&profile).unwrap_err(),
            "missing language 'es'"
        );
    }

    #[test]
    fn test_missing_accented_field_is_reported() {
        let mut profile = full_profile();
        profile["de"].as_object_mut().unwrap().remove("température");
        assert_eq!(
            validate_profile(&profile).unwrap_err(),
            "missing field 'de.température'"
        );
    }

    #[test]
    fn test_non_string_field_is_reported() {
        let mut profile = full_profile();
        profile["en"]["conseils"] = json!(["water weekly", "wipe leaves"]);
        assert_eq!(
            validate_profile(&profile).unwrap_err(),
            "'en.conseils' must be a string, got array"
        );
    }

    #[test]
    fn test_non_object_root_is_reported() {
        let err = validate_profile(&json!([1, 2])).unwrap_err();
        assert_eq!(err, "profile must be an object, got array");
    }

    #[test]
    fn test_plant_request_deserializes() {
        let req: PlantRequest = serde_json::from_str(r#"{"name": "Monstera deliciosa"}"#).unwrap();
        assert_eq!(req.name, "Monstera deliciosa");
    }
}
