//! The settings document written by the template engine.
//!
//! The document is a flat-ish JSON object at the project root. Sprout reads
//! two option flags out of it and rewrites it once in a canonical layout
//! (sorted keys, two-space indentation, trailing newline) so that the
//! generated project's JSON formatter does not flag it on the first commit.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Default file name of the settings document, relative to the project root.
pub const SETTINGS_FILE_NAME: &str = ".cookiecutter.json";

/// Key holding the "enforce checks on creation" option.
pub const ENFORCE_CHECKS_KEY: &str = "enforce_checks_on_creation";

/// Key holding the "initialize git" option.
pub const INITIALIZE_GIT_KEY: &str = "initialize_git";

const TRUE_WORDS: &[&str] = &["1", "true", "t", "yes", "y", "on"];
const FALSE_WORDS: &[&str] = &["", "0", "false", "f", "no", "n", "off"];

/// Parsed settings document.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDocument {
    entries: Map<String, Value>,
}

impl SettingsDocument {
    /// Parse a settings document from its JSON text.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DomainError::MalformedSettings {
                reason: e.to_string(),
            })?;

        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(DomainError::SettingsNotObject {
                found: json_kind(&other),
            }),
        }
    }

    /// Render the canonical on-disk form.
    ///
    /// Keys are sorted at every depth, indentation is two spaces and the
    /// output always ends with a single newline. Numbers keep the digits they
    /// were written with and non-ASCII text stays raw UTF-8. Parsing the
    /// result and normalizing again yields identical bytes.
    pub fn normalized(&self) -> String {
        let sorted = sort_keys(Value::Object(self.entries.clone()));
        // Serializing a `Value` cannot fail: every map key is already a string.
        let mut text = serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| "{}".to_owned());
        text.push('\n');
        text
    }

    /// Read a yes/no option, falling back to `default` when it is absent or null.
    pub fn flag(&self, key: &str, default: bool) -> Result<bool, DomainError> {
        let Some(value) = self.entries.get(key) else {
            return Ok(default);
        };

        let invalid = || DomainError::InvalidFlag {
            key: key.to_owned(),
            value: value.to_string(),
        };

        match value {
            Value::Null => Ok(default),
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
            Value::String(s) => {
                let word = s.trim().to_ascii_lowercase();
                if TRUE_WORDS.contains(&word.as_str()) {
                    Ok(true)
                } else if FALSE_WORDS.contains(&word.as_str()) {
                    Ok(false)
                } else {
                    Err(invalid())
                }
            }
            Value::Array(_) | Value::Object(_) => Err(invalid()),
        }
    }

    /// String metadata such as `project_name` or `author`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two options the setup sequencer acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupFlags {
    /// Fail the whole setup when verification fails, and install commit hooks.
    pub enforce_checks: bool,
    /// Create a repository and an initial commit.
    pub initialize_git: bool,
}

impl Default for SetupFlags {
    fn default() -> Self {
        Self {
            enforce_checks: false,
            initialize_git: true,
        }
    }
}

impl SetupFlags {
    /// Extract the flags, applying the defaults for absent keys.
    pub fn from_settings(settings: &SettingsDocument) -> Result<Self, DomainError> {
        let defaults = Self::default();
        Ok(Self {
            enforce_checks: settings.flag(ENFORCE_CHECKS_KEY, defaults.enforce_checks)?,
            initialize_git: settings.flag(INITIALIZE_GIT_KEY, defaults.initialize_git)?,
        })
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> SettingsDocument {
        SettingsDocument::parse(text).unwrap()
    }

    #[test]
    fn missing_flags_use_defaults() {
        let flags = SetupFlags::from_settings(&doc(r#"{"project_name": "demo"}"#)).unwrap();
        assert!(flags.initialize_git);
        assert!(!flags.enforce_checks);
    }

    #[test]
    fn null_flag_uses_default() {
        let d = doc(r#"{"initialize_git": null}"#);
        assert!(d.flag(INITIALIZE_GIT_KEY, true).unwrap());
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let flags = SetupFlags::from_settings(&doc(
            r#"{"initialize_git": false, "enforce_checks_on_creation": true}"#,
        ))
        .unwrap();
        assert!(!flags.initialize_git);
        assert!(flags.enforce_checks);
    }

    #[test]
    fn string_flags_accept_yes_no_words() {
        let d = doc(r#"{"a": "Yes", "b": "n", "c": "off", "d": "TRUE", "e": ""}"#);
        assert!(d.flag("a", false).unwrap());
        assert!(!d.flag("b", true).unwrap());
        assert!(!d.flag("c", true).unwrap());
        assert!(d.flag("d", false).unwrap());
        assert!(!d.flag("e", true).unwrap());
    }

    #[test]
    fn numeric_flags_are_truthy_when_non_zero() {
        let d = doc(r#"{"a": 1, "b": 0, "c": 0.5}"#);
        assert!(d.flag("a", false).unwrap());
        assert!(!d.flag("b", true).unwrap());
        assert!(d.flag("c", false).unwrap());
    }

    #[test]
    fn unrecognised_string_flag_is_rejected() {
        let d = doc(r#"{"initialize_git": "maybe"}"#);
        assert!(matches!(
            d.flag(INITIALIZE_GIT_KEY, true),
            Err(DomainError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn container_flag_is_rejected() {
        let d = doc(r#"{"initialize_git": [true]}"#);
        assert!(d.flag(INITIALIZE_GIT_KEY, true).is_err());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            SettingsDocument::parse("{not json"),
            Err(DomainError::MalformedSettings { .. })
        ));
    }

    #[test]
    fn non_object_root_is_reported() {
        assert_eq!(
            SettingsDocument::parse("[1, 2]"),
            Err(DomainError::SettingsNotObject { found: "an array" })
        );
    }

    #[test]
    fn normalized_sorts_keys_and_indents_two_spaces() {
        let d = doc(r#"{"zeta": 1,    "alpha": {"y": true, "x": [3, {"b": 1, "a": 2}]}}"#);
        let expected = "{\n  \"alpha\": {\n    \"x\": [\n      3,\n      {\n        \"a\": 2,\n        \"b\": 1\n      }\n    ],\n    \"y\": true\n  },\n  \"zeta\": 1\n}\n";
        assert_eq!(d.normalized(), expected);
    }

    #[test]
    fn normalizing_twice_is_byte_identical() {
        let original = "{\n    \"project_name\": \"demo\",\n    \"author\": \"Ada\",\n    \"initialize_git\": true\n}";
        let once = doc(original).normalized();
        let twice = doc(&once).normalized();
        assert_eq!(once, twice);
        assert!(once.ends_with("}\n"));
    }

    #[test]
    fn metadata_is_readable() {
        let d = doc(r#"{"project_name": "demo", "copyright_year": 2024}"#);
        assert_eq!(d.get_str("project_name"), Some("demo"));
        assert_eq!(d.get_str("copyright_year"), None);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn normalized_keeps_numbers_exactly_as_written() {
        let d = doc(r#"{"seed": 123456789012345678901234567890, "ratio": 0.1000000000000000055511151231257827, "initialize_git": 1}"#);
        let out = d.normalized();
        assert!(out.contains("\"seed\": 123456789012345678901234567890"), "{out}");
        assert!(out.contains("\"ratio\": 0.1000000000000000055511151231257827"), "{out}");
        assert!(d.flag("initialize_git", false).unwrap());
    }

    #[test]
    fn normalized_writes_non_ascii_as_raw_utf8() {
        let d = doc(r#"{"author": "Jos\u00e9 \u00d1\u00fa\u00f1ez", "city": "Zürich"}"#);
        let out = d.normalized();
        assert!(out.contains("\"author\": \"José Ñúñez\""), "{out}");
        assert!(out.contains("\"city\": \"Zürich\""), "{out}");
        assert!(!out.contains("\\u"), "{out}");
    }
}
