//! Agent profile records
//!
//! An agent profile describes one marketing/operations function (mission,
//! tasks, KPIs, ...), not a running process. Profiles live in the in-session
//! [`roster::Roster`] and are edited field-by-field through
//! [`Roster::update`](roster::Roster::update).

pub mod roster;
pub mod seed;

use lazy_regex::regex_is_match;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single agent profile.
///
/// Field order here is the wire order: JSON export serializes fields exactly
/// as declared, camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    /// Display name
    pub name: String,

    /// Short unique identifier within the roster (e.g. "SCRIBE")
    pub codename: String,

    pub mission: String,
    pub target_audience: String,
    pub value_proposition: String,

    pub core_tasks: Vec<String>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub data_sources: Vec<String>,
    pub kpis: Vec<String>,
    pub guardrails: Vec<String>,

    /// Optional implementation notes, absent by default
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub example_prompts: Vec<String>,
}

/// A record field fails a basic shape check. Never fatal: the store rejects
/// the write and the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("'{0}' is not a valid codename (expected SCREAMING-CAPS like SCRIBE)")]
    MalformedCodename(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' expects a {expected} value")]
    WrongKind { field: String, expected: &'static str },
}

/// What shape of value a profile field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    OptionalText,
    List,
}

/// A caller-supplied value for a single field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl AgentProfile {
    /// The kind of value a field accepts, by its wire (camelCase) name.
    pub fn field_kind(field: &str) -> Option<FieldKind> {
        match field {
            "name" | "codename" | "mission" | "targetAudience" | "valueProposition" => {
                Some(FieldKind::Text)
            }
            "notes" => Some(FieldKind::OptionalText),
            "coreTasks" | "inputs" | "outputs" | "dataSources" | "kpis" | "guardrails"
            | "examplePrompts" => Some(FieldKind::List),
            _ => None,
        }
    }

    /// Shape check for a whole record, applied when a record enters the roster.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        validate_codename(&self.codename)?;
        Ok(())
    }

    /// Apply one field write. All-or-nothing: validation happens before any
    /// assignment, so a rejected write leaves the record untouched.
    pub(crate) fn apply(&mut self, field: &str, value: FieldValue) -> Result<(), ValidationError> {
        match Self::field_kind(field) {
            None => Err(ValidationError::UnknownField(field.to_string())),
            Some(FieldKind::Text) => {
                let text = expect_text(field, value)?;
                match field {
                    "name" => {
                        if text.trim().is_empty() {
                            return Err(ValidationError::EmptyField("name"));
                        }
                        self.name = text;
                    }
                    "codename" => {
                        validate_codename(&text)?;
                        self.codename = text;
                    }
                    "mission" => self.mission = text,
                    "targetAudience" => self.target_audience = text,
                    "valueProposition" => self.value_proposition = text,
                    _ => unreachable!("field_kind covered '{field}'"),
                }
                Ok(())
            }
            Some(FieldKind::OptionalText) => {
                let text = expect_text(field, value)?;
                self.notes = if text.trim().is_empty() { None } else { Some(text) };
                Ok(())
            }
            Some(FieldKind::List) => {
                let items = expect_list(field, value)?;
                // Blank entries are dropped before storing, so lists may end
                // up empty after an edit.
                let items: Vec<String> =
                    items.into_iter().filter(|item| !item.trim().is_empty()).collect();
                match field {
                    "coreTasks" => self.core_tasks = items,
                    "inputs" => self.inputs = items,
                    "outputs" => self.outputs = items,
                    "dataSources" => self.data_sources = items,
                    "kpis" => self.kpis = items,
                    "guardrails" => self.guardrails = items,
                    "examplePrompts" => self.example_prompts = items,
                    _ => unreachable!("field_kind covered '{field}'"),
                }
                Ok(())
            }
        }
    }
}

/// Per-agent status board entry (state label, progress fraction, next action).
#[derive(Debug, Clone, Serialize)]
pub struct AgentStatus {
    pub state: String,
    pub progress: f32,
    pub next_action: String,
}

fn validate_codename(codename: &str) -> Result<(), ValidationError> {
    if codename.is_empty() {
        return Err(ValidationError::EmptyField("codename"));
    }
    if !regex_is_match!(r"^[A-Z][A-Z0-9_-]*$", codename) {
        return Err(ValidationError::MalformedCodename(codename.to_string()));
    }
    Ok(())
}

fn expect_text(field: &str, value: FieldValue) -> Result<String, ValidationError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        FieldValue::List(_) => Err(ValidationError::WrongKind {
            field: field.to_string(),
            expected: "text",
        }),
    }
}

fn expect_list(field: &str, value: FieldValue) -> Result<Vec<String>, ValidationError> {
    match value {
        FieldValue::List(items) => Ok(items),
        FieldValue::Text(_) => Err(ValidationError::WrongKind {
            field: field.to_string(),
            expected: "list",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AgentProfile {
        seed::default_agents().remove(0)
    }

    #[test]
    fn test_field_kind_covers_wire_names() {
        for field in [
            "name",
            "codename",
            "mission",
            "targetAudience",
            "valueProposition",
            "coreTasks",
            "inputs",
            "outputs",
            "dataSources",
            "kpis",
            "guardrails",
            "notes",
            "examplePrompts",
        ] {
            assert!(AgentProfile::field_kind(field).is_some(), "no kind for {field}");
        }
        assert_eq!(AgentProfile::field_kind("target_audience"), None);
    }

    #[test]
    fn test_apply_rejects_empty_name() {
        let mut p = profile();
        let before = p.clone();
        let err = p.apply("name", FieldValue::Text("   ".to_string())).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("name"));
        assert_eq!(p, before);
    }

    #[test]
    fn test_apply_rejects_malformed_codename() {
        let mut p = profile();
        let err = p.apply("codename", FieldValue::Text("scribe".to_string())).unwrap_err();
        assert_eq!(err, ValidationError::MalformedCodename("scribe".to_string()));
    }

    #[test]
    fn test_apply_filters_blank_list_entries() {
        let mut p = profile();
        p.apply(
            "kpis",
            FieldValue::List(vec!["".to_string(), "  ".to_string(), "Open rate".to_string()]),
        )
        .unwrap();
        assert_eq!(p.kpis, vec!["Open rate".to_string()]);
    }

    #[test]
    fn test_apply_blank_notes_clears_to_none() {
        let mut p = profile();
        p.apply("notes", FieldValue::Text("remember the brand voice".to_string())).unwrap();
        assert_eq!(p.notes.as_deref(), Some("remember the brand voice"));
        p.apply("notes", FieldValue::Text("".to_string())).unwrap();
        assert_eq!(p.notes, None);
    }

    #[test]
    fn test_apply_wrong_kind() {
        let mut p = profile();
        let err = p.apply("kpis", FieldValue::Text("Open rate".to_string())).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongKind {
                field: "kpis".to_string(),
                expected: "list",
            }
        );
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let json = serde_json::to_string(&profile()).unwrap();
        assert!(json.contains("\"targetAudience\""));
        assert!(json.contains("\"examplePrompts\""));
        assert!(!json.contains("\"target_audience\""));
    }
}
