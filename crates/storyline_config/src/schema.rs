//! Structural validation of raw configuration documents.

use serde_json::{Map, Value};
use storyline_error::{SchemaError, SchemaErrorKind};

pub(crate) const PROMPT_MAPPING: &str = "agent_prompt_mapping";
pub(crate) const MODEL_MAPPING: &str = "agent_model_mapping";
pub(crate) const PROMPTS_DIR: &str = "default_prompts_dir";
pub(crate) const TEMPLATES_DIR: &str = "default_templates_dir";

/// Checks that `value` carries every required field with the right type.
///
/// Unknown top-level fields are ignored. Mapping values must be non-empty
/// strings; directory fields may be empty (meaning the working directory).
pub(crate) fn check_document(value: &Value) -> Result<(), SchemaError> {
    let root = value
        .as_object()
        .ok_or_else(|| SchemaError::new(SchemaErrorKind::NotAnObject(json_type(value).into())))?;

    for field in [PROMPT_MAPPING, MODEL_MAPPING] {
        check_mapping(root, field)?;
    }
    for field in [PROMPTS_DIR, TEMPLATES_DIR] {
        let entry = required(root, field)?;
        if !entry.is_string() {
            return Err(wrong_type(field, "a string", entry));
        }
    }
    Ok(())
}

fn check_mapping(root: &Map<String, Value>, field: &str) -> Result<(), SchemaError> {
    let entry = required(root, field)?;
    let mapping = entry
        .as_object()
        .ok_or_else(|| wrong_type(field, "an object of strings", entry))?;

    for (stage, value) in mapping {
        match value.as_str() {
            Some(text) if !text.trim().is_empty() => {}
            Some(_) => {
                return Err(SchemaError::new(SchemaErrorKind::WrongType {
                    field: format!("{}.{}", field, stage),
                    expected: "a non-empty string".to_string(),
                    found: "an empty string".to_string(),
                }));
            }
            None => return Err(wrong_type(&format!("{}.{}", field, stage), "a string", value)),
        }
    }
    Ok(())
}

fn required<'a>(root: &'a Map<String, Value>, field: &str) -> Result<&'a Value, SchemaError> {
    root.get(field)
        .ok_or_else(|| SchemaError::new(SchemaErrorKind::MissingField(field.to_string())))
}

#[track_caller]
fn wrong_type(field: &str, expected: &str, found: &Value) -> SchemaError {
    SchemaError::new(SchemaErrorKind::WrongType {
        field: field.to_string(),
        expected: expected.to_string(),
        found: json_type(found).to_string(),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
