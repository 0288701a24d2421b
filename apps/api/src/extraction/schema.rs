//! Candidate Record Schema — the validated shape of extracted résumé data.
//!
//! The LLM response is untrusted: it becomes a `CandidateRecord` only by
//! passing `validate`. Anything that fails keeps its raw payload attached so
//! an operator can diagnose model drift without re-running extraction.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Field types the extraction service is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    OptionalText,
    NonNegativeNumber,
    TextList,
}

impl FieldType {
    pub fn prompt_label(&self) -> &'static str {
        match self {
            FieldType::Text => "string",
            FieldType::OptionalText => "string or null",
            FieldType::NonNegativeNumber => "non-negative number",
            FieldType::TextList => "array of strings",
        }
    }
}

/// One field of the candidate schema: name, type, and the documentation line
/// rendered into the extraction prompt.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub doc: &'static str,
}

/// The declarative candidate schema. Prompt rendering and validation both
/// consume this table; edit it in one place only.
pub const CANDIDATE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        ty: FieldType::Text,
        required: true,
        doc: "Full name of the candidate.",
    },
    FieldSpec {
        name: "email",
        ty: FieldType::Text,
        required: true,
        doc: "Primary email address.",
    },
    FieldSpec {
        name: "phone",
        ty: FieldType::OptionalText,
        required: false,
        doc: "Primary phone number, if available.",
    },
    FieldSpec {
        name: "total_years_experience",
        ty: FieldType::NonNegativeNumber,
        required: false,
        doc: "Total professional experience in years (e.g., 5.5). Default to 0.0 if not found.",
    },
    FieldSpec {
        name: "highest_degree",
        ty: FieldType::Text,
        required: false,
        doc: "The highest academic degree achieved (e.g., 'M.S. in CS', 'B.Tech in ECE').",
    },
    FieldSpec {
        name: "skills",
        ty: FieldType::TextList,
        required: true,
        doc: "A list of technical and soft skills.",
    },
];

/// Validated, immutable extraction output. Constructed only via `validate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub total_years_experience: f64,
    pub highest_degree: String,
    pub skills: Vec<String>,
}

/// A schema violation in the service response. Carries the full raw payload
/// for operator inspection.
#[derive(Debug, Clone, Error)]
#[error("validation failed at '{field}': {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
    pub raw_payload: Value,
}

impl ValidationError {
    fn new(field: &str, reason: impl Into<String>, raw: &Value) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
            raw_payload: raw.clone(),
        }
    }
}

/// Validates a raw JSON mapping from the extraction service into a
/// `CandidateRecord`.
///
/// Lenient where the pipeline favors completion over rejection:
/// `total_years_experience` and `highest_degree` degrade to defaults instead
/// of failing. Strict where downstream logic depends on shape: `name`,
/// `email`, and `skills` fail with a field path and reason.
pub fn validate(raw: &Value) -> Result<CandidateRecord, ValidationError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ValidationError::new("$", "response is not a JSON object", raw))?;

    let name = required_string(obj, "name", raw)?;
    let email = required_string(obj, "email", raw)?;
    let phone = optional_string(obj, "phone", raw)?;
    let total_years_experience = coerce_years(obj.get("total_years_experience"));
    let highest_degree = obj
        .get("highest_degree")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let skills = string_list(obj, "skills", raw)?;

    Ok(CandidateRecord {
        name,
        email,
        phone,
        total_years_experience,
        highest_degree,
        skills,
    })
}

fn required_string(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    raw: &Value,
) -> Result<String, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::new(field, "missing required field", raw)),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(ValidationError::new(field, "must be non-empty", raw))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::new(
            field,
            format!("expected string, got {}", type_name(other)),
            raw,
        )),
    }
}

fn optional_string(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    raw: &Value,
) -> Result<Option<String>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ValidationError::new(
            field,
            format!("expected string or null, got {}", type_name(other)),
            raw,
        )),
    }
}

/// Coerces the experience field to a non-negative f64.
/// Missing, unparseable, and negative values all default to 0.0 — the
/// pipeline completes on borderline LLM output rather than rejecting it.
fn coerce_years(value: Option<&Value>) -> f64 {
    let years = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if years.is_finite() && years > 0.0 {
        years
    } else {
        0.0
    }
}

fn string_list(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    raw: &Value,
) -> Result<Vec<String>, ValidationError> {
    let arr = match obj.get(field) {
        Some(Value::Array(arr)) => arr,
        None | Some(Value::Null) => {
            return Err(ValidationError::new(field, "missing required field", raw))
        }
        Some(other) => {
            return Err(ValidationError::new(
                field,
                format!("expected array of strings, got {}", type_name(other)),
                raw,
            ))
        }
    };

    arr.iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(ValidationError::new(
                &format!("{field}[{i}]"),
                format!("expected string, got {}", type_name(other)),
                raw,
            )),
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+1 555 0100",
            "total_years_experience": 6.0,
            "highest_degree": "M.S. in CS",
            "skills": ["Python", "AWS"]
        })
    }

    #[test]
    fn test_full_payload_round_trips() {
        let record = validate(&full_payload()).unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@x.com");
        assert_eq!(record.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(record.total_years_experience, 6.0);
        assert_eq!(record.highest_degree, "M.S. in CS");
        assert_eq!(record.skills, vec!["Python", "AWS"]);
    }

    #[test]
    fn test_missing_name_fails_with_field_path() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("name");
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.raw_payload, payload);
    }

    #[test]
    fn test_null_email_fails() {
        let mut payload = full_payload();
        payload["email"] = Value::Null;
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_empty_email_fails() {
        let mut payload = full_payload();
        payload["email"] = json!("  ");
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, "email");
        assert!(err.reason.contains("non-empty"));
    }

    #[test]
    fn test_non_string_name_fails() {
        let mut payload = full_payload();
        payload["name"] = json!(42);
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, "name");
        assert!(err.reason.contains("number"));
    }

    #[test]
    fn test_absent_phone_is_none_not_error() {
        let mut payload = full_payload();
        payload["phone"] = Value::Null;
        let record = validate(&payload).unwrap();
        assert_eq!(record.phone, None);
    }

    #[test]
    fn test_missing_experience_defaults_to_zero() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("total_years_experience");
        assert_eq!(validate(&payload).unwrap().total_years_experience, 0.0);
    }

    #[test]
    fn test_unparseable_experience_defaults_to_zero() {
        let mut payload = full_payload();
        payload["total_years_experience"] = json!("about five years");
        assert_eq!(validate(&payload).unwrap().total_years_experience, 0.0);
    }

    #[test]
    fn test_numeric_string_experience_is_coerced() {
        let mut payload = full_payload();
        payload["total_years_experience"] = json!("5.5");
        assert_eq!(validate(&payload).unwrap().total_years_experience, 5.5);
    }

    #[test]
    fn test_negative_experience_defaults_to_zero() {
        let mut payload = full_payload();
        payload["total_years_experience"] = json!(-3.0);
        assert_eq!(validate(&payload).unwrap().total_years_experience, 0.0);
    }

    #[test]
    fn test_missing_degree_defaults_to_empty() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("highest_degree");
        assert_eq!(validate(&payload).unwrap().highest_degree, "");
    }

    #[test]
    fn test_non_array_skills_fails() {
        let mut payload = full_payload();
        payload["skills"] = json!("Python, AWS");
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, "skills");
    }

    #[test]
    fn test_non_string_skill_element_fails_with_index() {
        let mut payload = full_payload();
        payload["skills"] = json!(["Python", 7]);
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, "skills[1]");
    }

    #[test]
    fn test_empty_skills_list_is_valid() {
        let mut payload = full_payload();
        payload["skills"] = json!([]);
        assert!(validate(&payload).unwrap().skills.is_empty());
    }

    #[test]
    fn test_non_object_payload_fails_at_root() {
        let err = validate(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.field, "$");
    }
}
