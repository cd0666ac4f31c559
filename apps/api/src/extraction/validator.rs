//! Schema Validator: classifies a sanitized reply against the closed reply schema.
//!
//! Two shapes are accepted: the `{"code":"NO_INSIGHT"}` sentinel, or a full
//! evaluation object. Validation is all-or-nothing: the first violation at any
//! depth rejects the whole payload. Nothing is coerced or defaulted.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::extraction::models::{
    Evaluation360Entry, EvaluationResult, MentoringEntry, ReferenceEntry, SelfAssessmentEntry,
};

pub const NO_INSIGHT_CODE: &str = "NO_INSIGHT";
const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

/// First schema violation found, addressed by JSON path (e.g. `selfAssessment[0].rating`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct SchemaViolation {
    pub path: String,
    pub reason: String,
}

impl SchemaViolation {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoInsight,
    Success(EvaluationResult),
    /// Not well-formed JSON; carries the parser message.
    ParseError(String),
    SchemaError(SchemaViolation),
}

pub fn validate(candidate: &str) -> Outcome {
    let value: Value = match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(e) => return Outcome::ParseError(e.to_string()),
    };

    if is_no_insight(&value) {
        return Outcome::NoInsight;
    }

    match evaluation_result(&value) {
        Ok(result) => Outcome::Success(result),
        Err(violation) => Outcome::SchemaError(violation),
    }
}

/// An object whose `code` discriminator is exactly the string `"NO_INSIGHT"`.
fn is_no_insight(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|obj| obj.get("code"))
        .and_then(Value::as_str)
        == Some(NO_INSIGHT_CODE)
}

fn evaluation_result(value: &Value) -> Result<EvaluationResult, SchemaViolation> {
    let obj = object(value, "$")?;
    Ok(EvaluationResult {
        self_assessment: entries(obj, "selfAssessment", self_assessment_entry)?,
        evaluation360: entries(obj, "evaluation360", evaluation360_entry)?,
        mentoring: mentoring(obj)?,
        references: entries(obj, "references", reference_entry)?,
    })
}

fn self_assessment_entry(value: &Value, path: &str) -> Result<SelfAssessmentEntry, SchemaViolation> {
    let obj = object(value, path)?;
    Ok(SelfAssessmentEntry {
        pillar_id: non_empty_string(obj, "pillarId", path)?,
        criteria_id: non_empty_string(obj, "criteriaId", path)?,
        rating: rating(obj, path)?,
        justification: non_empty_string(obj, "justification", path)?,
    })
}

fn evaluation360_entry(value: &Value, path: &str) -> Result<Evaluation360Entry, SchemaViolation> {
    let obj = object(value, path)?;
    Ok(Evaluation360Entry {
        collaborator_id: non_empty_string(obj, "collaboratorId", path)?,
        rating: rating(obj, path)?,
        strengths: string(obj, "strengths", path)?,
        improvements: string(obj, "improvements", path)?,
    })
}

fn mentoring_entry(value: &Value, path: &str) -> Result<MentoringEntry, SchemaViolation> {
    let obj = object(value, path)?;
    Ok(MentoringEntry {
        rating: rating(obj, path)?,
        justification: non_empty_string(obj, "justification", path)?,
    })
}

fn reference_entry(value: &Value, path: &str) -> Result<ReferenceEntry, SchemaViolation> {
    let obj = object(value, path)?;
    Ok(ReferenceEntry {
        collaborator_id: non_empty_string(obj, "collaboratorId", path)?,
        justification: non_empty_string(obj, "justification", path)?,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Field predicates
// ────────────────────────────────────────────────────────────────────────────

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaViolation> {
    value
        .as_object()
        .ok_or_else(|| SchemaViolation::new(path, format!("expected an object, got {}", kind(value))))
}

/// A required sequence where every element satisfies `parse`.
fn entries<T>(
    obj: &Map<String, Value>,
    key: &str,
    parse: fn(&Value, &str) -> Result<T, SchemaViolation>,
) -> Result<Vec<T>, SchemaViolation> {
    let items = match obj.get(key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SchemaViolation::new(
                key,
                format!("expected an array, got {}", kind(other)),
            ))
        }
        None => return Err(SchemaViolation::new(key, "is required")),
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse(item, &format!("{key}[{i}]")))
        .collect()
}

/// Required key; `null` is the only non-object value accepted.
fn mentoring(obj: &Map<String, Value>) -> Result<Option<MentoringEntry>, SchemaViolation> {
    match obj.get("mentoring") {
        Some(Value::Null) => Ok(None),
        Some(value) => mentoring_entry(value, "mentoring").map(Some),
        None => Err(SchemaViolation::new("mentoring", "is required")),
    }
}

fn string(obj: &Map<String, Value>, key: &str, path: &str) -> Result<String, SchemaViolation> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(SchemaViolation::new(
            format!("{path}.{key}"),
            format!("expected a string, got {}", kind(other)),
        )),
        None => Err(SchemaViolation::new(format!("{path}.{key}"), "is required")),
    }
}

fn non_empty_string(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<String, SchemaViolation> {
    let s = string(obj, key, path)?;
    if s.trim().is_empty() {
        return Err(SchemaViolation::new(format!("{path}.{key}"), "must not be blank"));
    }
    Ok(s)
}

/// Bare integer in 1..=5. Strings, floats (even `4.0`) and booleans are rejected.
fn rating(obj: &Map<String, Value>, path: &str) -> Result<u8, SchemaViolation> {
    let field = format!("{path}.rating");
    match obj.get("rating") {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(r) if (MIN_RATING..=MAX_RATING).contains(&r) => Ok(r as u8),
            Some(r) => Err(SchemaViolation::new(
                field,
                format!("{r} is outside {MIN_RATING}..={MAX_RATING}"),
            )),
            None if n.is_u64() => Err(SchemaViolation::new(
                field,
                format!("{n} is outside {MIN_RATING}..={MAX_RATING}"),
            )),
            None => Err(SchemaViolation::new(field, format!("expected an integer, got {n}"))),
        },
        Some(other) => Err(SchemaViolation::new(
            field,
            format!("expected an integer, got {}", kind(other)),
        )),
        None => Err(SchemaViolation::new(field, "is required")),
    }
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
    use super::*;
    use crate::extraction::sanitizer::sanitize;
    use proptest::prelude::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "selfAssessment": [
                {"pillarId": "12", "criteriaId": "gente", "rating": 4, "justification": "Apoiei o time."}
            ],
            "evaluation360": [
                {"collaboratorId": "colab-001", "rating": 5, "strengths": "Criativo", "improvements": ""}
            ],
            "mentoring": {"rating": 5, "justification": "Miguel me orienta bem."},
            "references": [
                {"collaboratorId": "colab-002", "justification": "Muito técnico."}
            ]
        })
    }

    fn validate_value(value: &Value) -> Outcome {
        validate(&value.to_string())
    }

    fn assert_schema_error(value: &Value, expected_path: &str) {
        match validate_value(value) {
            Outcome::SchemaError(v) => assert_eq!(v.path, expected_path, "{v}"),
            other => panic!("expected SchemaError at {expected_path}, got {other:?}"),
        }
    }

    #[test]
    fn test_full_payload_succeeds() {
        let Outcome::Success(result) = validate_value(&full_payload()) else {
            panic!("expected success");
        };
        assert_eq!(result.self_assessment[0].criteria_id, "gente");
        assert_eq!(result.evaluation360[0].improvements, "");
        assert_eq!(result.mentoring.unwrap().rating, 5);
        assert_eq!(result.references[0].collaborator_id, "colab-002");
    }

    #[test]
    fn test_empty_sections_and_null_mentoring_succeed() {
        let outcome = validate(r#"{"selfAssessment":[],"evaluation360":[],"mentoring":null,"references":[]}"#);
        assert_eq!(outcome, Outcome::Success(EvaluationResult::default()));
    }

    #[test]
    fn test_no_insight() {
        assert_eq!(validate(r#"{"code":"NO_INSIGHT"}"#), Outcome::NoInsight);
    }

    #[test]
    fn test_no_insight_ignores_extra_keys() {
        assert_eq!(validate(r#"{"code":"NO_INSIGHT","note":"nothing"}"#), Outcome::NoInsight);
    }

    #[test]
    fn test_no_insight_code_must_match_exactly() {
        assert!(matches!(validate(r#"{"code":"no_insight"}"#), Outcome::SchemaError(_)));
        assert!(matches!(validate(r#"{"code":" NO_INSIGHT"}"#), Outcome::SchemaError(_)));
        assert!(matches!(validate(r#"{"code":["NO_INSIGHT"]}"#), Outcome::SchemaError(_)));
        assert!(matches!(validate(r#""NO_INSIGHT""#), Outcome::SchemaError(_)));
    }

    #[test]
    fn test_unparseable_text_is_parse_error() {
        assert!(matches!(validate("not json"), Outcome::ParseError(_)));
        assert!(matches!(validate("{\"selfAssessment\": ["), Outcome::ParseError(_)));
        assert!(matches!(validate(""), Outcome::ParseError(_)));
        assert!(matches!(validate("Here: {\"code\":\"NO_INSIGHT\"}"), Outcome::ParseError(_)));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert_schema_error(&json!([]), "$");
        assert_schema_error(&json!(null), "$");
    }

    #[test]
    fn test_missing_section_rejected() {
        for key in ["selfAssessment", "evaluation360", "mentoring", "references"] {
            let mut payload = full_payload();
            payload.as_object_mut().unwrap().remove(key);
            assert_schema_error(&payload, key);
        }
    }

    #[test]
    fn test_null_array_rejected() {
        let mut payload = full_payload();
        payload["references"] = Value::Null;
        assert_schema_error(&payload, "references");
    }

    #[test]
    fn test_null_element_rejected() {
        let mut payload = full_payload();
        payload["evaluation360"] = json!([null]);
        assert_schema_error(&payload, "evaluation360[0]");
    }

    #[test]
    fn test_string_rating_rejected() {
        let mut payload = full_payload();
        payload["selfAssessment"][0]["rating"] = json!("4");
        assert_schema_error(&payload, "selfAssessment[0].rating");
    }

    #[test]
    fn test_float_rating_rejected() {
        let mut payload = full_payload();
        payload["evaluation360"][0]["rating"] = json!(4.0);
        assert_schema_error(&payload, "evaluation360[0].rating");
    }

    #[test]
    fn test_boolean_rating_rejected() {
        let mut payload = full_payload();
        payload["mentoring"]["rating"] = json!(true);
        assert_schema_error(&payload, "mentoring.rating");
    }

    #[test]
    fn test_rating_bounds() {
        for bad in [json!(0), json!(6), json!(-1), json!(u64::MAX)] {
            let mut payload = full_payload();
            payload["selfAssessment"][0]["rating"] = bad;
            assert_schema_error(&payload, "selfAssessment[0].rating");
        }
        for good in [1, 5] {
            let mut payload = full_payload();
            payload["selfAssessment"][0]["rating"] = json!(good);
            assert!(matches!(validate_value(&payload), Outcome::Success(_)));
        }
    }

    #[test]
    fn test_blank_justification_rejected() {
        let mut payload = full_payload();
        payload["selfAssessment"][0]["justification"] = json!("   ");
        assert_schema_error(&payload, "selfAssessment[0].justification");

        let mut payload = full_payload();
        payload["mentoring"]["justification"] = json!("");
        assert_schema_error(&payload, "mentoring.justification");
    }

    #[test]
    fn test_null_justification_rejected() {
        let mut payload = full_payload();
        payload["references"][0]["justification"] = Value::Null;
        assert_schema_error(&payload, "references[0].justification");
    }

    #[test]
    fn test_evaluation360_texts_must_be_present() {
        let mut payload = full_payload();
        payload["evaluation360"][0].as_object_mut().unwrap().remove("strengths");
        assert_schema_error(&payload, "evaluation360[0].strengths");

        let mut payload = full_payload();
        payload["evaluation360"][0]["improvements"] = Value::Null;
        assert_schema_error(&payload, "evaluation360[0].improvements");
    }

    #[test]
    fn test_blank_identifiers_rejected() {
        let mut payload = full_payload();
        payload["selfAssessment"][0]["pillarId"] = json!("");
        assert_schema_error(&payload, "selfAssessment[0].pillarId");

        let mut payload = full_payload();
        payload["references"][0]["collaboratorId"] = json!(1);
        assert_schema_error(&payload, "references[0].collaboratorId");
    }

    #[test]
    fn test_mentoring_must_be_object_or_null() {
        let mut payload = full_payload();
        payload["mentoring"] = json!([]);
        assert_schema_error(&payload, "mentoring");
    }

    #[test]
    fn test_one_bad_item_rejects_whole_payload() {
        let mut payload = full_payload();
        payload["selfAssessment"]
            .as_array_mut()
            .unwrap()
            .push(json!({"pillarId": "13", "criteriaId": "pensamento", "rating": 9, "justification": "x"}));
        assert_schema_error(&payload, "selfAssessment[1].rating");
    }

    #[test]
    fn test_identifiers_not_checked_against_catalog() {
        let mut payload = full_payload();
        payload["selfAssessment"][0]["pillarId"] = json!("unknown-pillar");
        assert!(matches!(validate_value(&payload), Outcome::Success(_)));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut payload = full_payload();
        payload["code"] = json!("SUCCESS");
        payload["selfAssessment"][0]["extra"] = json!(true);
        assert!(matches!(validate_value(&payload), Outcome::Success(_)));
    }

    // ────────────────────────────────────────────────────────────────────────
    // Properties
    // ────────────────────────────────────────────────────────────────────────

    fn text() -> impl Strategy<Value = String> {
        "[A-Za-zÀ-ú0-9 .,!?\"]{0,24}"
    }

    fn non_blank() -> impl Strategy<Value = String> {
        "[A-Za-z0-9-]{1,12}"
    }

    fn valid_rating() -> impl Strategy<Value = u8> {
        1u8..=5
    }

    fn evaluation_result_strategy() -> impl Strategy<Value = EvaluationResult> {
        let self_assessment = (non_blank(), non_blank(), valid_rating(), non_blank()).prop_map(
            |(pillar_id, criteria_id, rating, justification)| SelfAssessmentEntry {
                pillar_id,
                criteria_id,
                rating,
                justification,
            },
        );
        let evaluation360 = (non_blank(), valid_rating(), text(), text()).prop_map(
            |(collaborator_id, rating, strengths, improvements)| Evaluation360Entry {
                collaborator_id,
                rating,
                strengths,
                improvements,
            },
        );
        let mentoring = proptest::option::of(
            (valid_rating(), non_blank())
                .prop_map(|(rating, justification)| MentoringEntry { rating, justification }),
        );
        let reference = (non_blank(), non_blank()).prop_map(|(collaborator_id, justification)| {
            ReferenceEntry {
                collaborator_id,
                justification,
            }
        });
        (
            prop::collection::vec(self_assessment, 0..4),
            prop::collection::vec(evaluation360, 0..4),
            mentoring,
            prop::collection::vec(reference, 0..4),
        )
            .prop_map(|(self_assessment, evaluation360, mentoring, references)| {
                EvaluationResult {
                    self_assessment,
                    evaluation360,
                    mentoring,
                    references,
                }
            })
    }

    proptest! {
        #[test]
        fn test_valid_results_round_trip(result in evaluation_result_strategy()) {
            let serialized = serde_json::to_string(&result).unwrap();
            let fenced = format!("```json\n{serialized}\n```");
            prop_assert_eq!(validate(sanitize(&serialized)), Outcome::Success(result.clone()));
            prop_assert_eq!(validate(sanitize(&fenced)), Outcome::Success(result));
        }

        #[test]
        fn test_out_of_range_rating_rejects_payload(
            result in evaluation_result_strategy(),
            bad in prop_oneof![-100i64..=0, 6i64..=100],
        ) {
            let mut payload = serde_json::to_value(&result).unwrap();
            payload["mentoring"] = json!({"rating": bad, "justification": "ok"});
            prop_assert!(matches!(validate_value(&payload), Outcome::SchemaError(_)));
        }

        #[test]
        fn test_non_json_never_classifies(raw in "[g-mo-su-z][a-zA-Z ,.]{0,32}") {
            prop_assert!(matches!(validate(&raw), Outcome::ParseError(_)));
        }
    }
}
