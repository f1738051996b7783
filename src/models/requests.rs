use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Problems turning a raw JSON document into a [`ClassificationRequest`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("input must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing required fields")]
    MissingFields,

    #[error("{0}")]
    InvalidValue(String),
}

/// Request to classify a single person
///
/// A zero measurement counts as missing, the same as an absent key. Negative
/// values pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_non_zero"))]
pub struct ClassificationRequest {
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Age in years
    pub age: i64,
    #[validate(length(min = 1))]
    pub gender: String,
}

fn validate_non_zero(request: &ClassificationRequest) -> Result<(), ValidationError> {
    if request.height == 0.0 || request.weight == 0.0 || request.age == 0 {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl ClassificationRequest {
    pub fn new(height: f64, weight: f64, age: i64, gender: impl Into<String>) -> Self {
        Self {
            height,
            weight,
            age,
            gender: gender.into(),
        }
    }

    /// Build a request from loosely typed JSON
    ///
    /// Present values are coerced first, so a malformed value is reported
    /// even when another field is missing. Numbers may arrive as JSON
    /// numbers, booleans or numeric strings; a fractional age is truncated.
    pub fn from_json(input: &Value) -> Result<Self, RequestError> {
        let object = input
            .as_object()
            .ok_or_else(|| RequestError::NotAnObject(json_type_name(input)))?;

        let height = present(object, "height").map(|v| coerce_real("height", v)).transpose()?;
        let weight = present(object, "weight").map(|v| coerce_real("weight", v)).transpose()?;
        let age = present(object, "age").map(|v| coerce_integer("age", v)).transpose()?;
        let gender = present(object, "gender").map(coerce_gender).transpose()?.flatten();

        let (Some(height), Some(weight), Some(age), Some(gender)) = (height, weight, age, gender) else {
            return Err(RequestError::MissingFields);
        };

        let request = Self::new(height, weight, age, gender);
        request.validate().map_err(|errors| {
            tracing::debug!("Request failed validation: {:?}", errors);
            RequestError::MissingFields
        })?;

        Ok(request)
    }
}

fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

fn coerce_real(field: &str, value: &Value) -> Result<f64, RequestError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(RequestError::InvalidValue(format!(
            "{} must be a finite number, got {}",
            field, value
        ))),
    }
}

// i64 bounds as f64; the upper one is 2^63 and itself out of range
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn coerce_integer(field: &str, value: &Value) -> Result<i64, RequestError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .map(f64::trunc)
                .filter(|x| (I64_LOWER..I64_UPPER).contains(x))
                .map(|x| x as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        RequestError::InvalidValue(format!("{} must be an integer, got {}", field, value))
    })
}

/// Falsy non-string values count as missing; anything else must be a string
fn coerce_gender(value: &Value) -> Result<Option<String>, RequestError> {
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        other if is_falsy(other) => Ok(None),
        other => Err(RequestError::InvalidValue(format!(
            "gender must be a string, got {}",
            other
        ))),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
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
    use serde_json::json;

    #[test]
    fn test_typed_input() {
        let request = ClassificationRequest::from_json(
            &json!({"height": 170, "weight": 70.5, "age": 30, "gender": "male"}),
        )
        .unwrap();
        assert_eq!(request, ClassificationRequest::new(170.0, 70.5, 30, "male"));
    }

    #[test]
    fn test_string_numbers_are_coerced() {
        let request = ClassificationRequest::from_json(
            &json!({"height": " 165.5", "weight": "60", "age": "42", "gender": "female"}),
        )
        .unwrap();
        assert_eq!(request.height, 165.5);
        assert_eq!(request.weight, 60.0);
        assert_eq!(request.age, 42);
    }

    #[test]
    fn test_fractional_age_truncates() {
        let request = ClassificationRequest::from_json(
            &json!({"height": 170, "weight": 70, "age": 30.9, "gender": "male"}),
        )
        .unwrap();
        assert_eq!(request.age, 30);
    }

    #[test]
    fn test_out_of_range_age_is_invalid() {
        for age in [json!(1e30), json!(-1e30), json!(u64::MAX)] {
            let input = json!({"height": 170, "weight": 70, "age": age, "gender": "male"});
            assert!(
                matches!(
                    ClassificationRequest::from_json(&input),
                    Err(RequestError::InvalidValue(msg)) if msg.contains("age")
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn test_each_missing_field() {
        for key in ["height", "weight", "age", "gender"] {
            let mut input = json!({"height": 170, "weight": 70, "age": 30, "gender": "male"});
            input.as_object_mut().unwrap().remove(key);
            assert_eq!(
                ClassificationRequest::from_json(&input),
                Err(RequestError::MissingFields),
                "dropping {key}"
            );
        }
    }

    #[test]
    fn test_falsy_values_are_missing() {
        let cases = [
            json!({"height": 0, "weight": 70, "age": 30, "gender": "male"}),
            json!({"height": 170, "weight": 0.0, "age": 30, "gender": "male"}),
            json!({"height": 170, "weight": 70, "age": 0, "gender": "male"}),
            json!({"height": 170, "weight": 70, "age": 30, "gender": ""}),
            json!({"height": 170, "weight": 70, "age": 30, "gender": null}),
            json!({"height": false, "weight": 70, "age": 30, "gender": "male"}),
            json!({"height": 170, "weight": 70, "age": 30, "gender": []}),
        ];
        for input in cases {
            assert_eq!(
                ClassificationRequest::from_json(&input),
                Err(RequestError::MissingFields),
                "{input}"
            );
        }
    }

    #[test]
    fn test_negative_values_pass() {
        let request = ClassificationRequest::from_json(
            &json!({"height": -170, "weight": 70, "age": 30, "gender": "male"}),
        )
        .unwrap();
        assert_eq!(request.height, -170.0);
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            json!({"height": "tall", "weight": 70, "age": 30, "gender": "male"}),
            json!({"height": 170, "weight": [70], "age": 30, "gender": "male"}),
            json!({"height": 170, "weight": 70, "age": "30.5", "gender": "male"}),
            json!({"height": "inf", "weight": 70, "age": 30, "gender": "male"}),
            json!({"height": 170, "weight": 70, "age": 30, "gender": 5}),
        ];
        for input in cases {
            assert!(
                matches!(
                    ClassificationRequest::from_json(&input),
                    Err(RequestError::InvalidValue(_))
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn test_invalid_value_wins_over_missing() {
        let result = ClassificationRequest::from_json(&json!({"height": "abc"}));
        assert!(matches!(result, Err(RequestError::InvalidValue(msg)) if msg.contains("height")));
    }

    #[test]
    fn test_non_object_input() {
        assert_eq!(
            ClassificationRequest::from_json(&json!([170, 70, 30, "male"])),
            Err(RequestError::NotAnObject("an array"))
        );
    }
}
