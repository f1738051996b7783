use crate::cli::output::to_json_line;
use crate::core::{analyze, Classifier};
use crate::models::{ClassificationRequest, ErrorResponse, RequestError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failures handled at the command boundary; each exits with status 1
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid arguments. Expected JSON string with height, weight, age, gender")]
    ArgumentCount,

    #[error("Invalid JSON input")]
    JsonParse(#[source] serde_json::Error),

    #[error("Missing required fields: height, weight, age, gender")]
    MissingFields,

    #[error("Invalid input values: {0}")]
    InvalidValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<RequestError> for CommandError {
    fn from(value: RequestError) -> Self {
        match value {
            RequestError::MissingFields => CommandError::MissingFields,
            RequestError::InvalidValue(detail) => CommandError::InvalidValue(detail),
            other @ RequestError::NotAnObject(_) => CommandError::Unexpected(other.to_string()),
        }
    }
}

/// What a command prints and how the process exits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub body: String,
    pub exit_code: u8,
}

impl CommandOutput {
    fn render<T: Serialize>(value: &T) -> Self {
        match to_json_line(value) {
            Ok(body) => Self { body, exit_code: 0 },
            Err(e) => Self::failure(&CommandError::Unexpected(e.to_string())),
        }
    }

    fn failure(error: &CommandError) -> Self {
        tracing::debug!("Command failed: {:?}", error);
        let body = to_json_line(&ErrorResponse::new(error.to_string()))
            .unwrap_or_else(|_| r#"{"error": "Unexpected error"}"#.to_string());
        Self { body, exit_code: 1 }
    }
}

/// Turn the positional arguments (program name excluded) into a request
pub fn parse_request(args: &[String]) -> Result<ClassificationRequest, CommandError> {
    let [input] = args else {
        return Err(CommandError::ArgumentCount);
    };

    let value: Value = serde_json::from_str(input).map_err(CommandError::JsonParse)?;
    Ok(ClassificationRequest::from_json(&value)?)
}

/// `bmi-classifier '<json>'`
///
/// Model failures inside classification still exit 0 with an error object.
pub fn run_classify(args: &[String], classifier: &Classifier) -> CommandOutput {
    let request = match parse_request(args) {
        Ok(request) => request,
        Err(e) => return CommandOutput::failure(&e),
    };

    CommandOutput::render(&classifier.classify(&request))
}

/// `bmi-analysis '<json>'`
pub fn run_analysis(args: &[String], classifier: &Classifier) -> CommandOutput {
    let request = match parse_request(args) {
        Ok(request) => request,
        Err(e) => return CommandOutput::failure(&e),
    };

    match analyze(classifier, &request) {
        Ok(analysis) => CommandOutput::render(&analysis),
        Err(e) => CommandOutput::failure(&CommandError::InvalidValue(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FileModelLoader;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn offline_classifier() -> Classifier {
        Classifier::new(FileModelLoader::new("does/not/exist.json"))
    }

    #[test]
    fn test_argument_count() {
        let expected = r#"{"error": "Invalid arguments. Expected JSON string with height, weight, age, gender"}"#;
        for argv in [args(&[]), args(&["{}", "{}"])] {
            let output = run_classify(&argv, &offline_classifier());
            assert_eq!(output.body, expected);
            assert_eq!(output.exit_code, 1);
        }
    }

    #[test]
    fn test_invalid_json() {
        let output = run_classify(&args(&["height=170"]), &offline_classifier());
        assert_eq!(output.body, r#"{"error": "Invalid JSON input"}"#);
        assert_eq!(output.exit_code, 1);
    }

    #[test]
    fn test_missing_fields() {
        let output = run_classify(&args(&[r#"{"height": 170, "weight": 70, "age": 30}"#]), &offline_classifier());
        assert_eq!(output.body, r#"{"error": "Missing required fields: height, weight, age, gender"}"#);
        assert_eq!(output.exit_code, 1);
    }

    #[test]
    fn test_invalid_values() {
        let output = run_classify(
            &args(&[r#"{"height": "tall", "weight": 70, "age": 30, "gender": "male"}"#]),
            &offline_classifier(),
        );
        assert!(output.body.starts_with(r#"{"error": "Invalid input values: "#));
        assert_eq!(output.exit_code, 1);
    }

    #[test]
    fn test_non_object_is_unexpected() {
        let output = run_classify(&args(&["[170, 70, 30]"]), &offline_classifier());
        assert!(output.body.starts_with(r#"{"error": "Unexpected error: "#));
        assert_eq!(output.exit_code, 1);
    }

    #[test]
    fn test_model_load_failure_exits_zero() {
        let output = run_classify(
            &args(&[r#"{"height": 170, "weight": 70, "age": 30, "gender": "male"}"#]),
            &offline_classifier(),
        );
        assert_eq!(output.body, r#"{"error": "Failed to load BMI classifier model"}"#);
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_analysis_rejects_negative_height() {
        let output = run_analysis(
            &args(&[r#"{"height": -170, "weight": 70, "age": 30, "gender": "male"}"#]),
            &offline_classifier(),
        );
        assert_eq!(output.body, r#"{"error": "Invalid input values: Invalid height or weight values"}"#);
        assert_eq!(output.exit_code, 1);
    }
}
