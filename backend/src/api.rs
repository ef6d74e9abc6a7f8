//! Wire-level request and response types.
//!
//! These DTOs are the schema layer in front of the resolver: they enforce the
//! per-event constraints (kind is `open`/`close`, value within a day) during
//! deserialization and leave week completeness and alternation to
//! [`services`](crate::services).

use serde::{Deserialize, Serialize};

use crate::error::OpeningHoursResult;
use crate::models::{DaySchedule, RenderedSchedule};
use crate::services;

/// Request body: raw events per day name.
///
/// ```json
/// {"opening_hours": {"monday": [{"type": "open", "value": 36000}, ...], ...}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHoursRequest {
    pub opening_hours: DaySchedule,
}

/// Response body: one display string per day, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHoursResponse {
    pub opening_hours: RenderedSchedule,
}

/// Health probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub message: String,
}

impl HealthCheck {
    pub fn healthy() -> Self {
        Self {
            message: "Healthy".to_string(),
        }
    }
}

/// A payload that failed schema validation.
#[derive(Debug, thiserror::Error)]
#[error("invalid opening hours payload at '{path}': {source}")]
pub struct SchemaError {
    /// JSON path of the offending value, e.g. `opening_hours.monday[0].value`.
    pub path: String,
    #[source]
    pub source: serde_json::Error,
}

impl OpeningHoursRequest {
    pub fn new(opening_hours: DaySchedule) -> Self {
        Self { opening_hours }
    }

    /// Parse a JSON request body, reporting the path of the first invalid field.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let request =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|err| SchemaError {
                path: err.path().to_string(),
                source: err.into_inner(),
            })?;
        deserializer.end().map_err(|source| SchemaError {
            path: ".".to_string(),
            source,
        })?;
        Ok(request)
    }

    /// Resolve and render the requested schedule.
    pub fn humanize(&self) -> OpeningHoursResult<OpeningHoursResponse> {
        services::humanize(&self.opening_hours)
            .map(|opening_hours| OpeningHoursResponse { opening_hours })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpeningHoursError;
    use crate::models::Weekday;

    #[test]
    fn test_parse_partial_week() {
        let json = r#"{
            "opening_hours": {
                "monday": [{"type": "open", "value": 82000}],
                "tuesday": [
                    {"type": "open", "value": 82000},
                    {"type": "close", "value": 82001}
                ]
            }
        }"#;
        let request = OpeningHoursRequest::from_json_str(json).unwrap();
        assert_eq!(request.opening_hours.len(), 2);
        assert_eq!(request.opening_hours.get("tuesday").map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_parse_reports_path_of_bad_value() {
        let json = r#"{"opening_hours": {"monday": [{"type": "open", "value": 90000}]}}"#;
        let err = OpeningHoursRequest::from_json_str(json).unwrap_err();
        assert_eq!(err.path, "opening_hours.monday[0].value");
        assert!(err.to_string().contains("90000 is not between 0 and 86399"));
    }

    #[test]
    fn test_parse_reports_path_of_bad_kind() {
        let json = r#"{"opening_hours": {"friday": [{"type": "xxx", "value": 1}]}}"#;
        let err = OpeningHoursRequest::from_json_str(json).unwrap_err();
        assert_eq!(err.path, "opening_hours.friday[0].type");
    }

    #[test]
    fn test_parse_rejects_missing_root_field() {
        assert!(OpeningHoursRequest::from_json_str(r#"{"monday": []}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        let err = OpeningHoursRequest::from_json_str(r#"{"opening_hours": {}} extra"#).unwrap_err();
        assert_eq!(err.path, ".");
    }

    #[test]
    fn test_humanize_incomplete_week() {
        let request = OpeningHoursRequest::default();
        assert_eq!(request.humanize(), Err(OpeningHoursError::IncompleteWeek));
    }

    #[test]
    fn test_response_serializes_in_canonical_order() {
        let request = OpeningHoursRequest::new(DaySchedule::closed_week());
        let response = request.humanize().unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let expected_keys: Vec<String> = Weekday::ALL
            .iter()
            .map(|day| format!("\"{}\":\"Closed\"", day))
            .collect();
        assert_eq!(
            json,
            format!("{{\"opening_hours\":{{{}}}}}", expected_keys.join(","))
        );
    }

    #[test]
    fn test_health_check_body() {
        let json = serde_json::to_string(&HealthCheck::healthy()).unwrap();
        assert_eq!(json, r#"{"message":"Healthy"}"#);
    }
}
