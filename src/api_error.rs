use crate::error::Error;
use crate::flatten::flatten_value;
use crate::types::ErrorResponse;

/// Fixed name identifying this error family.
pub const API_ERROR_NAME: &str = "APIError";

/// A non-success API response, normalized into one readable error.
///
/// The message is the response's top-level message followed by one line per
/// field-level problem, e.g.
///
/// ```text
/// Invalid Form Body
/// username: TOO_SHORT: Must be 2-32 characters.
/// embeds[0].title: Too long.
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[error("{message}")]
pub struct ApiError {
    name: &'static str,
    message: String,
    code: i64,
    #[serde(skip)]
    details: Vec<String>,
}

impl ApiError {
    pub fn from_response(response: &ErrorResponse) -> Self {
        let details = response
            .errors
            .as_ref()
            .map(flatten_value)
            .unwrap_or_default();

        let message = if details.is_empty() {
            response.message.clone()
        } else {
            format!("{}\n{}", response.message, details.join("\n"))
        };

        Self {
            name: API_ERROR_NAME,
            message,
            code: response.code,
            details,
        }
    }

    /// Build from an already-parsed response body. Never fails; see
    /// [`ErrorResponse::from_value`] for how malformed bodies degrade.
    pub fn from_value(body: &serde_json::Value) -> Self {
        Self::from_response(&ErrorResponse::from_value(body))
    }

    /// Parse a raw response body, then build as [`ApiError::from_value`] does.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    /// Flattened field-level lines, without the top-level message.
    pub fn details(&self) -> &[String] {
        &self.details
    }
}

impl From<ErrorResponse> for ApiError {
    fn from(response: ErrorResponse) -> Self {
        Self::from_response(&response)
    }
}
