/// A non-success response body as returned by the remote API.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ErrorResponse {
    /// Top-level human-readable summary (e.g. `"Invalid Form Body"`).
    #[serde(default)]
    pub message: String,
    /// Machine-readable error identifier (e.g. `50035`).
    #[serde(default)]
    pub code: i64,
    /// Nested per-field error tree, if the API sent one.
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Lenient extraction from a raw response body.
    ///
    /// Missing or mistyped fields fall back to defaults instead of failing:
    /// `message` becomes `""`, `code` becomes `0`. A `null` `errors` field is
    /// treated as absent.
    pub fn from_value(body: &serde_json::Value) -> Self {
        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let code = body.get("code").and_then(|v| v.as_i64()).unwrap_or(0);
        let errors = body.get("errors").filter(|v| !v.is_null()).cloned();
        Self {
            message,
            code,
            errors,
        }
    }
}

/// One concrete problem reported for a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FieldError {
    /// Symbolic reason, e.g. `"BASE_TYPE_REQUIRED"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl FieldError {
    /// `"CODE: message"`, or just the message when no code is present.
    /// Surrounding whitespace is trimmed.
    pub fn render(&self) -> String {
        match self.code.as_deref() {
            Some(code) => format!("{code}: {}", self.message).trim().to_string(),
            None => self.message.trim().to_string(),
        }
    }
}
