//! Schema-driven validation of untyped submission payloads.
//!
//! A [`PayloadFields`] reader walks a JSON object field by field, recording an
//! issue for every field that fails instead of stopping at the first one.
//! Callers read each declared field, then call [`PayloadFields::finish`] to
//! obtain either success or the complete list of issues.
//!
//! Unknown keys are ignored. Only string-typed fields exist in this schema, so
//! the checks are presence, primitive type, and non-emptiness.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Error;

/// Machine-readable reason attached to each [`FieldIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A required field was absent or `null`.
    MissingField,
    /// The field was present with a non-string JSON type.
    InvalidType,
    /// A required field was an empty or whitespace-only string.
    EmptyField,
    /// The payload as a whole could not be read as a JSON object.
    InvalidPayload,
}

/// Name of a payload field as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    /// Declare a field name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Borrow the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    field: String,
    code: IssueCode,
    message: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    fn missing(field: FieldName) -> Self {
        let name = field.as_str();
        Self::new(name, IssueCode::MissingField, format!("{name} is required"))
    }

    fn invalid_type(field: FieldName, found: &Value) -> Self {
        let name = field.as_str();
        Self::new(
            name,
            IssueCode::InvalidType,
            format!("{name} must be a string, received {}", json_type_name(found)),
        )
    }

    fn empty(field: FieldName) -> Self {
        let name = field.as_str();
        Self::new(name, IssueCode::EmptyField, format!("{name} must not be empty"))
    }

    /// Field the issue refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Reason code.
    #[must_use]
    pub fn code(&self) -> IssueCode {
        self.code
    }

    /// Human-readable explanation.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Non-empty collection of issues produced by a failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldIssue>);

impl ValidationErrors {
    /// Report a payload that is not a JSON object, or not JSON at all.
    ///
    /// # Examples
    /// ```
    /// use intake::domain::{IssueCode, ValidationErrors};
    ///
    /// let errors = ValidationErrors::invalid_payload("body", "expected a JSON object");
    /// assert_eq!(errors.issues()[0].code(), IssueCode::InvalidPayload);
    /// ```
    pub fn invalid_payload(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldIssue::new(
            field,
            IssueCode::InvalidPayload,
            message,
        )])
    }

    /// Issues in schema declaration order.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.0
    }

    /// Whether any issue refers to `field`.
    #[must_use]
    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|issue| issue.field == field)
    }

    /// Convert into an [`Error`] carrying the issues as `details`.
    pub fn into_error(self, message: impl Into<String>) -> Error {
        let details = serde_json::to_value(&self.0).unwrap_or_else(|_| Value::Array(Vec::new()));
        Error::invalid_request(message).with_details(details)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(FieldIssue::field).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulating reader over a submission payload.
///
/// # Examples
/// ```
/// use intake::domain::{FieldName, PayloadFields};
/// use serde_json::json;
///
/// const NAME: FieldName = FieldName::new("fullName");
/// const PHONE: FieldName = FieldName::new("phone");
///
/// let payload = json!({ "fullName": "Ada" });
/// let mut fields = PayloadFields::new(&payload).expect("object payload");
/// let name = fields.required(NAME);
/// let phone = fields.optional(PHONE);
/// fields.finish().expect("valid payload");
/// assert_eq!(name, "Ada");
/// assert!(phone.is_none());
/// ```
pub struct PayloadFields<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<FieldIssue>,
}

impl<'a> PayloadFields<'a> {
    /// Start reading `payload`, which must be a JSON object.
    ///
    /// # Errors
    /// Returns [`IssueCode::InvalidPayload`] when `payload` is not an object.
    pub fn new(payload: &'a Value) -> Result<Self, ValidationErrors> {
        match payload {
            Value::Object(object) => Ok(Self {
                object,
                issues: Vec::new(),
            }),
            other => Err(ValidationErrors::invalid_payload(
                "body",
                format!("expected a JSON object, received {}", json_type_name(other)),
            )),
        }
    }

    /// Read a required, non-empty string field.
    ///
    /// On failure an issue is recorded and an empty string is returned; the
    /// value must not be used unless [`Self::finish`] succeeds.
    pub fn required(&mut self, field: FieldName) -> String {
        match self.object.get(field.as_str()) {
            None | Some(Value::Null) => self.issues.push(FieldIssue::missing(field)),
            Some(Value::String(text)) if text.trim().is_empty() => {
                self.issues.push(FieldIssue::empty(field));
            }
            Some(Value::String(text)) => return text.clone(),
            Some(other) => self.issues.push(FieldIssue::invalid_type(field, other)),
        }
        String::new()
    }

    /// Read an optional string field.
    ///
    /// An absent key or an empty string reads as `None`. Any non-string value,
    /// `null` included, records an issue.
    pub fn optional(&mut self, field: FieldName) -> Option<String> {
        match self.object.get(field.as_str()) {
            None => None,
            Some(Value::String(text)) if text.is_empty() => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                self.issues.push(FieldIssue::invalid_type(field, other));
                None
            }
        }
    }

    /// Complete validation.
    ///
    /// # Errors
    /// Returns every recorded issue when at least one field failed.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.issues))
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
