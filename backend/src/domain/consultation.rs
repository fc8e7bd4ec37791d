//! Consultation bookings: the free consultation request form.
//!
//! Only `fullName` and `email` are required. `phone`, `message`, and
//! `preferredTime` may be omitted or sent as `""`; either way they are stored
//! as `None` and always serialise as explicit `null` keys. Sending `null` for
//! them is a type error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::{FieldName, PayloadFields, ValidationErrors};
use super::RecordId;

const FULL_NAME: FieldName = FieldName::new("fullName");
const EMAIL: FieldName = FieldName::new("email");
const PHONE: FieldName = FieldName::new("phone");
const MESSAGE: FieldName = FieldName::new("message");
const PREFERRED_TIME: FieldName = FieldName::new("preferredTime");

/// Validated consultation creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConsultation {
    /// Requester's name as entered.
    pub full_name: String,
    /// Contact address. The format is not checked.
    pub email: String,
    /// Contact number, if given.
    pub phone: Option<String>,
    /// Free-form note for the advisor, if given.
    pub message: Option<String>,
    /// Preferred call slot as free text, if given.
    pub preferred_time: Option<String>,
}

impl NewConsultation {
    /// Parse and validate an untyped payload.
    ///
    /// Optional fields that are absent or empty strings become `None`.
    ///
    /// # Errors
    /// Returns every failing field: missing or empty required fields, and
    /// non-string values (including `null` on optional fields) for any
    /// declared field.
    ///
    /// # Examples
    /// ```
    /// use intake::domain::NewConsultation;
    /// use serde_json::json;
    ///
    /// let draft = NewConsultation::from_payload(&json!({
    ///     "fullName": "Ada",
    ///     "email": "ada@x.com",
    /// }))
    /// .expect("valid consultation");
    /// assert!(draft.phone.is_none());
    /// ```
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = PayloadFields::new(payload)?;
        let draft = Self {
            full_name: fields.required(FULL_NAME),
            email: fields.required(EMAIL),
            phone: fields.optional(PHONE),
            message: fields.optional(MESSAGE),
            preferred_time: fields.optional(PREFERRED_TIME),
        };
        fields.finish()?;
        Ok(draft)
    }
}

/// Stored consultation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    id: RecordId,
    full_name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
    preferred_time: Option<String>,
    created_at: DateTime<Utc>,
}

impl Consultation {
    /// Materialise a record from a validated draft.
    ///
    /// Empty optional strings are normalised to `None` so drafts built by hand
    /// follow the same rule as parsed ones.
    #[must_use]
    pub fn new(id: RecordId, draft: NewConsultation, created_at: DateTime<Utc>) -> Self {
        let NewConsultation {
            full_name,
            email,
            phone,
            message,
            preferred_time,
        } = draft;
        Self {
            id,
            full_name,
            email,
            phone: phone.filter(|value| !value.is_empty()),
            message: message.filter(|value| !value.is_empty()),
            preferred_time: preferred_time.filter(|value| !value.is_empty()),
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn preferred_time(&self) -> Option<&str> {
        self.preferred_time.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
