//! Enrollment submissions: the bootcamp sign-up form.
//!
//! [`NewEnrollment`] is the validated draft produced from a raw payload.
//! [`Enrollment`] is the stored, immutable record returned by the store.
//!
//! ## Wire format
//! ```json
//! {
//!   "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
//!   "fullName": "Ada",
//!   "email": "ada@x.com",
//!   "phone": "123",
//!   "country": "Ghana",
//!   "experience": "Complete Beginner",
//!   "paymentPlan": "full",
//!   "createdAt": "2026-10-19T09:00:00Z"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::{FieldName, PayloadFields, ValidationErrors};
use super::RecordId;

const FULL_NAME: FieldName = FieldName::new("fullName");
const EMAIL: FieldName = FieldName::new("email");
const PHONE: FieldName = FieldName::new("phone");
const COUNTRY: FieldName = FieldName::new("country");
const EXPERIENCE: FieldName = FieldName::new("experience");
const PAYMENT_PLAN: FieldName = FieldName::new("paymentPlan");

/// Validated enrollment creation request.
///
/// Every field is a non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    /// Applicant's name as entered.
    pub full_name: String,
    /// Contact address. The format is not checked.
    pub email: String,
    /// Contact number.
    pub phone: String,
    /// Country of residence.
    pub country: String,
    /// Self-reported programming experience, free text.
    pub experience: String,
    /// Chosen payment plan label, free text.
    pub payment_plan: String,
}

impl NewEnrollment {
    /// Parse and validate an untyped payload.
    ///
    /// # Errors
    /// Returns every missing, empty, or non-string required field.
    ///
    /// # Examples
    /// ```
    /// use intake::domain::NewEnrollment;
    /// use serde_json::json;
    ///
    /// let draft = NewEnrollment::from_payload(&json!({
    ///     "fullName": "Ada",
    ///     "email": "ada@x.com",
    ///     "phone": "123",
    ///     "country": "Ghana",
    ///     "experience": "Complete Beginner",
    ///     "paymentPlan": "full",
    /// }))
    /// .expect("valid enrollment");
    /// assert_eq!(draft.full_name, "Ada");
    /// ```
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = PayloadFields::new(payload)?;
        let draft = Self {
            full_name: fields.required(FULL_NAME),
            email: fields.required(EMAIL),
            phone: fields.required(PHONE),
            country: fields.required(COUNTRY),
            experience: fields.required(EXPERIENCE),
            payment_plan: fields.required(PAYMENT_PLAN),
        };
        fields.finish()?;
        Ok(draft)
    }
}

/// Stored enrollment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    id: RecordId,
    full_name: String,
    email: String,
    phone: String,
    country: String,
    experience: String,
    payment_plan: String,
    created_at: DateTime<Utc>,
}

impl Enrollment {
    /// Materialise a record from a validated draft.
    #[must_use]
    pub fn new(id: RecordId, draft: NewEnrollment, created_at: DateTime<Utc>) -> Self {
        let NewEnrollment {
            full_name,
            email,
            phone,
            country,
            experience,
            payment_plan,
        } = draft;
        Self {
            id,
            full_name,
            email,
            phone,
            country,
            experience,
            payment_plan,
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
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn experience(&self) -> &str {
        &self.experience
    }

    #[must_use]
    pub fn payment_plan(&self) -> &str {
        &self.payment_plan
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether this record carries exactly the submitted draft fields.
    #[cfg(test)]
    pub(crate) fn matches(&self, draft: &NewEnrollment) -> bool {
        self.full_name == draft.full_name
            && self.email == draft.email
            && self.phone == draft.phone
            && self.country == draft.country
            && self.experience == draft.experience
            && self.payment_plan == draft.payment_plan
    }
}
