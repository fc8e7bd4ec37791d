//! Identifiers assigned to stored submissions.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier generated by the store when a record is created.
///
/// Serialises as the hyphenated UUID string.
///
/// # Examples
/// ```
/// use intake::domain::RecordId;
///
/// let id = RecordId::random();
/// assert_eq!(id.to_string().len(), 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The two kinds of submission accepted by the intake endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Bootcamp sign-up form.
    Enrollment,
    /// Free consultation booking form.
    Consultation,
}

impl RecordKind {
    /// Lower-case label used in logs and metric labels.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enrollment => "enrollment",
            Self::Consultation => "consultation",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_plain_uuid_string() {
        let id = RecordId::from(Uuid::nil());
        let value = serde_json::to_value(id).expect("serialise id");
        assert_eq!(value, serde_json::json!("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn random_identifiers_are_distinct() {
        assert_ne!(RecordId::random(), RecordId::random());
    }
}
