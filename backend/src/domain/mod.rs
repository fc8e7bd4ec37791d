//! Domain primitives, validation, and intake services.
//!
//! Purpose: define the two submission kinds accepted by the site, the
//! schema-driven validation that turns raw payloads into drafts, and the
//! services that store drafts through ports. Nothing here depends on Actix.
//!
//! Public surface:
//! - [`Enrollment`] / [`NewEnrollment`]: bootcamp sign-up record and draft.
//! - [`Consultation`] / [`NewConsultation`]: consultation booking record and draft.
//! - [`PayloadFields`], [`ValidationErrors`]: accumulating payload validation.
//! - [`EnrollmentService`], [`ConsultationService`]: driving port implementations.
//! - [`Error`], [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request correlation identifier.

pub mod consultation;
pub mod enrollment;
pub mod error;
pub mod intake_service;
pub mod ports;
pub mod record_id;
pub mod trace_id;
pub mod validation;

pub use self::consultation::{Consultation, NewConsultation};
pub use self::enrollment::{Enrollment, NewEnrollment};
pub use self::error::{Error, ErrorCode};
pub use self::intake_service::{ConsultationService, EnrollmentService};
pub use self::record_id::{RecordId, RecordKind};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{FieldIssue, FieldName, IssueCode, PayloadFields, ValidationErrors};
