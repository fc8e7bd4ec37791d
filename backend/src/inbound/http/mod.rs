//! HTTP inbound adapter exposing the intake REST endpoints.

pub mod consultations;
pub mod enrollments;
pub mod error;
pub mod health;
pub mod payload;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
