//! Raw JSON body decoding shared by the intake handlers.
//!
//! Handlers accept the body as bytes so a malformed document is reported with
//! the same itemised error shape as a schema violation, instead of Actix's
//! plain-text extractor error.

use serde_json::Value;

use crate::domain::{Error, ValidationErrors};

const BODY_FIELD: &str = "body";

/// Decode `body` as JSON, mapping syntax errors onto `invalid_message`.
///
/// # Examples
/// ```
/// use intake::inbound::http::payload::decode_json_body;
///
/// let value = decode_json_body(br#"{"fullName":"Ada"}"#, "Invalid enrollment data")
///     .expect("valid JSON");
/// assert_eq!(value["fullName"], "Ada");
/// ```
pub fn decode_json_body(body: &[u8], invalid_message: &str) -> Result<Value, Error> {
    serde_json::from_slice(body).map_err(|err| {
        ValidationErrors::invalid_payload(BODY_FIELD, format!("malformed JSON: {err}"))
            .into_error(invalid_message)
    })
}
