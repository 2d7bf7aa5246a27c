//! The `{ success, message?, data }` response envelope.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// `success=false` becomes [`ApiError::Rejected`]; a successful envelope
    /// yields its (possibly absent) payload.
    pub fn into_result(self) -> Result<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(self.message.unwrap_or_default()))
        }
    }
}

/// Decode a raw response body into the envelope payload.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>> {
    let envelope: Envelope<T> = serde_json::from_slice(body)?;
    envelope.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope_yields_data() {
        let data: Option<String> =
            decode(br#"{"success":true,"message":"","data":"hello"}"#).unwrap();
        assert_eq!(data.as_deref(), Some("hello"));
    }

    #[test]
    fn missing_data_is_none() {
        let data: Option<Vec<u32>> = decode(br#"{"success":true}"#).unwrap();
        assert!(data.is_none());

        let data: Option<Vec<u32>> = decode(br#"{"success":true,"data":null}"#).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn unsuccessful_envelope_is_rejected_with_message() {
        let err = decode::<String>(br#"{"success":false,"message":"no access"}"#).unwrap_err();
        match err {
            ApiError::Rejected(message) => assert_eq!(message, "no access"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_success_flag_counts_as_failure() {
        let err = decode::<String>(br#"{"data":"x"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = decode::<String>(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
