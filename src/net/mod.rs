//! Form-backend transport
//!
//! The wire payload, the transport trait the submission pipeline talks
//! through, and response classification. The trait exists so the pipeline
//! can be tested against a mock instead of a live fetch.

mod form_backend;

#[cfg(target_arch = "wasm32")]
pub use form_backend::FormBackend;

use async_trait::async_trait;
use serde::Serialize;

use crate::config;

/// Url-encoded body posted to the form backend. Field order here is the
/// order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    #[serde(rename = "form-name")]
    pub form_name: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub inquiry: String,
    pub clinic: String,
    pub message: String,
    pub website: String,
}

impl SubmissionPayload {
    /// Percent-encode the payload as an
    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> Result<String, SubmitError> {
        serde_urlencoded::to_string(self).map_err(|_| SubmitError::Encoding)
    }
}

/// Transport-level failures: the request never produced a status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),
}

/// Submission failures after the guard and validators have passed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("could not encode form payload")]
    Encoding,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("form backend rejected submission with status {0}")]
    Rejected(u16),
}

/// One-shot POST to the form-ingestion endpoint. Returns the response
/// status code; transport errors mean no status was obtained.
#[cfg_attr(all(test, not(target_arch = "wasm32")), mockall::automock)]
#[async_trait(?Send)]
pub trait SubmitTransport {
    async fn submit(&self, body: &str) -> Result<u16, TransportError>;
}

/// Encode and send a payload, classifying the response. Any status below
/// 400 counts as success — the backend answers some accepted submissions
/// with redirect-style codes, and that threshold is the contract.
pub async fn run_submission(
    payload: &SubmissionPayload,
    transport: &dyn SubmitTransport,
) -> Result<(), SubmitError> {
    let body = payload.encode()?;
    let status = transport.submit(&body).await?;
    if status >= 400 {
        tracing::warn!(status, "form backend rejected submission");
        return Err(SubmitError::Rejected(status));
    }
    tracing::info!(status, "form submission accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_payload() -> SubmissionPayload {
        SubmissionPayload {
            form_name: config::FORM_NAME.to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@clinic.example".to_string(),
            inquiry: "clinic".to_string(),
            clinic: "Harley Street Aesthetics".to_string(),
            message: "We would like to join the pilot programme.".to_string(),
            website: String::new(),
        }
    }

    mod encoding {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_names_and_order() {
            let body = sample_payload().encode().unwrap();
            assert_eq!(
                body,
                "form-name=velora-contact\
                 &name=Jane+Doe\
                 &email=jane%40clinic.example\
                 &type=clinic\
                 &clinic=Harley+Street+Aesthetics\
                 &message=We+would+like+to+join+the+pilot+programme.\
                 &website="
            );
        }

        #[test]
        fn test_reserved_characters_are_escaped() {
            let mut payload = sample_payload();
            payload.message = "a=b&c?".to_string();
            let body = payload.encode().unwrap();
            assert!(body.contains("message=a%3Db%26c%3F"));
        }
    }

    mod classification {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ok_status_succeeds() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| Ok(200));
            let result =
                tokio_test::block_on(run_submission(&sample_payload(), &transport));
            assert_eq!(result, Ok(()));
        }

        #[test]
        fn test_redirect_status_counts_as_success() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| Ok(303));
            let result =
                tokio_test::block_on(run_submission(&sample_payload(), &transport));
            assert_eq!(result, Ok(()));
        }

        #[test]
        fn test_status_400_and_above_fail() {
            for status in [400u16, 404, 500] {
                let mut transport = MockSubmitTransport::new();
                transport.expect_submit().returning(move |_| Ok(status));
                let result =
                    tokio_test::block_on(run_submission(&sample_payload(), &transport));
                assert_eq!(result, Err(SubmitError::Rejected(status)));
            }
        }

        #[test]
        fn test_transport_error_propagates() {
            let mut transport = MockSubmitTransport::new();
            transport.expect_submit().returning(|_| {
                Err(TransportError::Network("connection reset".to_string()))
            });
            let result =
                tokio_test::block_on(run_submission(&sample_payload(), &transport));
            assert!(matches!(result, Err(SubmitError::Transport(_))));
        }
    }
}
