//! Live transport: browser fetch against the form-ingestion endpoint

#![cfg(target_arch = "wasm32")]

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{SubmitTransport, TransportError};
use crate::config;

/// Posts url-encoded submissions to the hosting platform's form ingestion.
/// No explicit timeout: the browser's default network timeout applies.
#[derive(Debug, Default)]
pub struct FormBackend;

#[async_trait(?Send)]
impl SubmitTransport for FormBackend {
    async fn submit(&self, body: &str) -> Result<u16, TransportError> {
        let response = Request::post(config::FORM_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .map_err(|err| TransportError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(response.status())
    }
}
