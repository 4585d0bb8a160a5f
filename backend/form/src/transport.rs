use std::future::Future;

use contract::{StatusResponse, SubmitPayload, SubmitResponse};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:1111/";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with {status}: {}", .detail.as_deref().unwrap_or("no details"))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Unreadable response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Server rejected submission: {0}")]
    Rejected(String),
}

pub trait Transport {
    fn send(
        &self,
        payload: &SubmitPayload,
    ) -> impl Future<Output = Result<SubmitResponse, SubmitError>>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn status(&self) -> Result<StatusResponse, SubmitError> {
        let res = self.client.get(&self.endpoint).send().await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            return Err(SubmitError::Status {
                status,
                detail: Some(text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, payload: &SubmitPayload) -> Result<SubmitResponse, SubmitError> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = res.status();
        debug!("Server responded with {status}");

        let text = res.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<SubmitResponse>(&text)
                .ok()
                .and_then(|body| body.error);

            return Err(SubmitError::Status { status, detail });
        }

        let body: SubmitResponse = serde_json::from_str(&text)?;
        debug!("Server response: {body:?}");

        if !body.success {
            return Err(SubmitError::Rejected(body.error.unwrap_or(body.message)));
        }

        Ok(body)
    }
}
