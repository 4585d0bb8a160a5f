use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{RawQuery, State as AxumState},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use contract::{StatusResponse, SubmitResponse, timestamp_now};
use tracing::{debug, info};

use crate::{
    error::AppError,
    extract::{RawSubmission, extract_payload},
    ingest::ingest,
    state::State,
};

pub async fn submit_handler(
    AxumState(state): AxumState<Arc<State>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    let raw = RawSubmission {
        query: query.as_deref(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        body: &body,
    };

    debug!("Received submission, {} body bytes", body.len());

    let payload = extract_payload(&raw)?;

    #[cfg(feature = "verbose")]
    info!("Extracted payload: {:?}", payload);

    ingest(&state.store, payload).await?;

    Ok(Json(SubmitResponse::saved()))
}

pub async fn status_handler() -> Json<StatusResponse> {
    info!("Status check");

    Json(StatusResponse::ok(timestamp_now()))
}
