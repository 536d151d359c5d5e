use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use chainlog_ledger::{LedgerReader, LedgerStore, LedgerWriter};
use chainlog_protocol::{HealthResponse, JsonCodec};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ServerError, ServerResult};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn LedgerStore>,
}

impl AppState {
    pub fn new(ledger: Arc<dyn LedgerStore>) -> Self {
        Self { ledger }
    }
}

fn json_response<T: Serialize>(value: &T) -> ServerResult<Response> {
    let body = JsonCodec::encode(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// `GET /blocks`: the full chain, ascending.
pub async fn blocks_handler(State(state): State<AppState>) -> ServerResult<Response> {
    json_response(&state.ledger.snapshot())
}

/// `POST /mine`: append one record carrying `data`.
pub async fn mine_handler(State(state): State<AppState>, body: Bytes) -> ServerResult<Response> {
    let request =
        JsonCodec::decode_mine_request(&body).map_err(|_| ServerError::InvalidPayload)?;
    if request.data.is_empty() {
        return Err(ServerError::DataRequired);
    }

    let record = state.ledger.append(&request.data)?;
    info!(seq = record.sequence_number, digest = %record.short_digest(), "record mined");
    json_response(&record)
}

/// `POST /replace`: adopt a longer valid chain and return the new snapshot.
pub async fn replace_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<Response> {
    let candidate = JsonCodec::decode_chain(&body).map_err(|_| ServerError::InvalidPayload)?;
    let length = candidate.len();

    if let Err(e) = state.ledger.try_replace(candidate) {
        match e.validation() {
            Some(cause) => warn!(candidate = length, %cause, "replacement chain is invalid"),
            None => info!(candidate = length, error = %e, "replacement not preferred"),
        }
        return Err(ServerError::ReplacementFailed(e));
    }

    info!(length, "chain replaced");
    json_response(&state.ledger.snapshot())
}

/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.ledger.len()))
}
