//! Now-playing query endpoint
//!
//! `GET /query` reads the player once and answers with `{player, track}`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

use crate::provider::PlayerState;
use crate::snapshot::{assemble, QueryResponse};
use crate::AppState;

/// GET /query
///
/// Every call performs its own provider read; concurrent requests are not
/// coalesced.
pub async fn get_query(State(state): State<AppState>) -> Result<Json<QueryResponse>, QueryError> {
    let player = read_player(&state).await?;
    debug!(
        "Player state read: enabled={} playing={}",
        player.enabled, player.playing
    );
    Ok(Json(assemble(&player)))
}

async fn read_player(state: &AppState) -> Result<PlayerState, QueryError> {
    let read = state.provider.get_snapshot();

    let result = match state.provider_timeout {
        Some(limit) => match tokio::time::timeout(limit, read).await {
            Ok(result) => result,
            Err(_) => {
                error!(
                    "Provider {} did not answer within {:?}",
                    state.provider.describe(),
                    limit
                );
                return Err(QueryError::Timeout(limit));
            }
        },
        None => read.await,
    };

    result.map_err(|e| {
        error!("Provider {} failed: {}", state.provider.describe(), e);
        QueryError::Provider(e.to_string())
    })
}

/// Query API errors
#[derive(Debug)]
pub enum QueryError {
    Provider(String),
    Timeout(Duration),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            QueryError::Provider(msg) => {
                (StatusCode::BAD_GATEWAY, format!("Player state unavailable: {}", msg))
            }
            QueryError::Timeout(limit) => (
                StatusCode::GATEWAY_TIMEOUT,
                format!("Player state not received within {} ms", limit.as_millis()),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
