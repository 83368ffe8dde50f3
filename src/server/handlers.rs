//! Request coordinators for the two lookup operations.
//!
//! Each handler decodes the payload, normalizes the title field, delegates
//! to the lookup service, and encodes whatever comes back. A payload that
//! fails to decode is answered with 400 and a fixed error body before the
//! lookup is ever touched.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::lookup::domain::{LookupError, SearchRequest, SearchResult, Track};
use crate::normalize::clean_title;
use crate::server::AppState;

/// Error envelope for non-200 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn invalid_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "invalid request".to_string(),
        }),
    )
        .into_response()
}

/// How a lookup failure leaves the building.
///
/// Default policy surfaces it as 502. With error masking on, the legacy
/// wire contract is honored instead: log, answer 200 with the zero-valued
/// result.
fn lookup_failure<T: Serialize>(state: &AppState, err: &LookupError, zero: T) -> Response {
    if state.mask_lookup_errors {
        tracing::warn!("lookup failed (masked): {err}");
        return (StatusCode::OK, Json(zero)).into_response();
    }

    tracing::error!("lookup failed: {err}");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// POST /search
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(mut req)) = payload else {
        return invalid_request();
    };

    // The title is the lookup key; nothing downstream mutates it again.
    req.track = clean_title(&req.track);

    match state.lookup.search(req).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => lookup_failure(&state, &err, SearchResult::default()),
    }
}

/// POST /hydrate
pub async fn hydrate(
    State(state): State<AppState>,
    payload: Result<Json<Track>, JsonRejection>,
) -> Response {
    let Ok(Json(mut track)) = payload else {
        return invalid_request();
    };

    track.name = clean_title(&track.name);
    let unhydrated = track.clone();

    match state.lookup.hydrate(track).await {
        Ok(hydrated) => (StatusCode::OK, Json(hydrated)).into_response(),
        Err(err) => lookup_failure(&state, &err, unhydrated),
    }
}
