use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    application::use_cases::waitlist::WaitlistUseCases,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

/// POST /api/waitlist
/// Body `{ "email": string }`. The raw body is handed to the use case so that
/// unparseable JSON is reported like any other malformed request.
async fn join_waitlist(
    State(waitlist_use_cases): State<Arc<WaitlistUseCases>>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let registration = waitlist_use_cases.register(&body).await?;

    Ok((StatusCode::CREATED, Json(registration)))
}
