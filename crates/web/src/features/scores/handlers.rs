use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    SharedStore,
    dto::score::{ScoreSubmissionResponse, SubmitScoreRequest},
    services::{player_registry, score_ledger},
};
use validator::Validate;

use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score recorded with its rank at submission time", body = ScoreSubmissionResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Player not found")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(store): State<SharedStore>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;
    let value = req.score_value()?;

    // Unknown players get a 404 here; the store's foreign key still guards the insert
    player_registry::get_by_id(store.as_ref(), req.player_id).await?;

    let ranked = score_ledger::submit(store.as_ref(), req.player_id, value).await?;

    Ok((StatusCode::CREATED, Json(ScoreSubmissionResponse::from(ranked))).into_response())
}
