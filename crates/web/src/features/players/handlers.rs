use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    SharedStore,
    dto::player::{CreatePlayerRequest, PlayerResponse, RegisterPlayerResponse},
    services::player_registry,
};

use crate::error::{WebError, parse_player_id};

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created", body = RegisterPlayerResponse),
        (status = 200, description = "Player already exists", body = RegisterPlayerResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "players"
)]
pub async fn create_player(
    State(store): State<SharedStore>,
    payload: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    let name = req.player_name()?;

    let registration = player_registry::register_or_get(store.as_ref(), &name).await?;

    let status = if registration.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(RegisterPlayerResponse::from(&registration))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    params(
        ("id" = i64, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player found", body = PlayerResponse),
        (status = 400, description = "Invalid player ID"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_player_id(&id)?;
    let player = player_registry::get_by_id(store.as_ref(), id).await?;

    Ok(Json(PlayerResponse::from(player)).into_response())
}
