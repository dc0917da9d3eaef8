use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::player::{CreatePlayerRequest, PlayerFilter, PlayerResponse, UpdatePlayerRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    params(PlayerFilter),
    responses(
        (status = 200, description = "List players successfully", body = Vec<PlayerResponse>)
    ),
    tag = "players"
)]
pub async fn list_players(
    State(db): State<Database>,
    Query(filter): Query<PlayerFilter>,
) -> Result<Response, WebError> {
    let players = services::list_players(db.pool(), &filter).await?;

    let response: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{player_id}",
    params(
        ("player_id" = Uuid, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player found", body = PlayerResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player(
    State(db): State<Database>,
    Path(player_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let player = services::get_player(db.pool(), player_id).await?;

    Ok(Json(PlayerResponse::from(player)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Player created successfully", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "A player with this name and contact already exists")
    ),
    tag = "players"
)]
pub async fn create_player(
    State(db): State<Database>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let player = services::create_player(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/players/{player_id}",
    params(
        ("player_id" = Uuid, Path, description = "Player ID")
    ),
    request_body = UpdatePlayerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Player updated successfully", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found"),
        (status = 409, description = "A player with this name and contact already exists")
    ),
    tag = "players"
)]
pub async fn update_player(
    State(db): State<Database>,
    Path(player_id): Path<Uuid>,
    Json(update_req): Json<UpdatePlayerRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_player(db.pool(), player_id, &update_req).await?;

    Ok(Json(PlayerResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/players/{player_id}",
    params(
        ("player_id" = Uuid, Path, description = "Player ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Player deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn delete_player(
    State(db): State<Database>,
    Path(player_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_player(db.pool(), player_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
