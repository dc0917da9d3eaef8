use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::matches::{
        CreateMatchRequest, GroupsResponse, MatchResponse, RegisterPlayerRequest,
        UpdateMatchRequest,
    },
    models::Groups,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/matches",
    responses(
        (status = 200, description = "List all matches successfully", body = Vec<MatchResponse>)
    ),
    tag = "matches"
)]
pub async fn list_matches(State(db): State<Database>) -> Result<Response, WebError> {
    let matches = services::list_matches(db.pool()).await?;

    let response: Vec<MatchResponse> = matches.into_iter().map(MatchResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{match_id}",
    params(
        ("match_id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match found", body = MatchResponse),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(db): State<Database>,
    Path(match_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let roster = services::get_match(db.pool(), match_id).await?;

    Ok(Json(MatchResponse::from(roster)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = CreateMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Match scheduled successfully", body = MatchResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "A match is already scheduled at this date and time")
    ),
    tag = "matches"
)]
pub async fn create_match(
    State(db): State<Database>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let roster = services::create_match(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(roster))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{match_id}",
    params(
        ("match_id" = Uuid, Path, description = "Match ID")
    ),
    request_body = UpdateMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match updated successfully", body = MatchResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found"),
        (status = 409, description = "A match is already scheduled at this date and time")
    ),
    tag = "matches"
)]
pub async fn update_match(
    State(db): State<Database>,
    Path(match_id): Path<Uuid>,
    Json(update_req): Json<UpdateMatchRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let roster = services::update_match(db.pool(), match_id, &update_req).await?;

    Ok(Json(MatchResponse::from(roster)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/matches/{match_id}",
    params(
        ("match_id" = Uuid, Path, description = "Match ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Match deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn delete_match(
    State(db): State<Database>,
    Path(match_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_match(db.pool(), match_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{match_id}/players",
    params(
        ("match_id" = Uuid, Path, description = "Match ID")
    ),
    request_body = RegisterPlayerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Player registered for the match", body = MatchResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match or player not found"),
        (status = 409, description = "Player is already registered for this match")
    ),
    tag = "matches"
)]
pub async fn register_player(
    State(db): State<Database>,
    Path(match_id): Path<Uuid>,
    Json(req): Json<RegisterPlayerRequest>,
) -> Result<Response, WebError> {
    let roster = services::register_player(db.pool(), match_id, req.player_id).await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(roster))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/matches/{match_id}/players/{player_id}",
    params(
        ("match_id" = Uuid, Path, description = "Match ID"),
        ("player_id" = Uuid, Path, description = "Player ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Player removed from the match"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player is not registered for this match")
    ),
    tag = "matches"
)]
pub async fn unregister_player(
    State(db): State<Database>,
    Path((match_id, player_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::unregister_player(db.pool(), match_id, player_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{match_id}/sort-groups",
    params(
        ("match_id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Freshly computed groups, not yet saved", body = GroupsResponse),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn sort_groups(
    State(db): State<Database>,
    Path(match_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let groups = services::sort_groups(db.pool(), match_id).await?;

    Ok(Json(GroupsResponse::from(groups)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{match_id}/groups",
    params(
        ("match_id" = Uuid, Path, description = "Match ID")
    ),
    request_body = Groups,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Groups saved against the match", body = MatchResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found"),
        (status = 500, description = "The groups could not be saved")
    ),
    tag = "matches"
)]
pub async fn save_groups(
    State(db): State<Database>,
    Path(match_id): Path<Uuid>,
    Json(groups): Json<Groups>,
) -> Result<Response, WebError> {
    let roster = services::save_groups(db.pool(), match_id, &groups).await?;

    Ok(Json(MatchResponse::from(roster)).into_response())
}
