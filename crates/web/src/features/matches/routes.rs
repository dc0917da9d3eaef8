use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_match, delete_match, get_match, list_matches, register_player, save_groups,
    sort_groups, unregister_player, update_match,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_match))
        .route("/:match_id", put(update_match))
        .route("/:match_id", delete(delete_match))
        .route("/:match_id/players", post(register_player))
        .route("/:match_id/players/:player_id", delete(unregister_player))
        .route("/:match_id/groups", put(save_groups))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_matches))
        .route("/:match_id", get(get_match))
        .route("/:match_id/sort-groups", post(sort_groups))
        .merge(protected)
}
