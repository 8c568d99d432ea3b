use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Character collection routes.
///
/// ```text
/// GET    /characters        -> list
/// POST   /characters        -> create
/// GET    /characters/{id}   -> get_by_id
/// PUT    /characters/{id}   -> update
/// DELETE /characters/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters", get(character::list).post(character::create))
        .route(
            "/characters/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        )
}
