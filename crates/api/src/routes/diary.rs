//! Route definitions for the `/diaries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::diary;
use crate::state::AppState;

/// Routes mounted at `/diaries`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(diary::list).post(diary::create))
        .route(
            "/{id}",
            get(diary::get_by_id)
                .put(diary::update)
                .delete(diary::delete),
        )
}
