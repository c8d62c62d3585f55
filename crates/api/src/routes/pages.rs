//! Route definitions for the HTML pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /                  -> index
/// GET    /new               -> new_form
/// POST   /new               -> new_submit
/// GET    /view/{id}         -> view
/// GET    /edit/{id}         -> edit_form
/// POST   /edit/{id}         -> edit_submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/new", get(pages::new_form).post(pages::new_submit))
        .route("/view/{id}", get(pages::view))
        .route(
            "/edit/{id}",
            get(pages::edit_form).post(pages::edit_submit),
        )
}
