//! Route tree.
//!
//! ```text
//! /health                      service + database health
//!
//! /api/diaries                 list, create
//! /api/diaries/{id}            get, update, delete
//!
//! /                            HTML index
//! /new                         HTML create form (GET), submit (POST)
//! /view/{id}                   HTML single entry
//! /edit/{id}                   HTML edit form (GET), submit (POST)
//! ```

pub mod diary;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the JSON API route tree, mounted at `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/diaries", diary::router())
}
