//! Request handlers.
//!
//! [`diary`] serves the JSON API and [`pages`] the server-rendered HTML UI.
//! Both delegate to `DiaryRepo` in `diary_db` through the pool carried in
//! [`AppState`](crate::state::AppState).

pub mod diary;
pub mod pages;
