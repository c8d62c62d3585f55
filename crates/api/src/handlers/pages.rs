//! Handlers for the server-rendered HTML pages.
//!
//! Forms follow the post/redirect/get pattern: a successful `POST` answers
//! with `303 See Other`, a rejected one re-renders the form with status 400.

use std::collections::BTreeMap;

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use diary_core::diary::ENTITY_NAME;
use diary_core::error::{CoreError, ValidationError};
use diary_core::types::DbId;
use diary_db::models::diary::{DiaryEntry, DiaryInput};
use diary_db::repositories::DiaryRepo;
use minijinja::context;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates;

/// Error type for page handlers: same classification as [`AppError`], but
/// rendered as an HTML page instead of a JSON body.
#[derive(Debug)]
pub enum PageError {
    App(AppError),
    /// No page lives at the requested path, including ids that are not numbers.
    NoSuchPage,
}

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError::App(err)
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError::App(AppError::Database(err))
    }
}

impl From<minijinja::Error> for PageError {
    fn from(err: minijinja::Error) -> Self {
        PageError::App(AppError::Template(err))
    }
}

impl From<PathRejection> for PageError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Unmatched page path");
        PageError::NoSuchPage
    }
}

impl From<FormRejection> for PageError {
    fn from(rejection: FormRejection) -> Self {
        PageError::App(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PageError::App(err) => {
                let (status, _code, message) = err.classify();
                (status, Some(message))
            }
            PageError::NoSuchPage => (StatusCode::NOT_FOUND, None),
        };
        let template = if status == StatusCode::NOT_FOUND {
            "not_found.html"
        } else {
            "error.html"
        };
        match templates::render(template, context! { message }) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, template, "Failed to render error page");
                (status, status.canonical_reason().unwrap_or("Error")).into_response()
            }
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;

fn not_found(id: DbId) -> PageError {
    PageError::App(AppError::Core(CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    }))
}

async fn find_entry(state: &AppState, id: DbId) -> PageResult<DiaryEntry> {
    DiaryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Per-field messages keyed by field name, as the form template expects.
fn field_messages(errors: &ValidationError) -> BTreeMap<&'static str, &str> {
    errors
        .fields
        .iter()
        .map(|f| (f.field, f.message.as_str()))
        .collect()
}

fn render_new_form(
    status: StatusCode,
    form: &DiaryInput,
    errors: &ValidationError,
) -> PageResult<Response> {
    let html = templates::render(
        "new.html",
        context! { form, errors => field_messages(errors) },
    )?;
    Ok((status, Html(html)).into_response())
}

fn render_edit_form(
    status: StatusCode,
    diary_id: DbId,
    form: &DiaryInput,
    errors: &ValidationError,
) -> PageResult<Response> {
    let html = templates::render(
        "edit.html",
        context! { diary_id, form, errors => field_messages(errors) },
    )?;
    Ok((status, Html(html)).into_response())
}

/// GET /
pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let diaries = DiaryRepo::list(&state.pool).await?;
    Ok(Html(templates::render("index.html", context! { diaries })?))
}

/// GET /new
pub async fn new_form() -> PageResult<Response> {
    render_new_form(
        StatusCode::OK,
        &DiaryInput::default(),
        &ValidationError::default(),
    )
}

/// POST /new
pub async fn new_submit(
    State(state): State<AppState>,
    form: Result<Form<DiaryInput>, FormRejection>,
) -> PageResult<Response> {
    let Form(form) = form?;
    let input = match form.clone().validate() {
        Ok(input) => input,
        Err(errors) => return render_new_form(StatusCode::BAD_REQUEST, &form, &errors),
    };

    let entry = DiaryRepo::create(&state.pool, &input, chrono::Utc::now()).await?;
    tracing::info!(diary_id = entry.id, "Diary entry created from form");

    Ok(Redirect::to("/").into_response())
}

/// GET /view/{id}
pub async fn view(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> PageResult<Html<String>> {
    let Path(id) = path?;
    let diary = find_entry(&state, id).await?;
    Ok(Html(templates::render("view.html", context! { diary })?))
}

/// GET /edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> PageResult<Response> {
    let Path(id) = path?;
    let diary = find_entry(&state, id).await?;
    render_edit_form(
        StatusCode::OK,
        id,
        &DiaryInput::from(&diary),
        &ValidationError::default(),
    )
}

/// POST /edit/{id}
pub async fn edit_submit(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    form: Result<Form<DiaryInput>, FormRejection>,
) -> PageResult<Response> {
    let Path(id) = path?;
    let Form(form) = form?;
    let input = match form.clone().validate() {
        Ok(input) => input,
        Err(errors) => {
            // Editing a missing entry is a 404, whatever the form holds.
            find_entry(&state, id).await?;
            return render_edit_form(StatusCode::BAD_REQUEST, id, &form, &errors);
        }
    };

    DiaryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(diary_id = id, "Diary entry updated from form");

    Ok(Redirect::to(&format!("/view/{id}")).into_response())
}

/// Fallback for unknown paths.
pub async fn not_found_page() -> Response {
    PageError::NoSuchPage.into_response()
}
