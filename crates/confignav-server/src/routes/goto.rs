use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;
use confignav_core::Dispatch;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Fields of the navigation form. `path` is the route tag; an empty value is
/// the config page itself, an absent one never navigates.
#[derive(Debug, Default, Deserialize)]
pub struct GotoParams {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub config_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    #[serde(default)]
    pub config_id: Option<String>,
}

/// GET /goto/{tag}?config_id=ID
pub async fn goto_tag(
    State(app): State<AppState>,
    Path(tag): Path<String>,
    Query(params): Query<IdParams>,
) -> Result<Response, AppError> {
    dispatch(&app, Some(tag), params.config_id)
}

/// GET /goto?path=TAG&config_id=ID
pub async fn goto_query(
    State(app): State<AppState>,
    Query(params): Query<GotoParams>,
) -> Result<Response, AppError> {
    dispatch(&app, params.path, params.config_id)
}

/// POST /goto — urlencoded form with `path` and `config_id`.
pub async fn goto_form(
    State(app): State<AppState>,
    Form(params): Form<GotoParams>,
) -> Result<Response, AppError> {
    dispatch(&app, params.path, params.config_id)
}

/// 303 to the resolved page, or 204 so the browser stays where it is.
fn dispatch(
    app: &AppState,
    tag: Option<String>,
    config_id: Option<String>,
) -> Result<Response, AppError> {
    let Some(tag) = tag else {
        tracing::debug!("no route tag submitted, not navigating");
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let dispatcher = app.dispatcher(config_id);
    match dispatcher.navigate(&tag, None)? {
        Dispatch::Navigated(url) => see_other(&url),
        Dispatch::Unmatched(_) => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

fn see_other(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(url)
        .map_err(|_| AppError::bad_request(format!("cannot redirect to '{url}'")))?;
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}
