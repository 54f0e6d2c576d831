use axum::extract::{Query, State};
use axum::Json;
use confignav_core::route::{RouteEntry, RouteTable};

use crate::error::AppError;
use crate::routes::goto::GotoParams;
use crate::state::AppState;

/// GET /api/routes — every tag with its URL template.
pub async fn list_routes() -> Json<Vec<RouteEntry>> {
    Json(RouteTable::entries())
}

/// GET /api/resolve?path=TAG&config_id=ID — resolve without redirecting.
///
/// `url` is null when the tag is absent or not known.
pub async fn resolve(
    State(app): State<AppState>,
    Query(params): Query<GotoParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let url = match params.path {
        Some(tag) => app.dispatcher(params.config_id).resolve(&tag, None)?,
        None => None,
    };
    Ok(Json(serde_json::json!({ "url": url })))
}
