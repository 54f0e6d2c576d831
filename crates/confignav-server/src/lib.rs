pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::{AppState, ServerSettings};

/// Build the axum Router with all routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(settings: ServerSettings) -> Router {
    let app_state = AppState::new(settings);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Navigation
        .route(
            "/goto",
            get(routes::goto::goto_query).post(routes::goto::goto_form),
        )
        .route("/goto/{tag}", get(routes::goto::goto_tag))
        // Catalog
        .route("/api/routes", get(routes::catalog::list_routes))
        .route("/api/resolve", get(routes::catalog::resolve))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the redirect service on a pre-bound listener.
///
/// Lets the caller read the actual port first when binding to port 0.
pub async fn serve_on(
    settings: ServerSettings,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(settings);

    tracing::info!("confignav listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/routes");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
