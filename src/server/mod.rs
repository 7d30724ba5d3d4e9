use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;

pub mod handlers;
pub mod state;

pub use self::state::AppState;
use handlers::{
    get_empty_panel, get_landmarks, get_panel, get_settings, index_html, script_js, style_css,
};

// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let images_path = {
        let settings = state.settings.lock().unwrap();
        std::env::current_dir()
            .unwrap_or_default()
            .join(&settings.images_dir)
    };

    Router::new()
        .route("/", get(index_html))
        .route("/style.css", get(style_css))
        .route("/script.js", get(script_js))
        .route("/api/landmarks", get(get_landmarks))
        .route("/api/panel", get(get_empty_panel))
        .route("/api/panel/:id", get(get_panel))
        .route("/api/settings", get(get_settings))
        .nest_service("/images", ServeDir::new(images_path))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

pub async fn start_server(state: AppState) -> Result<()> {
    let port = {
        let settings = state.settings.lock().unwrap();
        settings.port
    };
    let app = create_app(state);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server running at http://127.0.0.1:{}", port);
    info!("API endpoints:");
    info!("   - GET /api/landmarks - Catalog records, bounds and initial selection");
    info!("   - GET /api/panel - Empty panel content");
    info!("   - GET /api/panel/<id> - Panel content for one landmark");
    info!("   - GET /images/<file> - Landmark photos");

    axum::serve(listener, app).await?;
    Ok(())
}
