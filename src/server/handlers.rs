use axum::{
    extract::{Path as AxumPath, State},
    http::{header, StatusCode},
    response::{Html, Json, Response},
};
use rust_embed::RustEmbed;
use serde::Serialize;

use crate::catalog::LatLngBounds;
use crate::panel::{self, PanelContent, PanelState};
use crate::settings::Settings;

use super::state::AppState;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct Asset;

/// One catalog record as delivered to the map frontend. Full descriptive
/// text stays server-side; the marker only needs its coordinate and the
/// title-only popup markup.
#[derive(Debug, Serialize)]
pub struct MarkerInfo {
    pub id: usize,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub popup_html: String,
}

#[derive(Debug, Serialize)]
pub struct LandmarksResponse {
    pub landmarks: Vec<MarkerInfo>,
    pub bounds: Option<LatLngBounds>,
    /// Record to select on load, when configured; the panel starts empty
    /// otherwise.
    pub initial_selection: Option<usize>,
}

// HTTP API Handlers
pub async fn get_landmarks(State(state): State<AppState>) -> Json<LandmarksResponse> {
    let landmarks = state
        .catalog
        .iter()
        .enumerate()
        .map(|(id, landmark)| MarkerInfo {
            id,
            name: landmark.name.clone(),
            lat: landmark.lat,
            lng: landmark.lng,
            popup_html: format!("<b>{}</b>", panel::escape_html(&landmark.name)),
        })
        .collect();

    let select_first = {
        let settings = state.settings.lock().unwrap();
        settings.select_first_on_load
    };
    let initial_selection = if select_first && !state.catalog.is_empty() {
        Some(0)
    } else {
        None
    };

    Json(LandmarksResponse {
        landmarks,
        bounds: state.catalog.bounds(),
        initial_selection,
    })
}

pub async fn get_empty_panel() -> Json<PanelContent> {
    Json(panel::render(PanelState::Empty))
}

pub async fn get_panel(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<usize>,
) -> Result<Json<PanelContent>, StatusCode> {
    let landmark = state.catalog.get(id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(panel::render(PanelState::Selected(landmark))))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let settings = state.settings.lock().unwrap();
    Json((*settings).clone())
}

// Embedded frontend assets
pub async fn index_html() -> Html<Vec<u8>> {
    Html(Asset::get("index.html").unwrap().data.into_owned())
}

pub async fn style_css() -> Response {
    let content = Asset::get("style.css").unwrap().data;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/css")
        .body(content.into_owned().into())
        .unwrap()
}

pub async fn script_js() -> Response {
    let content = Asset::get("script.js").unwrap().data;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/javascript")
        .body(content.into_owned().into())
        .unwrap()
}
