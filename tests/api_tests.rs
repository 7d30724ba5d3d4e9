//! Tests for the JSON shapes the frontend consumes.

use std::sync::{Arc, Mutex};

use chemmap::catalog::Catalog;
use chemmap::panel::{render, PanelState};
use chemmap::settings::Settings;

#[test]
fn panel_content_serializes_with_frontend_field_names() {
    let catalog = Catalog::builtin().unwrap();
    let content = render(PanelState::Selected(catalog.get(1).unwrap()));
    let json = serde_json::to_value(&content).unwrap();

    assert!(json.get("title").is_some());
    assert!(json.get("primary_html").is_some());
    assert!(json.get("details_title").is_some());
    assert!(json.get("details_html").is_some());
    assert!(json.get("image_url").is_some());
    assert!(json.get("image_alt").is_some());
}

#[test]
fn empty_panel_serializes_image_url_as_null() {
    let json = serde_json::to_value(render(PanelState::Empty)).unwrap();
    assert!(json["image_url"].is_null());
    assert_eq!(json["image_alt"], "Фотография недоступна");
}

#[test]
fn router_builds_with_default_settings() {
    let state = chemmap::server::AppState {
        catalog: Arc::new(Catalog::builtin().unwrap()),
        settings: Arc::new(Mutex::new(Settings::default())),
    };
    // Building the router exercises route registration and the images dir
    // resolution without binding a socket.
    let _app = chemmap::server::create_app(state);
}

#[test]
fn bounds_serialize_as_compass_fields() {
    let catalog = Catalog::builtin().unwrap();
    let json = serde_json::to_value(catalog.bounds().unwrap()).unwrap();
    for key in ["south", "west", "north", "east"] {
        assert!(json[key].is_f64(), "missing bounds field: {}", key);
    }
}
