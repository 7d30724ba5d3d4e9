//! Interactive map of chemical and pharmaceutical history landmarks in
//! Saint Petersburg.
//!
//! The catalog and the info-panel rendering live in Rust; a small axum
//! server delivers the embedded Leaflet frontend, the catalog as JSON and
//! pre-rendered panel content.

pub mod catalog;
pub mod constants;
pub mod panel;
pub mod server;
pub mod settings;
