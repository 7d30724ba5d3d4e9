use std::sync::{Arc, Mutex};

use crate::catalog::Catalog;
use crate::settings::Settings;

// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub settings: Arc<Mutex<Settings>>,
}
