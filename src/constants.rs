// Port configuration
pub const DEFAULT_PORT: u16 = 3001;

// Sentinel used in catalog text fields in place of a line break
pub const BREAK_TOKEN: &str = "@@BREAK@@";
pub const LINE_BREAK: &str = "<br>";

// Default tile layer (CARTO light basemap over OSM data)
pub const DEFAULT_TILE_URL: &str =
    "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";

// Directory with landmark photos, relative to the working directory
pub const DEFAULT_IMAGES_DIR: &str = "images";
