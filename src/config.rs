/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base URL, taken from `BIKE_STATIONS_API_URL` at build time
    pub const API_BASE_URL: &'static str = match option_env!("BIKE_STATIONS_API_URL") {
        Some(url) => url,
        None => "http://localhost:3000",
    };

    /// Location selected when the app starts
    pub const DEFAULT_LOCATION: &'static str = "oslo";

    /// Zoom level the map is set to whenever it recenters
    pub const DEFAULT_ZOOM: u8 = 13;

    pub const TILE_URL: &'static str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

    pub const TILE_ATTRIBUTION: &'static str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

    pub const MARKER_ICON_URL: &'static str =
        "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";

    /// Marker icons are square, in pixels
    pub const MARKER_ICON_SIZE: u32 = 20;

    /// Width bounds of a station popup, in pixels; keep in step with `.station-popup`
    pub const POPUP_MIN_WIDTH: u32 = 220;
    pub const POPUP_MAX_WIDTH: u32 = 320;
}
