//! Thin bindings to the global Leaflet `L` object loaded by `index.html`.

use crate::config::Config;
use crate::models::error::AppError;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(container: &HtmlElement) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map) -> Map;

    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[derive(Debug, Clone)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LayerGroup, map: &Map) -> LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Marker) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup) -> LayerGroup;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &Element, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = getPopup)]
    pub fn get_popup(this: &Marker) -> Popup;

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;

    #[derive(Debug, Clone, PartialEq)]
    pub type Popup;

    /// Re-measures the popup content and pans the map to fit it.
    #[wasm_bindgen(method)]
    pub fn update(this: &Popup) -> Popup;

    #[derive(Debug, Clone)]
    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    pub fn icon(options: &JsValue) -> Icon;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions {
    icon_url: &'static str,
    icon_size: [u32; 2],
    icon_anchor: [u32; 2],
    popup_anchor: [i64; 2],
}

impl IconOptions {
    /// The small marker icon every station uses, anchored at its bottom center.
    fn station() -> Self {
        let size = Config::MARKER_ICON_SIZE;
        Self {
            icon_url: Config::MARKER_ICON_URL,
            icon_size: [size, size],
            icon_anchor: [size / 2, size],
            popup_anchor: [0, -i64::from(size)],
        }
    }
}

/// Popup bounds, so Leaflet does not size it from the still-empty host.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    min_width: u32,
    max_width: u32,
}

impl PopupOptions {
    fn station() -> Self {
        Self {
            min_width: Config::POPUP_MIN_WIDTH,
            max_width: Config::POPUP_MAX_WIDTH,
        }
    }
}

#[derive(Serialize)]
struct TileLayerOptions {
    attribution: &'static str,
}

/// Leaflet's `[lat, lng]` array form.
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng)).into()
}

/// Converts a serializable options struct into a plain JS object.
pub fn to_js_object<T: Serialize>(value: &T) -> Result<JsValue, AppError> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppError::Map(format!("Failed to serialize options: {e}")))?;
    js_sys::JSON::parse(&json).map_err(js_error)
}

pub fn js_error(value: JsValue) -> AppError {
    AppError::Map(format!("{value:?}"))
}

pub fn station_icon() -> Result<Icon, AppError> {
    Ok(icon(&to_js_object(&IconOptions::station())?))
}

pub fn station_popup_options() -> Result<JsValue, AppError> {
    to_js_object(&PopupOptions::station())
}

/// Creates a map inside `container` with the OpenStreetMap tile layer.
pub fn create_map(container: &HtmlElement) -> Result<Map, AppError> {
    let map = map(container);
    let options = to_js_object(&TileLayerOptions {
        attribution: Config::TILE_ATTRIBUTION,
    })?;
    tile_layer(Config::TILE_URL, &options).add_to(&map);
    Ok(map)
}
