use crate::map::leaflet::{self, Icon, LayerGroup, Map, Popup, js_error};
use crate::models::error::AppError;
use crate::models::station::Station;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::Callback;

/// Somewhere station markers can be drawn.
pub trait MarkerLayer {
    /// Removes every marker currently on the layer.
    fn clear(&mut self);

    /// Adds a marker for `station`, which belongs to `location`.
    fn add(&mut self, location: &str, station: &Station) -> Result<(), AppError>;
}

/// Swaps the markers on `layer` for one per station.
///
/// The layer is emptied before the first new marker goes in, so markers of
/// two different station lists are never shown together. Stations without
/// a usable position are skipped. Returns how many markers were added.
pub fn replace_markers<L: MarkerLayer + ?Sized>(
    layer: &mut L,
    location: &str,
    stations: &[Station],
) -> Result<usize, AppError> {
    layer.clear();

    let mut added = 0;
    for station in stations.iter().filter(|s| has_position(s)) {
        layer.add(location, station)?;
        added += 1;
    }
    Ok(added)
}

fn has_position(station: &Station) -> bool {
    station.lat.is_finite() && station.lon.is_finite()
}

/// A station together with the location its marker was drawn for.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupTarget {
    pub station: Station,
    pub location: String,
}

impl PopupTarget {
    /// A popup may only load details while its location is still selected.
    pub fn belongs_to(&self, location: &str) -> bool {
        self.location == location
    }
}

/// The station whose popup is open, and the Leaflet popup showing it.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenPopup {
    pub target: PopupTarget,
    pub host: Element,
    pub popup: Popup,
}

/// Station markers on a Leaflet layer group.
///
/// Each marker gets an empty popup element; opening and closing the popup
/// is reported through `on_popup` so the view can render into it.
pub struct LeafletMarkers {
    group: LayerGroup,
    icon: Icon,
    popup_options: JsValue,
    on_popup: Callback<Option<OpenPopup>>,
    listeners: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl LeafletMarkers {
    pub fn new(map: &Map, on_popup: Callback<Option<OpenPopup>>) -> Result<Self, AppError> {
        let group = leaflet::layer_group().add_to(map);
        Ok(Self {
            group,
            icon: leaflet::station_icon()?,
            popup_options: leaflet::station_popup_options()?,
            on_popup,
            listeners: Vec::new(),
        })
    }

    fn listener(&self, popup: Option<OpenPopup>) -> Closure<dyn FnMut(JsValue)> {
        let on_popup = self.on_popup.clone();
        Closure::new(move |_event: JsValue| on_popup.emit(popup.clone()))
    }
}

impl MarkerLayer for LeafletMarkers {
    fn clear(&mut self) {
        // Removing a marker closes its popup, which still fires `popupclose`
        // into the listeners; drop them only afterwards.
        self.group.clear_layers();
        self.listeners.clear();
    }

    fn add(&mut self, location: &str, station: &Station) -> Result<(), AppError> {
        let host = gloo::utils::document()
            .create_element("div")
            .map_err(js_error)?;
        host.set_class_name("station-popup");

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"icon".into(), &self.icon).map_err(js_error)?;

        let marker = leaflet::marker(&leaflet::lat_lng(station.lat, station.lon), &options);
        marker.bind_popup(&host, &self.popup_options);

        let on_open = self.listener(Some(OpenPopup {
            target: PopupTarget {
                station: station.clone(),
                location: location.to_string(),
            },
            host,
            popup: marker.get_popup(),
        }));
        let on_close = self.listener(None);
        marker.on("popupopen", on_open.as_ref().unchecked_ref());
        marker.on("popupclose", on_close.as_ref().unchecked_ref());

        self.group.add_layer(&marker);
        self.listeners.push(on_open);
        self.listeners.push(on_close);
        Ok(())
    }
}
