use std::rc::Rc;
use yew::prelude::*;

use crate::components::map_view::MapView;
use crate::components::status::Status;
use crate::components::system_info::SystemInfo;
use crate::config::Config;
use crate::hooks::use_location::{LocationHandle, use_location};
use crate::hooks::use_stations::use_stations;
use crate::models::location::{Location, LocationTable};
use crate::models::station::Station;

/// Owns the selected location and its station list, and hands both down to
/// the system info panel and the map.
#[function_component(BikesMap)]
pub fn bikes_map() -> Html {
    let locations = use_context::<Rc<LocationTable>>().unwrap_or_default();
    let LocationHandle {
        location,
        set_location,
    } = use_location(locations.clone());
    let stations = use_stations(location.clone());

    let Some(center) = locations.find(&location).map(Location::center) else {
        return html! { <div class="location-not-found">{"Location not found"}</div> };
    };

    // Nothing is drawn while loading or after a failure
    let station_list: Rc<Vec<Station>> = stations.state().data().cloned().unwrap_or_default();

    html! {
        <div class="bikes-map">
            <SystemInfo
                location={location.clone()}
                locations={locations.clone()}
                stations={station_list.clone()}
                on_location_change={set_location}
            />

            <Status state={stations.state().clone()} />

            <MapView
                {center}
                zoom={Config::DEFAULT_ZOOM}
                stations={station_list}
                {location}
            />
        </div>
    }
}
