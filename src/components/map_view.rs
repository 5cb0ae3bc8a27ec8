use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::station_popup::StationPopup;
use crate::map::leaflet::{self, Map};
use crate::map::markers::{LeafletMarkers, OpenPopup, replace_markers};
use crate::models::error::AppError;
use crate::models::station::Station;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    /// `(lat, lng)` the viewport is centered on
    pub center: (f64, f64),
    pub zoom: u8,
    pub stations: Rc<Vec<Station>>,
    pub location: String,
}

struct MapHandle {
    map: Map,
    markers: LeafletMarkers,
}

impl MapHandle {
    fn create(
        container: &HtmlElement,
        on_popup: Callback<Option<OpenPopup>>,
    ) -> Result<Self, AppError> {
        let map = leaflet::create_map(container)?;
        let markers = LeafletMarkers::new(&map, on_popup)?;
        Ok(Self { map, markers })
    }
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();
    let handle: Rc<RefCell<Option<MapHandle>>> = use_mut_ref(|| None);
    let open_popup = use_state(|| None::<OpenPopup>);

    // Create the Leaflet map once the container is in the DOM
    {
        let container_ref = container_ref.clone();
        let handle = handle.clone();
        let setter = open_popup.setter();

        use_effect_with((), move |_| {
            let on_popup = Callback::from(move |popup| setter.set(popup));
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                match MapHandle::create(&container, on_popup) {
                    Ok(map) => *handle.borrow_mut() = Some(map),
                    Err(e) => gloo::console::error!(&format!("Failed to create map: {e}")),
                }
            }

            move || {
                if let Some(map) = handle.borrow_mut().take() {
                    map.map.remove();
                }
            }
        });
    }

    // Recenter whenever the center changes
    {
        let handle = handle.clone();

        use_effect_with((props.center, props.zoom), move |((lat, lng), zoom)| {
            if let Some(map) = handle.borrow().as_ref() {
                map.map.set_view(&leaflet::lat_lng(*lat, *lng), f64::from(*zoom));
            }
            || ()
        });
    }

    // Replace every marker when the station list changes
    {
        let handle = handle.clone();
        let setter = open_popup.setter();
        let location = props.location.clone();

        use_effect_with(props.stations.clone(), move |stations| {
            setter.set(None);
            if let Some(map) = handle.borrow_mut().as_mut() {
                if let Err(e) = replace_markers(&mut map.markers, &location, stations) {
                    gloo::console::error!(&format!("Failed to draw station markers: {e}"));
                }
            }
            || ()
        });
    }

    // The detail loader only exists while its popup is open, and only for
    // markers of the location still selected
    let shown = (*open_popup)
        .as_ref()
        .filter(|open| open.target.belongs_to(&props.location));
    let popup = match shown {
        Some(open) => {
            let leaflet_popup = open.popup.clone();
            let on_render = Callback::from(move |_: ()| {
                leaflet_popup.update();
            });
            create_portal(
                html! {
                    <StationPopup
                        station={open.target.station.clone()}
                        location={open.target.location.clone()}
                        {on_render}
                    />
                },
                open.host.clone(),
            )
        }
        None => html! {},
    };

    // Leaflet owns the container's children, so the portal sits beside it
    html! {
        <>
            <div class="map-container" ref={container_ref} />
            {popup}
        </>
    }
}
