use crate::components::station_details::StationDetails;
use crate::models::station::Station;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StationPopupProps {
    pub station: Station,
    pub location: String,
    /// Called after the content changed, so the popup can be re-measured
    #[prop_or_default]
    pub on_render: Callback<()>,
}

/// Contents of a marker popup.
#[function_component(StationPopup)]
pub fn station_popup(props: &StationPopupProps) -> Html {
    let station = &props.station;

    {
        let on_render = props.on_render.clone();
        use_effect(move || {
            on_render.emit(());
            || ()
        });
    }

    html! {
        <div class="station-popup-content">
            <strong>{&station.name}</strong><br />
            {station.kind_label()}<br />
            <strong>{"Capacity:"}</strong>{" "}{station.capacity_or_zero().to_string()}<br />
            <div class="station-popup-details">
                <StationDetails
                    station_id={Some(station.station_id.clone())}
                    location={props.location.clone()}
                    on_render={props.on_render.clone()}
                />
            </div>
        </div>
    }
}
