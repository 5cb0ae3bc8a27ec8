use crate::components::field::fields;
use crate::hooks::fetch_state::FetchState;
use crate::hooks::use_station_status::use_station_status;
use crate::models::station::StationStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StationDetailsProps {
    pub station_id: Option<String>,
    pub location: String,
    #[prop_or_default]
    pub on_render: Callback<()>,
}

/// Live availability of one station, loaded when it mounts.
#[function_component(StationDetails)]
pub fn station_details(props: &StationDetailsProps) -> Html {
    let status = use_station_status(props.location.clone(), props.station_id.clone());

    {
        let on_render = props.on_render.clone();
        use_effect(move || {
            on_render.emit(());
            || ()
        });
    }

    match status.state() {
        FetchState::Idle => html! {
            <div class="station-details idle">{"Select a station to see details"}</div>
        },
        FetchState::Loading => html! {
            <div class="station-details loading">{"Station details are loading..."}</div>
        },
        FetchState::Error(msg) => html! {
            <div class="station-details error">{msg}</div>
        },
        FetchState::Loaded(status) => html! {
            <div class="station-details">
                <h2>{&status.station_name}</h2>
                { fields(detail_rows(status)) }
            </div>
        },
    }
}

pub fn detail_rows(status: &StationStatus) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Station ID:", status.station_id.clone()),
        ("Available Bikes:", status.num_bikes_available.to_string()),
        ("Available Docks:", status.num_docks_available.to_string()),
    ];
    if let Some(reported) = status.last_reported {
        rows.push((
            "Last Reported:",
            reported.format("%Y-%m-%d %H:%M UTC").to_string(),
        ));
    }
    rows
}
