use std::rc::Rc;
use yew::prelude::*;

use crate::components::field::fields;
use crate::components::location_selector::LocationSelector;
use crate::hooks::fetch_state::FetchState;
use crate::hooks::use_system_info::use_system_info;
use crate::models::location::{LocationTable, capitalize};
use crate::models::station::{Station, StationSummary};
use crate::models::system_info::SystemInformation;

#[derive(Properties, PartialEq)]
pub struct SystemInfoProps {
    pub location: String,
    pub locations: Rc<LocationTable>,
    pub stations: Rc<Vec<Station>>,
    pub on_location_change: Callback<String>,
}

/// Location selector plus the operator card for the selected location.
///
/// The operator metadata is fetched here. Station count and capacity come
/// from the station list passed in, so they render whether or not that fetch
/// succeeded; they are only hidden while it is pending.
#[function_component(SystemInfo)]
pub fn system_info(props: &SystemInfoProps) -> Html {
    let info = use_system_info(props.location.clone());
    let summary = StationSummary::from_stations(&props.stations);

    let body = match info.state() {
        FetchState::Idle | FetchState::Loading => html! {
            <p class="system-info-loading">{"System Information is loading..."}</p>
        },
        FetchState::Loaded(info) => html! {
            <>
                { fields(metadata_rows(info)) }
                { fields(summary_rows(&props.location, &summary)) }
            </>
        },
        FetchState::Error(msg) => html! {
            <>
                <p class="system-info-error">{msg}</p>
                { fields(summary_rows(&props.location, &summary)) }
            </>
        },
    };

    html! {
        <div class="system-info-container">
            <LocationSelector
                location={props.location.clone()}
                locations={props.locations.clone()}
                on_change={props.on_location_change.clone()}
            />

            <div class="system-info-card">
                <h3 class="system-info-title">{"System Information"}</h3>
                <div class="system-info-text">{body}</div>
            </div>
        </div>
    }
}

pub fn metadata_rows(info: &SystemInformation) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("System ID:", info.system_id.clone()),
        ("System Name:", info.name.clone()),
    ];
    if let Some(operator) = &info.operator {
        rows.push(("Operator:", operator.clone()));
    }
    if let Some(timezone) = &info.timezone {
        rows.push(("Timezone:", timezone.clone()));
    }
    if let Some(contact) = info.contact() {
        rows.push(("Contact:", contact));
    }
    rows
}

pub fn summary_rows(location: &str, summary: &StationSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Location:", capitalize(location)),
        ("Number of Stations:", summary.count.to_string()),
        ("Total Capacity:", summary.capacity_label()),
    ]
}
