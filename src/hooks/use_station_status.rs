use crate::hooks::fetch_state::{Fetch, FetchAction, spawn_fetch};
use crate::models::error::FetchKind;
use crate::models::station::StationStatus;
use crate::services::api::fetch_station_status;
use yew::prelude::*;

/// Live status of one station, fetched as soon as an id is given.
///
/// A different id (or location) starts over from loading and the previous
/// status is dropped; `None` puts the hook back to idle.
#[hook]
pub fn use_station_status(
    location: String,
    station_id: Option<String>,
) -> UseReducerHandle<Fetch<StationStatus>> {
    let status = use_reducer(Fetch::default);
    let generation = use_mut_ref(|| 0u64);

    {
        let dispatcher = status.dispatcher();

        use_effect_with((location, station_id), move |(location, station_id)| {
            match station_id {
                Some(id) => {
                    let selection = format!("{location}/{id}");
                    let location = location.clone();
                    let id = id.clone();

                    spawn_fetch(
                        dispatcher,
                        &generation,
                        selection,
                        FetchKind::StationDetails,
                        async move { fetch_station_status(&location, &id).await },
                    );
                }
                None => dispatcher.dispatch(FetchAction::Reset),
            }

            || ()
        });
    }

    status
}
