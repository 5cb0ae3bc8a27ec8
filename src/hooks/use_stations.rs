use crate::hooks::fetch_state::{Fetch, spawn_fetch};
use crate::models::error::{AppError, FetchKind};
use crate::models::station::Station;
use crate::services::api::fetch_stations;
use yew::prelude::*;

pub type StationsHandle = UseReducerHandle<Fetch<Vec<Station>>>;

/// Station list of the selected location, refetched whenever it changes.
#[hook]
pub fn use_stations(location: String) -> StationsHandle {
    let stations = use_reducer(Fetch::default);
    let generation = use_mut_ref(|| 0u64);

    {
        let dispatcher = stations.dispatcher();

        use_effect_with(location, move |location| {
            let selection = location.clone();
            let location = location.clone();

            spawn_fetch(dispatcher, &generation, selection, FetchKind::Stations, async move {
                let stations = fetch_stations(&location).await?;
                gloo::console::log!(&format!(
                    "Fetched {} stations for {location}",
                    stations.len()
                ));
                Ok::<_, AppError>(stations)
            });

            || () // Cleanup
        });
    }

    stations
}
