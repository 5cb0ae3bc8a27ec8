use crate::hooks::fetch_state::{Fetch, spawn_fetch};
use crate::models::error::FetchKind;
use crate::models::system_info::SystemInformation;
use crate::services::api::fetch_system_information;
use yew::prelude::*;

#[hook]
pub fn use_system_info(location: String) -> UseReducerHandle<Fetch<SystemInformation>> {
    let info = use_reducer(Fetch::default);
    let generation = use_mut_ref(|| 0u64);

    {
        let dispatcher = info.dispatcher();

        use_effect_with(location, move |location| {
            let selection = location.clone();
            let location = location.clone();

            spawn_fetch(
                dispatcher,
                &generation,
                selection,
                FetchKind::SystemInformation,
                async move { fetch_system_information(&location).await },
            );

            || ()
        });
    }

    info
}
