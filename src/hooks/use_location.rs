use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::location::LocationTable;

/// Handle returned by `use_location` hook
#[derive(Clone, PartialEq)]
pub struct LocationHandle {
    /// Lower-cased key of the selected location
    pub location: String,
    pub set_location: Callback<String>,
}

/// Selected-location state, starting from `Config::DEFAULT_LOCATION`.
///
/// Only keys of `locations` that differ from the current one are accepted,
/// so every accepted selection is exactly one change of the location.
#[hook]
pub fn use_location(locations: Rc<LocationTable>) -> LocationHandle {
    let location = use_state(|| Config::DEFAULT_LOCATION.to_string());

    let set_location = {
        let location = location.clone();
        Callback::from(move |requested: String| {
            if let Some(next) = locations.selection_change(&location, &requested) {
                let key = next.key();
                gloo::console::log!(&format!("Location changed to {key}"));
                location.set(key);
            }
        })
    };

    LocationHandle {
        location: (*location).clone(),
        set_location,
    }
}
