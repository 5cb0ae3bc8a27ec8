use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::location::LocationTable;

#[derive(Properties, PartialEq)]
pub struct LocationSelectorProps {
    pub location: String,
    pub locations: Rc<LocationTable>,
    pub on_change: Callback<String>,
}

/// Location selector dropdown component
#[function_component(LocationSelector)]
pub fn location_selector(props: &LocationSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <>
            <label for="location-select" class="system-info-label">{"Select Location:"}</label>
            <select
                id="location-select"
                class="system-info-select"
                onchange={on_change}
            >
                {
                    props.locations.iter().map(|loc| {
                        let key = loc.key();
                        let selected = key == props.location;
                        html! {
                            <option value={key} {selected}>{loc.name}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </>
    }
}
