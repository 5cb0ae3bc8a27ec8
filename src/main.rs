use std::rc::Rc;
use yew::prelude::*;

use bike_stations_map::components::BikesMap;
use bike_stations_map::models::location::LocationTable;

#[function_component(App)]
fn app() -> Html {
    let locations = use_memo((), |_| LocationTable::default());

    html! {
        <ContextProvider<Rc<LocationTable>> context={locations}>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Bike Stations Map"}</h1>
                </header>

                <main class="app-main">
                    <BikesMap />
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<Rc<LocationTable>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
