use crate::hooks::fetch_state::FetchState;
use crate::models::station::Station;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: FetchState<Vec<Station>>,
}

/// Loading and error banner for the station list.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        FetchState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        },
        FetchState::Error(msg) => html! {
            <div class="status error">
                <p>{msg}</p>
            </div>
        },
        FetchState::Idle | FetchState::Loaded(_) => html! {},
    }
}
