pub mod fetch_state;
pub mod use_location;
pub mod use_station_status;
pub mod use_stations;
pub mod use_system_info;

pub use fetch_state::{Fetch, FetchAction, FetchState, RequestTag};
