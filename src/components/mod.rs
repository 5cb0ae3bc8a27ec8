pub mod bikes_map;
pub mod field;
pub mod location_selector;
pub mod map_view;
pub mod station_details;
pub mod station_popup;
pub mod status;
pub mod system_info;

pub use bikes_map::BikesMap;
pub use station_details::StationDetails;
