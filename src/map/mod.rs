pub mod leaflet;
pub mod markers;
