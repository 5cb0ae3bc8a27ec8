//! Bike-share station map: a Yew front end over the `/bike-stations` REST API.

pub mod components;
pub mod config;
pub mod hooks;
pub mod map;
pub mod models;
pub mod services;
