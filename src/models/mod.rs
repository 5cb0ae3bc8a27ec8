pub mod error;
pub mod location;
pub mod station;
pub mod system_info;
