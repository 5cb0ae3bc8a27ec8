use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub cross_street: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Number of docking points. Some feeds omit it; absent counts as 0.
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub is_virtual_station: bool,
}

impl Station {
    pub fn capacity_or_zero(&self) -> u32 {
        self.capacity.unwrap_or(0)
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_virtual_station {
            "Virtual Station"
        } else {
            "Real Station"
        }
    }
}

/// Live availability of a single station.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StationStatus {
    pub station_id: String,
    pub station_name: String,
    pub num_bikes_available: u32,
    pub num_docks_available: u32,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_reported: Option<DateTime<Utc>>,
}

/// Figures the system info panel derives from the loaded station list.
#[derive(Clone, Debug, PartialEq)]
pub struct StationSummary {
    pub count: usize,
    /// `None` when there are no stations to sum over.
    pub total_capacity: Option<u64>,
}

impl StationSummary {
    pub fn from_stations(stations: &[Station]) -> Self {
        let total_capacity = if stations.is_empty() {
            None
        } else {
            Some(
                stations
                    .iter()
                    .map(|s| u64::from(s.capacity_or_zero()))
                    .sum(),
            )
        };

        Self {
            count: stations.len(),
            total_capacity,
        }
    }

    pub fn capacity_label(&self) -> String {
        match self.total_capacity {
            Some(total) => total.to_string(),
            None => "No stations available".to_string(),
        }
    }
}
