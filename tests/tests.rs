#[cfg(test)]
mod tests {
    use bike_stations_map::components::station_details::detail_rows;
    use bike_stations_map::components::system_info::{metadata_rows, summary_rows};
    use bike_stations_map::hooks::fetch_state::{
        Fetch, FetchAction, FetchState, RequestTag, begin_request,
    };
    use bike_stations_map::map::markers::{MarkerLayer, replace_markers};
    use bike_stations_map::models::{
        error::{AppError, FetchKind},
        location::LocationTable,
        station::{Station, StationStatus, StationSummary},
        system_info::SystemInformation,
    };
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::functional::Reducible;

    // Helper function to create test stations
    fn create_test_stations() -> Vec<Station> {
        serde_json::from_str(
            r#"[
                {
                    "station_id": "1",
                    "name": "Station 1",
                    "address": "Address 1",
                    "cross_street": "Cross Street 1",
                    "lat": 45.4642,
                    "lon": 9.19,
                    "capacity": 10,
                    "is_virtual_station": false
                },
                {
                    "station_id": "2",
                    "name": "Station 2",
                    "address": "Address 2",
                    "cross_street": "Cross Street 2",
                    "lat": 45.47,
                    "lon": 9.2,
                    "capacity": 15,
                    "is_virtual_station": true
                }
            ]"#,
        )
        .unwrap()
    }

    fn station_status(id: &str, bikes: u32, docks: u32) -> StationStatus {
        StationStatus {
            station_id: id.to_string(),
            station_name: format!("Station {id}"),
            num_bikes_available: bikes,
            num_docks_available: docks,
            last_reported: None,
        }
    }

    fn row<'a>(rows: &'a [(&'static str, String)], label: &str) -> Option<&'a str> {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value.as_str())
    }

    #[derive(Default)]
    struct CountingLayer {
        markers: usize,
    }

    impl MarkerLayer for CountingLayer {
        fn clear(&mut self) {
            self.markers = 0;
        }

        fn add(&mut self, _location: &str, _station: &Station) -> Result<(), AppError> {
            self.markers += 1;
            Ok(())
        }
    }

    /// Stands in for one fetch hook: a request counter plus every action
    /// it dispatched.
    #[derive(Default)]
    struct RecordingHook {
        generation: RefCell<u64>,
        actions: RefCell<Vec<FetchAction<()>>>,
    }

    impl RecordingHook {
        fn location_changed(&self, location: &str) {
            begin_request(&self.generation, location, |action: FetchAction<()>| {
                self.actions.borrow_mut().push(action)
            });
        }

        fn begun(&self) -> Vec<String> {
            self.actions
                .borrow()
                .iter()
                .filter_map(|action| match action {
                    FetchAction::Begin(tag) => Some(tag.selection.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(error.to_string(), "Server responded with 502: Bad Gateway");

        let error = AppError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_fetch_kind_messages() {
        assert_eq!(FetchKind::Stations.message(), "Failed to fetch stations");
        assert_eq!(
            FetchKind::StationDetails.message(),
            "Failed to fetch station details"
        );
        assert_eq!(
            FetchKind::SystemInformation.message(),
            "Failed to load system information"
        );
    }

    // ===== Model Tests =====

    #[test]
    fn test_station_list_deserialization() {
        let stations = create_test_stations();

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station_id, "1");
        assert_eq!(stations[0].cross_street.as_deref(), Some("Cross Street 1"));
        assert_eq!(stations[1].kind_label(), "Virtual Station");
    }

    #[test]
    fn test_system_information_deserialization() {
        let json = r#"{
            "system_id": "milan",
            "email": "info@milanbikes.com",
            "operator": "Milan Bike Share",
            "timezone": "Europe/Rome",
            "phone_number": "+39 123 456 789",
            "name": "Milan Bike System"
        }"#;

        let info: SystemInformation = serde_json::from_str(json).unwrap();
        let rows = metadata_rows(&info);

        assert_eq!(row(&rows, "System ID:"), Some("milan"));
        assert_eq!(row(&rows, "System Name:"), Some("Milan Bike System"));
        assert_eq!(row(&rows, "Operator:"), Some("Milan Bike Share"));
        assert_eq!(row(&rows, "Timezone:"), Some("Europe/Rome"));
        assert_eq!(
            row(&rows, "Contact:"),
            Some("info@milanbikes.com / +39 123 456 789")
        );
    }

    // ===== System Info Panel Tests =====

    #[test]
    fn test_summary_for_milan_stations() {
        let stations = create_test_stations();
        let rows = summary_rows("milan", &StationSummary::from_stations(&stations));

        assert_eq!(row(&rows, "Location:"), Some("Milan"));
        assert_eq!(row(&rows, "Number of Stations:"), Some("2"));
        assert_eq!(row(&rows, "Total Capacity:"), Some("25"));
    }

    #[test]
    fn test_summary_without_stations() {
        let rows = summary_rows("milan", &StationSummary::from_stations(&[]));

        assert_eq!(row(&rows, "Number of Stations:"), Some("0"));
        assert_eq!(row(&rows, "Total Capacity:"), Some("No stations available"));
    }

    #[test]
    fn test_missing_capacity_counts_as_zero() {
        let mut stations = create_test_stations();
        stations[1].capacity = None;

        let summary = StationSummary::from_stations(&stations);
        assert_eq!(summary.total_capacity, Some(10));
    }

    // ===== Station Detail Tests =====

    #[test]
    fn test_station_detail_rows() {
        let json = r#"{
            "station_id": "1",
            "station_name": "Station 1",
            "num_bikes_available": 5,
            "num_docks_available": 10
        }"#;
        let status: StationStatus = serde_json::from_str(json).unwrap();
        let rows = detail_rows(&status);

        assert_eq!(status.station_name, "Station 1");
        assert_eq!(row(&rows, "Station ID:"), Some("1"));
        assert_eq!(row(&rows, "Available Bikes:"), Some("5"));
        assert_eq!(row(&rows, "Available Docks:"), Some("10"));
        assert_eq!(row(&rows, "Last Reported:"), None);
    }

    #[test]
    fn test_station_detail_rows_with_last_reported() {
        let mut status = station_status("1", 5, 10);
        status.last_reported = chrono::DateTime::from_timestamp(1_700_000_000, 0);

        let rows = detail_rows(&status);
        assert_eq!(row(&rows, "Last Reported:"), Some("2023-11-14 22:13 UTC"));
    }

    #[test]
    fn test_switching_station_discards_previous_status() {
        let two = RequestTag::new("oslo/2", 1);
        let one = RequestTag::new("oslo/1", 2);

        let fetch: Rc<Fetch<StationStatus>> = Rc::default();
        let fetch = fetch.reduce(FetchAction::Begin(two.clone()));
        let fetch = fetch.reduce(FetchAction::Resolve(two.clone(), Ok(station_status("2", 8, 7))));
        assert_eq!(fetch.state().data().unwrap().station_id, "2");

        let fetch = fetch.reduce(FetchAction::Begin(one.clone()));
        assert_eq!(fetch.state(), &FetchState::Loading);

        // A late duplicate for station 2 must not resurface.
        let fetch = fetch.reduce(FetchAction::Resolve(two, Ok(station_status("2", 8, 7))));
        assert!(fetch.state().is_loading());

        let fetch = fetch.reduce(FetchAction::Resolve(one, Ok(station_status("1", 5, 10))));
        assert_eq!(fetch.state().data().unwrap().station_id, "1");
    }

    #[test]
    fn test_station_detail_failure_message() {
        let tag = RequestTag::new("oslo/1", 1);
        let fetch: Rc<Fetch<StationStatus>> = Rc::default();
        let fetch = fetch.reduce(FetchAction::Begin(tag.clone()));
        let fetch = fetch.reduce(FetchAction::Resolve(
            tag,
            Err(FetchKind::StationDetails.message().to_string()),
        ));

        assert_eq!(fetch.state().error(), Some("Failed to fetch station details"));
    }

    // ===== Orchestrator Tests =====

    #[test]
    fn test_failed_station_fetch_shows_error_and_no_markers() {
        let oslo = RequestTag::new("oslo", 1);
        let milan = RequestTag::new("milan", 2);

        let fetch: Rc<Fetch<Vec<Station>>> = Rc::default();
        let fetch = fetch.reduce(FetchAction::Begin(oslo.clone()));
        let fetch = fetch.reduce(FetchAction::Resolve(oslo, Ok(create_test_stations())));

        let fetch = fetch.reduce(FetchAction::Begin(milan.clone()));
        let fetch = fetch.reduce(FetchAction::Resolve(
            milan,
            Err(FetchKind::Stations.message().to_string()),
        ));

        assert_eq!(fetch.state().error(), Some("Failed to fetch stations"));

        let visible: Rc<Vec<Station>> = fetch.state().data().cloned().unwrap_or_default();
        let mut layer = CountingLayer { markers: 2 };
        replace_markers(&mut layer, "milan", &visible).unwrap();
        assert_eq!(layer.markers, 0);
    }

    #[test]
    fn test_location_change_invalidates_station_list() {
        let oslo = RequestTag::new("oslo", 1);
        let fetch: Rc<Fetch<Vec<Station>>> = Rc::default();
        let fetch = fetch.reduce(FetchAction::Begin(oslo.clone()));
        let fetch = fetch.reduce(FetchAction::Resolve(oslo.clone(), Ok(create_test_stations())));
        assert_eq!(fetch.state().data().unwrap().len(), 2);

        let fetch = fetch.reduce(FetchAction::Begin(RequestTag::new("milan", 2)));
        assert!(fetch.state().data().is_none());

        // Oslo's list arriving again late is not mixed in.
        let fetch = fetch.reduce(FetchAction::Resolve(oslo, Ok(create_test_stations())));
        assert!(fetch.state().is_loading());
        assert_eq!(fetch.current().unwrap().selection, "milan");
    }

    #[test]
    fn test_each_selection_fetches_stations_and_system_info_once() {
        let table = LocationTable::default();
        let stations = RecordingHook::default();
        let system_info = RecordingHook::default();

        let mut current = "oslo".to_string();
        for requested in ["oslo", "milan", "paris", "milan", "bergen"] {
            if let Some(next) = table.selection_change(&current, requested) {
                current = next.key();
                stations.location_changed(&current);
                system_info.location_changed(&current);
            }
        }

        assert_eq!(current, "bergen");
        assert_eq!(stations.begun(), vec!["milan", "bergen"]);
        assert_eq!(system_info.begun(), vec!["milan", "bergen"]);
    }

    #[test]
    fn test_every_location_has_a_center() {
        let table = LocationTable::default();
        assert_eq!(table.iter().count(), 3);

        for location in table.iter() {
            let found = table.find(&location.key()).unwrap();
            let (lat, lng) = found.center();
            assert!(lat.is_finite() && lng.is_finite());
        }
        assert!(table.find("stockholm").is_none());
    }
}
