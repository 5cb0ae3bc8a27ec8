/// A city the app knows how to show, with the point the map centers on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    /// Lower-cased name, used both as selection state and as the API path segment.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn center(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

const BUILTIN_LOCATIONS: [Location; 3] = [
    Location::new("Oslo", 59.9139, 10.7522),
    Location::new("Milan", 45.4642, 9.1900),
    Location::new("Bergen", 60.3929, 5.3242),
];

/// Immutable table of selectable locations, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTable {
    locations: Vec<Location>,
}

impl LocationTable {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Looks a location up by its lower-cased key.
    pub fn find(&self, key: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Decides whether picking `requested` while `current` is selected
    /// changes the selection. Re-picking the current location and keys
    /// missing from the table both leave it as it is.
    pub fn selection_change(&self, current: &str, requested: &str) -> Option<&Location> {
        if current == requested {
            return None;
        }
        self.find(requested)
    }
}

impl Default for LocationTable {
    fn default() -> Self {
        Self::new(BUILTIN_LOCATIONS.to_vec())
    }
}

/// Upper-cases the first character, e.g. `"milan"` -> `"Milan"`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reselecting_current_location_is_no_change() {
        let table = LocationTable::default();
        assert!(table.selection_change("oslo", "oslo").is_none());
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        let table = LocationTable::default();
        assert!(table.selection_change("oslo", "paris").is_none());
        assert!(table.selection_change("oslo", "Milan").is_none());
    }

    #[test]
    fn test_new_location_is_one_change() {
        let table = LocationTable::default();
        let changed = table.selection_change("oslo", "milan");
        assert_eq!(changed.map(Location::key).as_deref(), Some("milan"));
    }

    #[test]
    fn test_default_table_contents() {
        let table = LocationTable::default();
        let keys: Vec<String> = table.iter().map(Location::key).collect();
        assert_eq!(keys, vec!["oslo", "milan", "bergen"]);
    }

    #[test]
    fn test_find_is_keyed_by_lowercase_name() {
        let table = LocationTable::default();
        let milan = table.find("milan").unwrap();
        assert_eq!(milan.name, "Milan");
        assert_eq!(milan.center(), (45.4642, 9.1900));

        assert!(table.find("Milan").is_none());
        assert!(table.find("paris").is_none());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("oslo"), "Oslo");
        assert_eq!(capitalize("B"), "B");
        assert_eq!(capitalize(""), "");
    }
}
