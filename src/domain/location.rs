//! Static location reference data driving the dependent country/state/city
//! dropdowns, plus the per-country phone dial codes.
//!
//! The table is read-only and its declared order is the order dropdown options
//! are presented in.

/// Country -> states -> cities, in presentation order.
static LOCATION_TABLE: &[(&str, &[(&str, &[&str])])] = &[
    (
        "USA",
        &[
            (
                "California",
                &["Los Angeles", "San Francisco", "San Diego", "Sacramento"],
            ),
            ("Texas", &["Houston", "Dallas", "Austin", "San Antonio"]),
            ("Florida", &["Miami", "Orlando", "Tampa", "Jacksonville"]),
            (
                "New York",
                &["New York City", "Buffalo", "Rochester", "Albany"],
            ),
            ("Illinois", &["Chicago", "Springfield", "Peoria", "Rockford"]),
        ],
    ),
    (
        "Canada",
        &[
            ("Ontario", &["Toronto", "Ottawa", "Hamilton", "London"]),
            ("Quebec", &["Montreal", "Quebec City", "Gatineau", "Laval"]),
            (
                "British Columbia",
                &["Vancouver", "Victoria", "Surrey", "Burnaby"],
            ),
            ("Alberta", &["Calgary", "Edmonton", "Red Deer", "Lethbridge"]),
            ("Manitoba", &["Winnipeg", "Brandon", "Missinippi", "Thompson"]),
        ],
    ),
    (
        "India",
        &[
            ("Maharashtra", &["Mumbai", "Pune", "Nagpur", "Aurangabad"]),
            ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai", "Salem"]),
            ("Karnataka", &["Bangalore", "Mangalore", "Mysore", "Belgaum"]),
            ("Delhi", &["New Delhi", "Delhi", "Gurgaon", "Noida"]),
            ("Uttar Pradesh", &["Lucknow", "Kanpur", "Varanasi", "Agra"]),
        ],
    ),
    (
        "UK",
        &[
            ("England", &["London", "Manchester", "Birmingham", "Leeds"]),
            ("Scotland", &["Edinburgh", "Glasgow", "Aberdeen", "Dundee"]),
            ("Wales", &["Cardiff", "Swansea", "Newport", "Caerphilly"]),
            (
                "Northern Ireland",
                &["Belfast", "Derry", "Armagh", "Lisburn"],
            ),
        ],
    ),
    (
        "Australia",
        &[
            (
                "New South Wales",
                &["Sydney", "Newcastle", "Wollongong", "Central Coast"],
            ),
            ("Victoria", &["Melbourne", "Geelong", "Ballarat", "Bendigo"]),
            (
                "Queensland",
                &["Brisbane", "Gold Coast", "Sunshine Coast", "Townsville"],
            ),
            (
                "Western Australia",
                &["Perth", "Fremantle", "Mandurah", "Bunbury"],
            ),
            (
                "South Australia",
                &["Adelaide", "Mount Gambier", "Victor Harbor", "Port Pirie"],
            ),
        ],
    ),
];

/// Expected phone dial code per country.
static DIAL_CODES: &[(&str, &str)] = &[
    ("USA", "+1"),
    ("Canada", "+1"),
    ("India", "+91"),
    ("UK", "+44"),
    ("Australia", "+61"),
];

/// All known countries, in declared order.
pub fn countries() -> impl Iterator<Item = &'static str> {
    LOCATION_TABLE.iter().map(|(country, _)| *country)
}

/// States of a country, in declared order, or `None` for an unknown country.
pub fn states(country: &str) -> Option<Vec<&'static str>> {
    LOCATION_TABLE
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, states)| states.iter().map(|(state, _)| *state).collect())
}

/// Cities of a (country, state) pair, in declared order, or `None` when the
/// pair does not resolve in the table.
pub fn cities(country: &str, state: &str) -> Option<Vec<&'static str>> {
    LOCATION_TABLE
        .iter()
        .find(|(name, _)| *name == country)
        .and_then(|(_, states)| states.iter().find(|(name, _)| *name == state))
        .map(|(_, cities)| cities.to_vec())
}

/// Whether `state` belongs to `country`.
pub fn contains_state(country: &str, state: &str) -> bool {
    states(country).is_some_and(|s| s.contains(&state))
}

/// Whether `city` belongs to `state` within `country`.
pub fn contains_city(country: &str, state: &str, city: &str) -> bool {
    cities(country, state).is_some_and(|c| c.contains(&city))
}

/// Dial code expected for a country's phone numbers, if known.
pub fn dial_code(country: &str) -> Option<&'static str> {
    DIAL_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_in_declared_order() {
        let all: Vec<_> = countries().collect();
        assert_eq!(all, vec!["USA", "Canada", "India", "UK", "Australia"]);
    }

    #[test]
    fn test_states_of_known_country() {
        let states = states("USA").unwrap();
        assert_eq!(
            states,
            vec!["California", "Texas", "Florida", "New York", "Illinois"]
        );
    }

    #[test]
    fn test_states_of_unknown_country() {
        assert!(states("Atlantis").is_none());
    }

    #[test]
    fn test_cities_of_known_pair() {
        let cities = cities("USA", "California").unwrap();
        assert_eq!(
            cities,
            vec!["Los Angeles", "San Francisco", "San Diego", "Sacramento"]
        );
    }

    #[test]
    fn test_cities_require_matching_parent() {
        // "Ontario" exists, but not under USA
        assert!(cities("USA", "Ontario").is_none());
        assert!(cities("Canada", "Ontario").is_some());
    }

    #[test]
    fn test_every_state_has_cities() {
        for country in countries() {
            for state in states(country).unwrap() {
                let cities = cities(country, state).unwrap();
                assert!(
                    !cities.is_empty(),
                    "no cities for {country}/{state}"
                );
            }
        }
    }

    #[test]
    fn test_membership_checks() {
        assert!(contains_state("UK", "Scotland"));
        assert!(!contains_state("UK", "California"));
        assert!(contains_city("India", "Karnataka", "Mysore"));
        assert!(!contains_city("India", "Karnataka", "Chennai"));
    }

    #[test]
    fn test_dial_codes() {
        assert_eq!(dial_code("USA"), Some("+1"));
        assert_eq!(dial_code("Canada"), Some("+1"));
        assert_eq!(dial_code("India"), Some("+91"));
        assert_eq!(dial_code("UK"), Some("+44"));
        assert_eq!(dial_code("Australia"), Some("+61"));
        assert_eq!(dial_code("Atlantis"), None);
    }
}
