//! Destination and agency lookup tables shared by both fallback formulas.

/// Planets priced by the comparison view, in display order.
pub const COMPARISON_PLANETS: [&str; 5] = ["Mars", "Venus", "Jupiter", "Saturn", "Neptune"];

/// The one destination that earns a discount instead of a surcharge.
pub const SPACE_STATION: &str = "Space Station";

/// Distance multiplier for destinations not in the table.
pub const DEFAULT_DISTANCE: u64 = 300;

/// Agency multiplier, in tenths, for agencies not in the table.
pub const DEFAULT_AGENCY_TENTHS: u64 = 20;

/// Share of the total removed at the space station, in tenths.
pub const SPACE_STATION_DISCOUNT_TENTHS: u64 = 2;

const DISTANCES: &[(&str, u64)] = &[
    ("mars", 150),
    ("venus", 200),
    ("jupiter", 500),
    ("saturn", 400),
    ("neptune", 800),
];

const AGENCIES_TENTHS: &[(&str, u64)] = &[
    ("express", 20),
    ("premium", 30),
    ("budget", 15),
    ("luxury", 40),
];

fn lookup(table: &[(&str, u64)], key: &str) -> Option<u64> {
    let key = key.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| *value)
}

/// Distance multiplier for a destination, case-insensitive.
#[must_use]
pub fn distance_multiplier(planet: &str) -> u64 {
    lookup(DISTANCES, planet).unwrap_or(DEFAULT_DISTANCE)
}

/// Agency multiplier in tenths (`express` is 20, meaning 2.0x).
#[must_use]
pub fn agency_multiplier_tenths(agency: &str) -> u64 {
    lookup(AGENCIES_TENTHS, agency).unwrap_or(DEFAULT_AGENCY_TENTHS)
}

/// Whether the destination is the sun.
#[must_use]
pub fn is_sun(planet: &str) -> bool {
    planet.trim().eq_ignore_ascii_case("sun")
}

/// Whether the destination is the space station.
#[must_use]
pub fn is_space_station(planet: &str) -> bool {
    planet.trim().eq_ignore_ascii_case(SPACE_STATION)
}

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_lookup() {
        assert_eq!(distance_multiplier("Mars"), 150);
        assert_eq!(distance_multiplier("NEPTUNE"), 800);
        assert_eq!(distance_multiplier(" saturn "), 400);
        assert_eq!(distance_multiplier("Pluto"), DEFAULT_DISTANCE);
        assert_eq!(distance_multiplier("Space Station"), DEFAULT_DISTANCE);
    }

    #[test]
    fn test_agency_lookup() {
        assert_eq!(agency_multiplier_tenths("Budget"), 15);
        assert_eq!(agency_multiplier_tenths("luxury"), 40);
        assert_eq!(agency_multiplier_tenths(""), DEFAULT_AGENCY_TENTHS);
        assert_eq!(agency_multiplier_tenths("WarpSpeed Couriers"), DEFAULT_AGENCY_TENTHS);
    }

    #[test]
    fn test_sun_and_station_detection() {
        assert!(is_sun("sun"));
        assert!(is_sun("  SUN "));
        assert!(!is_sun("Sunrise"));
        assert!(is_space_station("space station"));
        assert!(!is_space_station("Space"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mars"), "Mars");
        assert_eq!(capitalize("express"), "Express");
        assert_eq!(capitalize("space station"), "Space station");
        assert_eq!(capitalize(""), "");
    }
}
