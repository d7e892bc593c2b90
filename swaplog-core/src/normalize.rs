//! Field normalization for the two identifying columns
//!
//! Sheet rows are typed by hand on the hangar floor: tail numbers arrive
//! wrapped in quotes pasted from chat messages, and position labels use `#`
//! as a typo-prone separator ("SEC#3"). Normalization is total: any input
//! string produces a usable identifier, possibly empty.

/// Normalize a raw (aircraft, position) pair
///
/// - Upper-cases both fields and strips leading/trailing whitespace
/// - Strips straight and curly double quotes from the aircraft id
/// - Replaces a literal `#` in the position with a space
pub fn normalize(raw_aircraft_id: &str, raw_position: &str) -> (String, String) {
    (
        normalize_aircraft_id(raw_aircraft_id),
        normalize_position(raw_position),
    )
}

/// Normalize a tail-number identifier
pub fn normalize_aircraft_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '"' | '\u{201C}' | '\u{201D}'))
        .collect::<String>()
        .trim()
        .to_uppercase()
}

/// Normalize a slot identifier within the aircraft
pub fn normalize_position(raw: &str) -> String {
    raw.trim().replace('#', " ").trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_and_trims() {
        let (a, p) = normalize("  hs-pgy ", " sec 3  ");
        assert_eq!(a, "HS-PGY");
        assert_eq!(p, "SEC 3");
    }

    #[test]
    fn test_strips_straight_quotes_from_aircraft() {
        assert_eq!(normalize_aircraft_id("\"HS-PGY\""), "HS-PGY");
    }

    #[test]
    fn test_strips_curly_quotes_from_aircraft() {
        assert_eq!(normalize_aircraft_id("\u{201C}hs-pgy\u{201D}"), "HS-PGY");
    }

    #[test]
    fn test_hash_separator_becomes_space() {
        assert_eq!(normalize_position("sec#3"), "SEC 3");
        assert_eq!(normalize_position("ELAC#1"), "ELAC 1");
    }

    #[test]
    fn test_quotes_not_stripped_from_position() {
        // Only the aircraft column gets quote stripping
        assert_eq!(normalize_position("\"sec 3\""), "\"SEC 3\"");
    }

    #[test]
    fn test_empty_inputs_stay_empty() {
        let (a, p) = normalize("", "   ");
        assert_eq!(a, "");
        assert_eq!(p, "");
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        assert_eq!(normalize_aircraft_id(" hs - pgy "), "HS - PGY");
    }
}
