//! Display names for the dataset's category codes
//!
//! Keeps the code → label mapping out of the rendering layer so every chart
//! names categories the same way.

/// Label for the workingday flag (0 = weekend, 1 = weekday)
pub fn day_type_label(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Weekend"),
        1 => Some("Weekday"),
        _ => None,
    }
}

/// Label for a weather condition code (domain 1-4)
pub fn weather_label(code: i64) -> Option<&'static str> {
    match code {
        1 => Some("Clear"),
        2 => Some("Mist"),
        3 => Some("Light rain/snow"),
        4 => Some("Heavy rain/snow"),
        _ => None,
    }
}

/// Label for a season code (domain 1-4)
pub fn season_label(code: i64) -> Option<&'static str> {
    match code {
        1 => Some("Spring"),
        2 => Some("Summer"),
        3 => Some("Fall"),
        4 => Some("Winter"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_labels() {
        assert_eq!(day_type_label(0), Some("Weekend"));
        assert_eq!(day_type_label(1), Some("Weekday"));
        assert_eq!(day_type_label(2), None);
    }

    #[test]
    fn test_weather_labels_cover_domain() {
        for code in 1..=4 {
            assert!(weather_label(code).is_some());
        }
        assert_eq!(weather_label(0), None);
        assert_eq!(weather_label(5), None);
    }

    #[test]
    fn test_season_labels() {
        assert_eq!(season_label(1), Some("Spring"));
        assert_eq!(season_label(4), Some("Winter"));
        assert_eq!(season_label(5), None);
    }
}
