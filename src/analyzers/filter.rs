use crate::analyzers::types::Observation;

/// Keeps only the observations whose weather condition is in `allow_list`.
///
/// Matching is exact and case-sensitive. Dropped rows are not reported.
pub fn filter_weather(observations: &[Observation], allow_list: &[&str]) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| allow_list.contains(&o.weather_condition.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::DayType;
    use crate::config::WEATHER_ALLOW_LIST;

    fn obs(weather: &str, cnt: u64) -> Observation {
        Observation {
            weather_condition: weather.to_string(),
            temperature: 0.5,
            hour_of_day: 12,
            day_type: DayType::Weekday,
            rental_count: cnt,
        }
    }

    #[test]
    fn test_filter_drops_unlisted_conditions() {
        let rows = vec![
            obs("Cerah", 10),
            obs("Hujan Lebat", 1),
            obs("Mendung", 5),
            obs("cerah", 7),
        ];
        let kept = filter_weather(&rows, WEATHER_ALLOW_LIST);

        assert_eq!(kept, vec![obs("Cerah", 10), obs("Mendung", 5)]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = vec![obs("Cerah", 10), obs("Salju", 2), obs("Hujan Ringan", 3)];
        let once = filter_weather(&rows, WEATHER_ALLOW_LIST);
        let twice = filter_weather(&once, WEATHER_ALLOW_LIST);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_weather(&[], WEATHER_ALLOW_LIST).is_empty());
    }
}
