use serde::Serialize;

use crate::analyzers::types::{DayType, Observation};

/// Row counts of the dataset as parsed, before any weather filtering.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct LoadStats {
    pub total_rows: usize,

    // parsed rows by day type
    pub weekday_rows: usize,
    pub weekend_rows: usize,
}

impl LoadStats {
    pub fn from_rows(loaded: &[Observation]) -> Self {
        let mut s = LoadStats {
            total_rows: loaded.len(),
            ..Default::default()
        };

        for o in loaded {
            match o.day_type {
                DayType::Weekday => s.weekday_rows += 1,
                DayType::Weekend => s.weekend_rows += 1,
            }
        }

        s
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    pub fn weekend_pct(&self) -> f64 {
        Self::pct(self.weekend_rows, self.total_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(weather: &str, day_type: DayType) -> Observation {
        Observation {
            weather_condition: weather.to_string(),
            temperature: 0.5,
            hour_of_day: 8,
            day_type,
            rental_count: 1,
        }
    }

    #[test]
    fn test_pct_with_zero_total() {
        assert_eq!(LoadStats::pct(10, 0), 0.0);
    }

    #[test]
    fn test_pct_normal_values() {
        assert_eq!(LoadStats::pct(50, 100), 50.0);
        assert_eq!(LoadStats::pct(1, 4), 25.0);
    }

    #[test]
    fn test_from_rows_counts_every_parsed_row() {
        let loaded = vec![
            obs("Cerah", DayType::Weekday),
            obs("Salju", DayType::Weekday),
            obs("Mendung", DayType::Weekend),
            obs("Cerah", DayType::Weekday),
        ];
        let stats = LoadStats::from_rows(&loaded);

        assert_eq!(stats.total_rows, 4);
        assert_eq!(stats.weekday_rows, 3);
        assert_eq!(stats.weekend_rows, 1);
        assert_eq!(stats.weekend_pct(), 25.0);
    }

    #[test]
    fn test_from_rows_empty() {
        let stats = LoadStats::from_rows(&[]);
        assert_eq!(stats, LoadStats::default());
        assert_eq!(stats.weekend_pct(), 0.0);
    }
}
