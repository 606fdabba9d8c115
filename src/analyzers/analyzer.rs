use crate::analyzers::aggregate::{hourly_summary, temperature_summary, weather_summary};
use crate::analyzers::filter::filter_weather;
use crate::analyzers::types::{HourlySummary, Observation, TemperatureSummary, WeatherSummary};
use crate::config::WEATHER_ALLOW_LIST;
use crate::parser::load_observations;
use crate::stats::LoadStats;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// The derived tables behind the dashboard, computed once per load.
///
/// All three summaries are built from the same weather-filtered snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub load_stats: LoadStats,
    pub weather: WeatherSummary,
    pub temperature: TemperatureSummary,
    pub hourly: HourlySummary,
}

impl Dashboard {
    /// Loads the dataset at `path` and builds every summary from it.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn analyze(path: &Path) -> Result<Self> {
        let observations = load_observations(path)?;
        Ok(Self::from_observations(&observations))
    }

    pub fn from_observations(observations: &[Observation]) -> Self {
        let load_stats = LoadStats::from_rows(observations);
        let kept = filter_weather(observations, WEATHER_ALLOW_LIST);

        let dashboard = Dashboard {
            generated_at: Utc::now(),
            load_stats,
            weather: weather_summary(&kept),
            temperature: temperature_summary(&kept),
            hourly: hourly_summary(&kept),
        };

        info!(
            weather_groups = dashboard.weather.mean_rentals.len(),
            temperature_groups = dashboard.temperature.mean_rentals.len(),
            rows = dashboard.load_stats.total_rows,
            hourly_groups = dashboard.hourly.len(),
            "Summaries computed"
        );

        dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::DayType;

    fn obs(weather: &str, temp: f64, hr: u8, day_type: DayType, cnt: u64) -> Observation {
        Observation {
            weather_condition: weather.to_string(),
            temperature: temp,
            hour_of_day: hr,
            day_type,
            rental_count: cnt,
        }
    }

    #[test]
    fn test_summaries_exclude_filtered_rows() {
        let rows = vec![
            obs("Cerah", 0.5, 8, DayType::Weekday, 10),
            obs("Hujan Lebat", 0.9, 8, DayType::Weekday, 1000),
            obs("Mendung", 0.5, 9, DayType::Weekend, 6),
        ];
        let dashboard = Dashboard::from_observations(&rows);

        assert_eq!(dashboard.load_stats.total_rows, 3);
        assert!(!dashboard.weather.mean_rentals.contains_key("Hujan Lebat"));
        assert_eq!(dashboard.temperature.mean_rentals.len(), 1);
        assert_eq!(dashboard.hourly.get(8, DayType::Weekday), Some(10));
    }

    #[test]
    fn test_everything_filtered_out() {
        let rows = vec![obs("Salju", 0.1, 3, DayType::Weekend, 4)];
        let dashboard = Dashboard::from_observations(&rows);

        assert!(dashboard.weather.is_empty());
        assert!(dashboard.temperature.is_empty());
        assert!(dashboard.hourly.is_empty());
        assert_eq!(dashboard.load_stats.total_rows, 1);
    }

    #[test]
    fn test_json_carries_no_filtering_counts() {
        let rows = vec![
            obs("Cerah", 0.5, 8, DayType::Weekday, 10),
            obs("Hujan Lebat", 0.9, 8, DayType::Weekday, 1000),
        ];
        let json = serde_json::to_value(Dashboard::from_observations(&rows)).unwrap();

        let stats = json["load_stats"].as_object().unwrap();
        let mut keys: Vec<_> = stats.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["total_rows", "weekday_rows", "weekend_rows"]);
        assert_eq!(json["load_stats"]["total_rows"], 2);

        let text = json.to_string();
        assert!(!text.contains("dropped"));
        assert!(!text.contains("kept"));
    }
}
