//! Data types used by the aggregation pipeline.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single rental row deserialized from the dataset CSV.
///
/// Columns are matched by header name; anything not listed here is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "weathersit")]
    pub weather_condition: String,
    /// Normalized temperature, observed in roughly `[0, 1]`.
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(rename = "hr")]
    pub hour_of_day: u8,
    pub day_type: DayType,
    #[serde(rename = "cnt")]
    pub rental_count: u64,
}

/// Whether a rental happened on a working day or on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub const ALL: [DayType; 2] = [DayType::Weekday, DayType::Weekend];

    pub fn label(self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekday" => Ok(DayType::Weekday),
            "weekend" => Ok(DayType::Weekend),
            other => Err(format!("unknown day_type '{other}'")),
        }
    }
}

impl TryFrom<String> for DayType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ordinal temperature category derived from [`Observation::temperature`].
///
/// Variant order is the ascending temperature order, so `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TemperatureBucket {
    #[serde(rename = "Very Cold")]
    VeryCold,
    Cold,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBucket {
    pub const ALL: [TemperatureBucket; 5] = [
        TemperatureBucket::VeryCold,
        TemperatureBucket::Cold,
        TemperatureBucket::Mild,
        TemperatureBucket::Warm,
        TemperatureBucket::Hot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TemperatureBucket::VeryCold => "Very Cold",
            TemperatureBucket::Cold => "Cold",
            TemperatureBucket::Mild => "Mild",
            TemperatureBucket::Warm => "Warm",
            TemperatureBucket::Hot => "Hot",
        }
    }
}

impl fmt::Display for TemperatureBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grouping key of the hourly summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HourKey {
    pub hour_of_day: u8,
    pub day_type: DayType,
}

/// Mean rentals per weather condition, restricted to the allow-list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub mean_rentals: BTreeMap<String, f64>,
}

impl WeatherSummary {
    /// Returns `(condition, mean)` pairs following `order`, skipping
    /// conditions that never appeared in the input.
    pub fn ordered<'a>(
        &'a self,
        order: &'a [&'a str],
    ) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        order
            .iter()
            .filter_map(|label| self.mean_rentals.get(*label).map(|mean| (*label, *mean)))
    }

    pub fn is_empty(&self) -> bool {
        self.mean_rentals.is_empty()
    }
}

/// Mean rentals per temperature bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub mean_rentals: BTreeMap<TemperatureBucket, f64>,
}

impl TemperatureSummary {
    pub fn is_empty(&self) -> bool {
        self.mean_rentals.is_empty()
    }
}

/// Summed rentals per `(hour_of_day, day_type)` pair present in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HourlySummary {
    #[serde(rename = "rows", serialize_with = "serialize_hourly_rows")]
    pub total_rentals: BTreeMap<HourKey, u64>,
}

impl HourlySummary {
    /// Points for one day type in ascending hour order.
    pub fn series(&self, day_type: DayType) -> Vec<(u8, u64)> {
        self.total_rentals
            .iter()
            .filter(|(key, _)| key.day_type == day_type)
            .map(|(key, total)| (key.hour_of_day, *total))
            .collect()
    }

    pub fn get(&self, hour_of_day: u8, day_type: DayType) -> Option<u64> {
        self.total_rentals
            .get(&HourKey {
                hour_of_day,
                day_type,
            })
            .copied()
    }

    pub fn len(&self) -> usize {
        self.total_rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_rentals.is_empty()
    }
}

#[derive(Serialize)]
struct HourlyRow {
    hour_of_day: u8,
    day_type: DayType,
    total_rentals: u64,
}

fn serialize_hourly_rows<S: Serializer>(
    totals: &BTreeMap<HourKey, u64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(totals.iter().map(|(key, total)| HourlyRow {
        hour_of_day: key.hour_of_day,
        day_type: key.day_type,
        total_rentals: *total,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_parses_case_insensitively() {
        assert_eq!("Weekday".parse::<DayType>(), Ok(DayType::Weekday));
        assert_eq!(" WEEKEND ".parse::<DayType>(), Ok(DayType::Weekend));
        assert!("holiday".parse::<DayType>().is_err());
    }

    #[test]
    fn test_bucket_order_follows_temperature() {
        let mut shuffled = vec![
            TemperatureBucket::Hot,
            TemperatureBucket::VeryCold,
            TemperatureBucket::Warm,
            TemperatureBucket::Cold,
            TemperatureBucket::Mild,
        ];
        shuffled.sort();
        assert_eq!(shuffled, TemperatureBucket::ALL.to_vec());
    }

    #[test]
    fn test_weather_ordered_skips_missing() {
        let summary = WeatherSummary {
            mean_rentals: BTreeMap::from([
                ("Cerah".to_string(), 15.0),
                ("Mendung".to_string(), 5.0),
            ]),
        };
        let ordered: Vec<_> = summary.ordered(&["Hujan Ringan", "Cerah", "Mendung"]).collect();
        assert_eq!(ordered, vec![("Cerah", 15.0), ("Mendung", 5.0)]);
    }

    #[test]
    fn test_hourly_serializes_as_rows() {
        let summary = HourlySummary {
            total_rentals: BTreeMap::from([(
                HourKey {
                    hour_of_day: 8,
                    day_type: DayType::Weekday,
                },
                80,
            )]),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["rows"][0]["hour_of_day"], 8);
        assert_eq!(json["rows"][0]["day_type"], "weekday");
        assert_eq!(json["rows"][0]["total_rentals"], 80);
    }

    #[test]
    fn test_temperature_summary_serializes_labels() {
        let summary = TemperatureSummary {
            mean_rentals: BTreeMap::from([(TemperatureBucket::VeryCold, 3.0)]),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["mean_rentals"]["Very Cold"], 3.0);
    }
}
