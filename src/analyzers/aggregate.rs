use crate::analyzers::bucket::bucketize;
use crate::analyzers::types::{
    HourKey, HourlySummary, Observation, TemperatureSummary, WeatherSummary,
};
use crate::analyzers::utility::{mean, total};
use std::collections::BTreeMap;

/// Partitions `observations` by `key` and reduces each group's `value`s with
/// `aggregate`.
///
/// One entry is produced per distinct key present in the input; absent keys
/// are never synthesized. `aggregate` is only ever called on a non-empty
/// slice.
pub fn summarize_by<K, V, A, FK, FV, FA>(
    observations: &[Observation],
    key: FK,
    value: FV,
    aggregate: FA,
) -> BTreeMap<K, A>
where
    K: Ord,
    FK: Fn(&Observation) -> K,
    FV: Fn(&Observation) -> V,
    FA: Fn(&[V]) -> A,
{
    let mut groups: BTreeMap<K, Vec<V>> = BTreeMap::new();

    for o in observations {
        groups.entry(key(o)).or_default().push(value(o));
    }

    groups
        .into_iter()
        .map(|(k, values)| (k, aggregate(&values)))
        .collect()
}

fn rental_count(o: &Observation) -> f64 {
    o.rental_count as f64
}

/// Mean rental count per weather condition.
pub fn weather_summary(observations: &[Observation]) -> WeatherSummary {
    WeatherSummary {
        mean_rentals: summarize_by(
            observations,
            |o| o.weather_condition.clone(),
            rental_count,
            mean,
        ),
    }
}

/// Mean rental count per temperature bucket.
pub fn temperature_summary(observations: &[Observation]) -> TemperatureSummary {
    TemperatureSummary {
        mean_rentals: summarize_by(
            observations,
            |o| bucketize(o.temperature),
            rental_count,
            mean,
        ),
    }
}

/// Total rental count per `(hour_of_day, day_type)`.
pub fn hourly_summary(observations: &[Observation]) -> HourlySummary {
    HourlySummary {
        total_rentals: summarize_by(
            observations,
            |o| HourKey {
                hour_of_day: o.hour_of_day,
                day_type: o.day_type,
            },
            |o| o.rental_count,
            total,
        ),
    }
}
