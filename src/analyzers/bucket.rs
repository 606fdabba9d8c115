use crate::analyzers::types::TemperatureBucket;
use crate::config::TEMPERATURE_EDGES;

/// Maps a normalized temperature onto its [`TemperatureBucket`].
///
/// Bins are right-open, so a value sitting exactly on an edge belongs to the
/// bucket above it:
///
/// | Range          | Bucket    |
/// |----------------|-----------|
/// | < 0.2          | Very Cold |
/// | >= 0.2, < 0.4  | Cold      |
/// | >= 0.4, < 0.6  | Mild      |
/// | >= 0.6, < 0.8  | Warm      |
/// | >= 0.8         | Hot       |
///
/// `NaN` is rejected at load time and never reaches this function; if it did
/// it would land in `Very Cold` since it compares below no edge.
pub fn bucketize(t: f64) -> TemperatureBucket {
    let [cold, mild, warm, hot] = TEMPERATURE_EDGES;
    match t {
        t if t >= hot => TemperatureBucket::Hot,
        t if t >= warm => TemperatureBucket::Warm,
        t if t >= mild => TemperatureBucket::Mild,
        t if t >= cold => TemperatureBucket::Cold,
        _ => TemperatureBucket::VeryCold,
    }
}
