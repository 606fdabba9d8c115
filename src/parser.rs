//! CSV parser for bike-rental observations.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::Observation;

/// Decodes every row of a header-bearing CSV into [`Observation`]s.
///
/// Columns are matched by name (`weathersit`, `temp`, `hr`, `day_type`,
/// `cnt`); any other column is ignored.
///
/// # Errors
///
/// Returns an error if a required column is missing, a numeric column does
/// not parse, `day_type` is neither weekday nor weekend, or a temperature is
/// `NaN`.
pub fn parse_observations<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: Observation = result?;
        if record.temperature.is_nan() {
            bail!("row {}: temperature is NaN", rows.len() + 1);
        }
        rows.push(record);
    }

    Ok(rows)
}

/// Opens `path` and parses it with [`parse_observations`].
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let file = File::open(path).with_context(|| format!("opening dataset {}", path.display()))?;
    let rows = parse_observations(file)
        .with_context(|| format!("parsing dataset {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "Dataset parsed");
    Ok(rows)
}
