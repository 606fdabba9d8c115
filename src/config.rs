//! Named constants for the dashboard's fixed analysis choices and file locations.

/// Weather conditions kept for analysis; every other `weathersit` label is dropped.
///
/// Order is the display order of the weather chart.
pub const WEATHER_ALLOW_LIST: &[&str] = &["Hujan Ringan", "Cerah", "Mendung"];

/// Inner bin edges for temperature bucketing, ascending.
///
/// Together with the implicit outer edges at `-inf` and `+inf` they produce
/// five right-open bins: `[-inf, 0.2)`, `[0.2, 0.4)`, `[0.4, 0.6)`,
/// `[0.6, 0.8)` and `[0.8, +inf]`.
pub const TEMPERATURE_EDGES: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Hours shown on the hourly chart's x-axis.
pub const HOURS_PER_DAY: u8 = 24;

pub const DEFAULT_DATA_PATH: &str = "main_data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "dashboard.html";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/bikeshare_dashboard.log";
