//! Rental aggregation.
//!
//! Filters observations to the weather allow-list, derives temperature
//! buckets, and reduces rental counts into the weather, temperature and
//! hourly summaries shown on the dashboard.

pub mod aggregate;
pub mod analyzer;
pub mod bucket;
pub mod filter;
pub mod types;
pub mod utility;
