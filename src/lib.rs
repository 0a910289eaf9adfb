//! Simulated stock metrics for a fixed set of tech companies over one
//! trading week, plus the flat per-metric series a chart-rendering surface
//! consumes. Data is mock: every value is an independent random draw.

pub mod error;
pub mod generator;
pub mod series;
pub mod stock_data;

pub use error::{ChartError, Result};
pub use generator::{generate, generate_with};
pub use series::{
    distribution_percentages, project_by_property, project_series, snapshot_final_day,
    SeriesPoint, SnapshotEntry,
};
pub use stock_data::{company, Company, DayRecord, Metric, MetricBundle, COMPANIES, DAYS};
