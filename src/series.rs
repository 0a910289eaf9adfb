//! Projections from the nested per-day dataset to the flat per-metric
//! records the chart-rendering surface consumes.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{ChartError, Result};
use crate::stock_data::{DayRecord, Metric};

/// One day of a single metric across companies, in stored company order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub name: &'static str,
    pub values: Vec<(&'static str, f64)>,
}

impl SeriesPoint {
    /// The value for one ticker, if present.
    pub fn value_of(&self, ticker: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(t, _)| *t == ticker)
            .map(|(_, v)| *v)
    }
}

// The chart-surface record shape: {"name":"Mon","AAPL":150.25,...} with the
// "name" key first and company keys in stored order.
impl Serialize for SeriesPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("name", self.name)?;
        for (ticker, value) in &self.values {
            map.serialize_entry(ticker, value)?;
        }
        map.end()
    }
}

/// One (company, value) pair of a single-day extraction, the distribution
/// view's input shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotEntry {
    pub name: &'static str,
    pub value: f64,
}

/// Isolates one metric: for every day, the day label plus that metric's value
/// per company. Day order and company order are preserved.
pub fn project_series(dataset: &[DayRecord], metric: Metric) -> Vec<SeriesPoint> {
    dataset
        .iter()
        .map(|day| SeriesPoint {
            name: day.name,
            values: day
                .stocks
                .iter()
                .map(|(ticker, bundle)| (*ticker, bundle.get(metric)))
                .collect(),
        })
        .collect()
}

/// String-keyed variant of [`project_series`]. Unknown property names fail
/// fast instead of producing blank series.
pub fn project_by_property(dataset: &[DayRecord], property: &str) -> Result<Vec<SeriesPoint>> {
    Ok(project_series(dataset, property.parse()?))
}

/// Extracts the final day's values of one metric across companies.
pub fn snapshot_final_day(dataset: &[DayRecord], metric: Metric) -> Result<Vec<SnapshotEntry>> {
    let last = dataset.last().ok_or(ChartError::EmptyDataset)?;
    Ok(last
        .stocks
        .iter()
        .map(|(ticker, bundle)| SnapshotEntry { name: ticker, value: bundle.get(metric) })
        .collect())
}

/// Normalizes a snapshot to percentages of its total. An empty or all-zero
/// snapshot yields zero percentages rather than NaN.
pub fn distribution_percentages(snapshot: &[SnapshotEntry]) -> Vec<(&'static str, f64)> {
    let total: f64 = snapshot.iter().map(|entry| entry.value).sum();
    snapshot
        .iter()
        .map(|entry| {
            let share = if total > 0.0 { entry.value / total * 100.0 } else { 0.0 };
            (entry.name, share)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;
    use crate::generator::generate_with;
    use crate::stock_data::{MetricBundle, COMPANIES};

    fn bundle(price: f64, market_cap: u64) -> MetricBundle {
        MetricBundle { price, volume: 1_000_000, market_cap, change: 5.5 }
    }

    #[test]
    fn projects_one_metric_per_company_per_day() {
        let dataset =
            vec![DayRecord { name: "Mon", stocks: vec![("AAPL", bundle(150.25, 2_000_000_000_000))] }];
        let series = project_by_property(&dataset, "price").unwrap();
        assert_eq!(
            series,
            vec![SeriesPoint { name: "Mon", values: vec![("AAPL", 150.25)] }]
        );
        assert_eq!(serde_json::to_string(&series[0]).unwrap(), r#"{"name":"Mon","AAPL":150.25}"#);
    }

    #[rstest]
    #[case("price")]
    #[case("volume")]
    #[case("marketCap")]
    #[case("change")]
    fn projection_preserves_day_and_company_order(#[case] property: &str) {
        let dataset = generate_with(&mut StdRng::seed_from_u64(11));
        let series = project_by_property(&dataset, property).unwrap();
        assert_eq!(series.len(), 5);
        for (point, day) in series.iter().zip(&dataset) {
            assert_eq!(point.name, day.name);
            assert_eq!(point.values.len(), 8);
            for ((ticker, _), company) in point.values.iter().zip(COMPANIES) {
                assert_eq!(*ticker, company.ticker);
            }
        }
    }

    #[test]
    fn projection_is_pure() {
        let dataset = generate_with(&mut StdRng::seed_from_u64(12));
        for metric in Metric::ALL {
            assert_eq!(project_series(&dataset, metric), project_series(&dataset, metric));
        }
    }

    #[test]
    fn unknown_property_fails_fast() {
        let dataset = generate_with(&mut StdRng::seed_from_u64(13));
        let err = project_by_property(&dataset, "pricee").unwrap_err();
        assert_eq!(err, ChartError::InvalidProperty("pricee".to_string()));
    }

    #[test]
    fn snapshot_takes_the_final_day() {
        let dataset = vec![
            DayRecord { name: "Thu", stocks: vec![("AAPL", bundle(150.0, 1)), ("GOOGL", bundle(2800.0, 2))] },
            DayRecord {
                name: "Fri",
                stocks: vec![
                    ("AAPL", bundle(150.0, 2_000_000_000_000)),
                    ("GOOGL", bundle(2800.0, 1_000_000_000_000)),
                ],
            },
        ];
        let snapshot = snapshot_final_day(&dataset, Metric::MarketCap).unwrap();
        assert_eq!(
            snapshot,
            vec![
                SnapshotEntry { name: "AAPL", value: 2e12 },
                SnapshotEntry { name: "GOOGL", value: 1e12 },
            ]
        );

        let percentages = distribution_percentages(&snapshot);
        assert_abs_diff_eq!(percentages[0].1, 66.7, epsilon = 0.05);
        assert_abs_diff_eq!(percentages[1].1, 33.3, epsilon = 0.05);
    }

    #[test]
    fn snapshot_of_empty_dataset_is_an_error() {
        assert_eq!(snapshot_final_day(&[], Metric::MarketCap).unwrap_err(), ChartError::EmptyDataset);
    }

    #[test]
    fn distribution_percentages_sum_to_one_hundred() {
        let dataset = generate_with(&mut StdRng::seed_from_u64(14));
        let snapshot = snapshot_final_day(&dataset, Metric::MarketCap).unwrap();
        let total: f64 = distribution_percentages(&snapshot).iter().map(|(_, pct)| pct).sum();
        assert_abs_diff_eq!(total, 100.0, epsilon = 0.1);
    }

    #[test]
    fn empty_snapshot_has_no_percentages() {
        assert!(distribution_percentages(&[]).is_empty());
    }
}
