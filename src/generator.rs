//! Random synthesis of the five-day dataset.
//!
//! Every field is an independent uniform draw; re-running yields different
//! values on purpose (mock data, no seed). The random source is a parameter
//! so callers that need reproducibility can pass a seeded RNG.

use rand::Rng;

use crate::stock_data::{DayRecord, MetricBundle, COMPANIES, DAYS};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Daily percentage change, uniform in [-100, 100), two decimals.
pub fn random_percent_change(rng: &mut impl Rng) -> f64 {
    round2(rng.gen_range(-100.0..100.0))
}

/// Price scaled off the company base: base times a multiplier in [0.3, 2.5),
/// two decimals.
pub fn random_price(rng: &mut impl Rng, base: f64) -> f64 {
    round2(base * rng.gen_range(0.3..2.5))
}

/// Shares traded, uniform in [500_000, 15_000_000).
pub fn random_volume(rng: &mut impl Rng) -> u64 {
    rng.gen_range(500_000..15_000_000)
}

/// Market capitalization, uniform in [1e11, 3.1e12).
pub fn random_market_cap(rng: &mut impl Rng) -> u64 {
    rng.gen_range(100_000_000_000..3_100_000_000_000)
}

/// Builds the full dataset from the given random source: one record per day
/// in `DAYS`, one bundle per company in `COMPANIES` order.
pub fn generate_with(rng: &mut impl Rng) -> Vec<DayRecord> {
    DAYS.iter()
        .map(|&day| DayRecord {
            name: day,
            stocks: COMPANIES
                .iter()
                .map(|c| {
                    let bundle = MetricBundle {
                        price: random_price(rng, c.base_price),
                        volume: random_volume(rng),
                        market_cap: random_market_cap(rng),
                        change: random_percent_change(rng),
                    };
                    (c.ticker, bundle)
                })
                .collect(),
        })
        .collect()
}

/// Builds the full dataset from the thread-local RNG.
pub fn generate() -> Vec<DayRecord> {
    generate_with(&mut rand::thread_rng())
}
