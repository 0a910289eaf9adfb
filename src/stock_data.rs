use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ChartError;

/// Immutable facts about one listed company: ticker, the base price used to
/// scale synthetic prices, and the display color charts draw it with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Company {
    pub ticker: &'static str,
    pub base_price: f64,
    pub color: (u8, u8, u8),
}

// Fixed company universe. Order here is drawing/legend order everywhere.
pub const COMPANIES: [Company; 8] = [
    Company { ticker: "AAPL", base_price: 150.0, color: (0x88, 0x84, 0xd8) },
    Company { ticker: "GOOGL", base_price: 2800.0, color: (0x82, 0xca, 0x9d) },
    Company { ticker: "MSFT", base_price: 300.0, color: (0xff, 0xc6, 0x58) },
    Company { ticker: "AMZN", base_price: 3450.0, color: (0xff, 0x73, 0x00) },
    Company { ticker: "TSLA", base_price: 720.0, color: (0x00, 0x88, 0xfe) },
    Company { ticker: "NVDA", base_price: 800.0, color: (0x00, 0xc4, 0x9f) },
    Company { ticker: "META", base_price: 310.0, color: (0xff, 0xbb, 0x28) },
    Company { ticker: "NFLX", base_price: 560.0, color: (0xff, 0x80, 0x42) },
];

/// Trading-day labels for the simulated week.
pub const DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Looks up a company by ticker.
pub fn company(ticker: &str) -> Option<&'static Company> {
    COMPANIES.iter().find(|c| c.ticker == ticker)
}

/// The four simulated metrics for one company on one day. Fields are drawn
/// independently; market cap is not derived from price or share count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricBundle {
    pub price: f64,
    pub volume: u64,
    #[serde(rename = "marketCap")]
    pub market_cap: u64,
    pub change: f64,
}

/// One of the four metric fields, as charting consumers select them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Price,
    Volume,
    MarketCap,
    Change,
}

impl Metric {
    pub const ALL: [Self; 4] = [Self::Price, Self::Volume, Self::MarketCap, Self::Change];

    /// The property name used on the wire and in chart configuration.
    pub fn key(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Volume => "volume",
            Self::MarketCap => "marketCap",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "volume" => Ok(Self::Volume),
            "marketCap" => Ok(Self::MarketCap),
            "change" => Ok(Self::Change),
            other => Err(ChartError::InvalidProperty(other.to_string())),
        }
    }
}

impl MetricBundle {
    /// Extracts one metric as the scalar charts plot.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Price => self.price,
            Metric::Volume => self.volume as f64,
            Metric::MarketCap => self.market_cap as f64,
            Metric::Change => self.change,
        }
    }
}

/// One simulated day: the day label plus a bundle per company, stored in
/// `COMPANIES` order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub name: &'static str,
    pub stocks: Vec<(&'static str, MetricBundle)>,
}

impl DayRecord {
    /// The bundle for one ticker, if the day carries it.
    pub fn metrics(&self, ticker: &str) -> Option<&MetricBundle> {
        self.stocks
            .iter()
            .find(|(t, _)| *t == ticker)
            .map(|(_, bundle)| bundle)
    }
}

// Serializes flat, the way the rendering surface consumes a day:
// {"name":"Mon","AAPL":{...},"GOOGL":{...},...} with keys in stored order.
impl Serialize for DayRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stocks.len() + 1))?;
        map.serialize_entry("name", self.name)?;
        for (ticker, bundle) in &self.stocks {
            map.serialize_entry(ticker, bundle)?;
        }
        map.end()
    }
}
