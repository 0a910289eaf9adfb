use std::ops::RangeInclusive;

use eframe::egui;
use egui::Color32;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, Points};
use stock_dashboard::{
    company, distribution_percentages, generate, project_series, snapshot_final_day, DayRecord,
    Metric, SeriesPoint, COMPANIES, DAYS,
};

fn main() {
    // One dataset per launch, same as one dataset per page load
    let dataset = generate();
    for day in &dataset {
        println!(
            "[Day Generated] {}",
            serde_json::to_string(day).expect("day record serializes")
        );
    }

    let app = DashboardApp::new(&dataset);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1240.0, 900.0]),
        ..Default::default()
    };
    if let Err(e) = eframe::run_native(
        "Stock Data for Top Tech Companies",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        eprintln!("Failed to run native: {}", e);
    }
}

// Holds the projected chart inputs, computed once at startup
struct DashboardApp {
    price: Vec<SeriesPoint>,
    volume: Vec<SeriesPoint>,
    change: Vec<SeriesPoint>,
    market_cap: Vec<SeriesPoint>,
    distribution: Vec<(&'static str, f64)>,
}

impl DashboardApp {
    fn new(dataset: &[DayRecord]) -> Self {
        let snapshot = snapshot_final_day(dataset, Metric::MarketCap)
            .expect("freshly generated dataset has a final day");
        Self {
            price: project_series(dataset, Metric::Price),
            volume: project_series(dataset, Metric::Volume),
            change: project_series(dataset, Metric::Change),
            market_cap: project_series(dataset, Metric::MarketCap),
            distribution: distribution_percentages(&snapshot),
        }
    }

    fn price_chart(&self, ui: &mut egui::Ui) {
        Plot::new("prices")
            .height(300.0)
            .legend(Legend::default())
            .x_axis_formatter(day_axis)
            .label_formatter(|name, value| {
                if name.is_empty() {
                    String::new()
                } else {
                    format!("{}: ${:.2}", name, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for c in COMPANIES {
                    plot_ui.line(
                        Line::new(company_points(&self.price, c.ticker, 1.0))
                            .color(color_of(c.ticker))
                            .width(2.0)
                            .name(c.ticker),
                    );
                }
            });
    }

    // Volumes stack per day, one colored segment per company
    fn volume_chart(&self, ui: &mut egui::Ui) {
        let mut offsets = [0.0_f64; 5];
        Plot::new("volumes")
            .height(300.0)
            .legend(Legend::default())
            .x_axis_formatter(day_axis)
            .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                format!("{:.1}M", mark.value / 1_000_000.0)
            })
            .show(ui, |plot_ui| {
                for c in COMPANIES {
                    let mut bars = Vec::new();
                    for (i, point) in self.volume.iter().enumerate() {
                        let v = point.value_of(c.ticker).unwrap_or(0.0);
                        bars.push(Bar::new(i as f64, v).base_offset(offsets[i]).width(0.6));
                        offsets[i] += v;
                    }
                    plot_ui.bar_chart(
                        BarChart::new(bars).color(color_of(c.ticker)).name(c.ticker),
                    );
                }
            });
    }

    fn change_chart(&self, ui: &mut egui::Ui) {
        Plot::new("changes")
            .height(300.0)
            .legend(Legend::default())
            .x_axis_formatter(day_axis)
            .include_y(-120.0)
            .include_y(120.0)
            .show(ui, |plot_ui| {
                for c in COMPANIES {
                    let points = company_points(&self.change, c.ticker, 1.0);
                    plot_ui.line(
                        Line::new(points.clone())
                            .color(color_of(c.ticker))
                            .width(2.0)
                            .name(c.ticker),
                    );
                    plot_ui.points(
                        Points::new(points)
                            .color(color_of(c.ticker))
                            .radius(2.5)
                            .name(c.ticker),
                    );
                }
            });
    }

    fn market_cap_chart(&self, ui: &mut egui::Ui) {
        Plot::new("market_caps")
            .height(300.0)
            .legend(Legend::default())
            .x_axis_formatter(day_axis)
            .label_formatter(|name, value| {
                if name.is_empty() {
                    String::new()
                } else {
                    format!("{}: {:.2} T", name, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for c in COMPANIES {
                    plot_ui.line(
                        Line::new(company_points(&self.market_cap, c.ticker, 1e-12))
                            .color(color_of(c.ticker))
                            .width(2.0)
                            .name(c.ticker),
                    );
                }
            });
    }

    fn distribution_chart(&self, ui: &mut egui::Ui) {
        Plot::new("market_cap_distribution")
            .height(300.0)
            .legend(Legend::default())
            .x_axis_formatter(ticker_axis)
            .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                format!("{:.0}%", mark.value)
            })
            .show(ui, |plot_ui| {
                for (i, (ticker, share)) in self.distribution.iter().enumerate() {
                    plot_ui.bar_chart(
                        BarChart::new(vec![Bar::new(i as f64, *share).width(0.6)])
                            .color(color_of(ticker))
                            .name(format!("{}: {:.1}%", ticker, share)),
                    );
                }
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Stock Data for Top Tech Companies");
                ui.separator();

                ui.heading("Stock Prices Over the Week (USD)");
                self.price_chart(ui);
                ui.add_space(24.0);

                ui.heading("Trading Volume Over the Week (Millions)");
                self.volume_chart(ui);
                ui.add_space(24.0);

                ui.heading("Daily Percentage Change (%)");
                self.change_chart(ui);
                ui.add_space(24.0);

                ui.heading("Market Cap Over the Week (Trillions USD)");
                self.market_cap_chart(ui);
                ui.add_space(24.0);

                ui.heading("Market Cap Distribution on Friday");
                self.distribution_chart(ui);
            });
        });
    }
}

// Per-company polyline across the week, optionally rescaled (e.g. to trillions)
fn company_points(series: &[SeriesPoint], ticker: &str, scale: f64) -> Vec<[f64; 2]> {
    series
        .iter()
        .enumerate()
        .filter_map(|(i, point)| point.value_of(ticker).map(|v| [i as f64, v * scale]))
        .collect()
}

fn color_of(ticker: &str) -> Color32 {
    match company(ticker) {
        Some(c) => Color32::from_rgb(c.color.0, c.color.1, c.color.2),
        None => Color32::GRAY,
    }
}

// Axis labels: whole grid marks map to day names, everything else stays blank
fn day_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let idx = mark.value.round();
    if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    DAYS.get(idx as usize).map(|d| d.to_string()).unwrap_or_default()
}

fn ticker_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let idx = mark.value.round();
    if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    COMPANIES
        .get(idx as usize)
        .map(|c| c.ticker.to_string())
        .unwrap_or_default()
}
