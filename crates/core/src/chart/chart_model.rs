//! Growth chart domain models.
//!
//! The core generates these values; the plotting frontend just renders them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single data point of the growth chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthChartPoint {
    /// Parsed snapshot date (x axis).
    pub date: NaiveDate,
    pub total: f64,
    pub total_gold: f64,
    pub dollars_in_egp: f64,
    pub investments: f64,
    pub bank_certificates: f64,
    pub cash_savings: f64,
}

/// One labeled line series of the growth chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// The full chart value, rebuilt from scratch on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GrowthChart {
    /// Chart points, oldest date first.
    pub points: Vec<GrowthChartPoint>,
}

impl GrowthChart {
    /// True when there is nothing to plot; the frontend then renders its
    /// "no data available" placeholder instead of axes and series.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The six line series in legend order.
    pub fn series(&self) -> Vec<ChartSeries> {
        let series = |label: &str, pick: fn(&GrowthChartPoint) -> f64| ChartSeries {
            label: label.to_string(),
            points: self.points.iter().map(|p| (p.date, pick(p))).collect(),
        };
        vec![
            series("Total Savings", |p| p.total),
            series("Gold", |p| p.total_gold),
            series("USD", |p| p.dollars_in_egp),
            series("Investments", |p| p.investments),
            series("Certificates", |p| p.bank_certificates),
            series("Cash", |p| p.cash_savings),
        ]
    }
}
