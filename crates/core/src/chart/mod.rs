//! Growth chart module - the data series rendered by the plotting frontend.

mod chart_model;
mod chart_service;

pub use chart_model::{ChartSeries, GrowthChart, GrowthChartPoint};
pub use chart_service::GrowthChartService;
