//! Growth chart service implementation.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use super::chart_model::{GrowthChart, GrowthChartPoint};
use crate::constants::DATE_FORMAT;
use crate::errors::Result;
use crate::records::{GrowthPoint, RecordRepositoryTrait};

/// Builds the growth chart from the store projection, oldest snapshot first.
///
/// Holds no incremental state: every call reloads and rebuilds the whole
/// chart, so a refresh after a create or delete always reflects the store.
pub struct GrowthChartService {
    record_repository: Arc<dyn RecordRepositoryTrait>,
}

impl GrowthChartService {
    pub fn new(record_repository: Arc<dyn RecordRepositoryTrait>) -> Self {
        GrowthChartService { record_repository }
    }

    /// An empty store yields an empty chart value, never an error. A stored
    /// date that is not `YYYY-MM-DD` fails with a validation error, since
    /// the x axis cannot place it.
    pub fn get_growth_chart(&self) -> Result<GrowthChart> {
        let points = self.record_repository.list_for_chart()?;
        debug!("Building growth chart from {} snapshots", points.len());
        let points = points
            .into_iter()
            .map(parse_point)
            .collect::<Result<Vec<_>>>()?;
        Ok(GrowthChart { points })
    }
}

fn parse_point(point: GrowthPoint) -> Result<GrowthChartPoint> {
    let date = NaiveDate::parse_from_str(&point.date, DATE_FORMAT)?;
    Ok(GrowthChartPoint {
        date,
        total: point.total,
        total_gold: point.total_gold,
        dollars_in_egp: point.dollars_in_egp,
        investments: point.investments,
        bank_certificates: point.bank_certificates,
        cash_savings: point.cash_savings,
    })
}
