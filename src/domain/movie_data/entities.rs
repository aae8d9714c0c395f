use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::value_objects::Metric;
use crate::domain::errors::AppError;

/// Domain entity - one year of box-office figures.
///
/// Fields hold whatever numeric coercion produced at load time, so any of
/// them may be NaN for malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: f64,
    pub tickets_sold: f64,
    pub total_revenue: f64,
    pub ticket_price: f64,
    pub cinema_sites: f64,
}

impl MovieRecord {
    pub fn new(
        year: f64,
        tickets_sold: f64,
        total_revenue: f64,
        ticket_price: f64,
        cinema_sites: f64,
    ) -> Self {
        Self { year, tickets_sold, total_revenue, ticket_price, cinema_sites }
    }
}

/// Domain entity - the immutable, non-empty set of records behind the chart.
#[derive(Debug, Clone)]
pub struct MovieDataset {
    records: Arc<Vec<MovieRecord>>,
}

impl MovieDataset {
    pub fn new(records: Vec<MovieRecord>) -> Result<Self, AppError> {
        if records.is_empty() {
            return Err(AppError::Validation("dataset contains no records".to_string()));
        }
        Ok(Self { records: Arc::new(records) })
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(min, max)` of a metric, skipping NaN. `(NaN, NaN)` when nothing is left.
    pub fn extent(&self, metric: Metric) -> (f64, f64) {
        metric_extent(&self.records, metric)
    }

    /// `(min, max)` of the year column, skipping NaN.
    pub fn year_extent(&self) -> (f64, f64) {
        extent_of(self.records.iter().map(|r| r.year))
    }
}

/// `(min, max)` of a metric over any record slice, skipping NaN.
pub fn metric_extent(records: &[MovieRecord], metric: Metric) -> (f64, f64) {
    extent_of(records.iter().map(|r| metric.value_of(r)))
}

fn extent_of(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.filter(|v| !v.is_nan()).fold((f64::NAN, f64::NAN), |(lo, hi), v| {
        if lo.is_nan() { (v, v) } else { (lo.min(v), hi.max(v)) }
    })
}
