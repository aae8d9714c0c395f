use super::value_objects::{DomainPadding, LinearScale};
use crate::domain::movie_data::{Metric, MovieDataset, MovieRecord, metric_extent};

/// Build the horizontal scale for `metric` with the default padding.
///
/// `records` must be non-empty; with no records the domain is NaN.
pub fn build_scale(records: &[MovieRecord], metric: Metric, plot_width: f64) -> LinearScale {
    padded_scale(metric_extent(records, metric), DomainPadding::default(), plot_width)
}

fn padded_scale((min, max): (f64, f64), padding: DomainPadding, plot_width: f64) -> LinearScale {
    LinearScale::new((min * padding.lower, max * padding.upper), (0.0, plot_width))
}

/// Domain service producing the chart's scales.
///
/// Every call recomputes from the dataset; nothing is cached between metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBuilder {
    padding: DomainPadding,
    plot_width: f64,
    plot_height: f64,
    year_floor: f64,
}

impl ScaleBuilder {
    pub fn new(padding: DomainPadding, plot_width: f64, plot_height: f64, year_floor: f64) -> Self {
        Self { padding, plot_width, plot_height, year_floor }
    }

    /// `[min * lower, max * upper] -> [0, plot_width]`
    pub fn build(&self, dataset: &MovieDataset, metric: Metric) -> LinearScale {
        padded_scale(dataset.extent(metric), self.padding, self.plot_width)
    }

    /// `[year_floor, max year] -> [plot_height, 0]`; years grow upwards.
    pub fn build_year_scale(&self, dataset: &MovieDataset) -> LinearScale {
        let (_, max_year) = dataset.year_extent();
        LinearScale::new((self.year_floor, max_year), (self.plot_height, 0.0))
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_width
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_height
    }
}
