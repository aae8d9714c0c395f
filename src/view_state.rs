use crate::domain::chart::LinearScale;
use crate::domain::movie_data::Metric;

/// Selected metric and the horizontal scale built for it.
///
/// Only the interaction dispatcher commits new values.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    selected_metric: Metric,
    x_scale: LinearScale,
}

impl ViewState {
    pub fn new(selected_metric: Metric, x_scale: LinearScale) -> Self {
        Self { selected_metric, x_scale }
    }

    pub fn selected_metric(&self) -> Metric {
        self.selected_metric
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub(crate) fn commit(&mut self, metric: Metric, x_scale: LinearScale) {
        self.selected_metric = metric;
        self.x_scale = x_scale;
    }
}
