use serde::Serialize;
use strum::IntoEnumIterator;

use crate::domain::movie_data::Metric;

/// Vertical spacing between stacked axis labels
pub const LABEL_SPACING: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelState {
    Active,
    Inactive,
}

impl LabelState {
    /// CSS class carried by the label element.
    pub fn css_class(self) -> &'static str {
        match self {
            LabelState::Active => "active",
            LabelState::Inactive => "inactive",
        }
    }
}

/// Domain entity - clickable axis label bound to one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub metric: Metric,
    pub offset_y: f64,
    pub state: LabelState,
}

impl AxisLabel {
    pub fn title(&self) -> &'static str {
        self.metric.axis_title()
    }
}

/// Domain entity - the four axis labels; exactly one is active at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    labels: Vec<AxisLabel>,
}

impl LabelSet {
    pub fn new(active: Metric) -> Self {
        let labels = Metric::iter()
            .enumerate()
            .map(|(i, metric)| AxisLabel {
                metric,
                offset_y: LABEL_SPACING * (i + 1) as f64,
                state: LabelState::Inactive,
            })
            .collect();
        let mut set = Self { labels };
        set.activate(active);
        set
    }

    /// Make `metric` the single active label.
    pub fn activate(&mut self, metric: Metric) {
        for label in &mut self.labels {
            label.state =
                if label.metric == metric { LabelState::Active } else { LabelState::Inactive };
        }
    }

    pub fn active_metric(&self) -> Option<Metric> {
        self.labels.iter().find(|l| l.state == LabelState::Active).map(|l| l.metric)
    }

    pub fn active_count(&self) -> usize {
        self.labels.iter().filter(|l| l.state == LabelState::Active).count()
    }

    pub fn state_of(&self, metric: Metric) -> Option<LabelState> {
        self.labels.iter().find(|l| l.metric == metric).map(|l| l.state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisLabel> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_label_per_metric_stacked_in_order() {
        let labels = LabelSet::new(Metric::TotalRevenue);
        let offsets: Vec<f64> = labels.iter().map(|l| l.offset_y).collect();
        assert_eq!(offsets, vec![20.0, 40.0, 60.0, 80.0]);
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn activate_moves_the_flag() {
        let mut labels = LabelSet::new(Metric::TotalRevenue);
        labels.activate(Metric::CinemaSites);
        assert_eq!(labels.active_metric(), Some(Metric::CinemaSites));
        assert_eq!(labels.active_count(), 1);
        assert_eq!(labels.state_of(Metric::TotalRevenue), Some(LabelState::Inactive));
    }
}
