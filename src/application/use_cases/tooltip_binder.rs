use crate::domain::{
    chart::{Scene, TooltipBinding},
    movie_data::Metric,
};

/// Use Case: point hover content at the newly selected metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TooltipBinder;

impl TooltipBinder {
    pub fn new() -> Self {
        Self
    }

    /// Replaces the previous binding; only one is ever live.
    pub fn rebind(&self, scene: &mut Scene, metric: Metric) -> TooltipBinding {
        let binding = TooltipBinding { metric, generation: scene.tooltip().generation + 1 };
        scene.set_tooltip(binding);
        binding
    }
}
