use crate::domain::{
    chart::{LinearScale, Scene},
    logging::LogComponent,
    movie_data::Metric,
};

/// Use Case: push a freshly built scale into the retained scene.
///
/// Axis and every point start a tween from wherever they are now, so a
/// second call mid-flight retargets instead of queueing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSynchronizer {
    duration_ms: f64,
}

impl RenderSynchronizer {
    pub fn new(duration_ms: f64) -> Self {
        Self { duration_ms: duration_ms.max(0.0) }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn apply_scale(&self, scene: &mut Scene, scale: &LinearScale, metric: Metric, now_ms: f64) {
        scene.x_axis_mut().retarget(scale, now_ms, self.duration_ms);

        for point in scene.points_mut() {
            let target = scale.map(metric.value_of(&point.record));
            point.cx.retarget(target, now_ms, self.duration_ms);
        }

        crate::log_debug!(
            LogComponent::Application("RenderSynchronizer"),
            "x axis -> {} domain [{}, {}] over {}ms",
            metric,
            scale.domain().0,
            scale.domain().1,
            self.duration_ms
        );
    }
}
