use std::str::FromStr;

use crate::application::use_cases::{RenderSynchronizer, TooltipBinder};
use crate::config::ChartConfig;
use crate::domain::{
    chart::{LinearScale, ScaleBuilder, Scene, SceneFrame},
    events::{ChartEvent, EventPublisher, IgnoreReason, InMemoryEventBus},
    logging::LogComponent,
    movie_data::{Metric, MovieDataset},
};
use crate::view_state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Idle,
    Transitioning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Switched { from: Metric, to: Metric },
    Ignored(IgnoreReason),
}

/// Resolves label clicks and drives the metric switch.
///
/// Owns the view state and the retained scene; nothing else mutates them.
pub struct InteractionDispatcher {
    dataset: MovieDataset,
    view: ViewState,
    scene: Scene,
    state: DispatcherState,
    scales: ScaleBuilder,
    synchronizer: RenderSynchronizer,
    binder: TooltipBinder,
    events: InMemoryEventBus,
}

impl InteractionDispatcher {
    pub fn new(dataset: MovieDataset, config: &ChartConfig) -> Self {
        let scales = config.scale_builder();
        let metric = Metric::INITIAL;
        let x_scale = scales.build(&dataset, metric);
        let y_scale = scales.build_year_scale(&dataset);

        let scene = Scene::new(
            &dataset,
            metric,
            &x_scale,
            y_scale,
            config.point_style.clone(),
            config.easing,
            config.tick_count,
        );

        crate::log_info!(
            LogComponent::Application("Dispatcher"),
            "Chart ready: {} records, metric {}",
            dataset.len(),
            metric
        );

        Self {
            dataset,
            view: ViewState::new(metric, x_scale),
            scene,
            state: DispatcherState::Idle,
            scales,
            synchronizer: RenderSynchronizer::new(config.transition_ms),
            binder: TooltipBinder::new(),
            events: InMemoryEventBus::new(),
        }
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.events.subscribe(handler);
    }

    /// Click on the label carrying `label_id` (its `data-metric` attribute).
    pub fn handle_label_click(&mut self, label_id: &str, now_ms: f64) -> ClickOutcome {
        match Metric::from_str(label_id) {
            Ok(metric) => self.select(metric, now_ms),
            Err(_) => {
                crate::log_warn!(
                    LogComponent::Application("Dispatcher"),
                    "Ignoring click on unknown label '{}'",
                    label_id
                );
                self.events.publish(ChartEvent::ClickIgnored {
                    label_id: label_id.to_string(),
                    reason: IgnoreReason::UnknownMetric,
                });
                ClickOutcome::Ignored(IgnoreReason::UnknownMetric)
            }
        }
    }

    pub fn select(&mut self, metric: Metric, now_ms: f64) -> ClickOutcome {
        let from = self.view.selected_metric();
        if metric == from {
            self.events.publish(ChartEvent::ClickIgnored {
                label_id: metric.id().to_string(),
                reason: IgnoreReason::AlreadyActive,
            });
            return ClickOutcome::Ignored(IgnoreReason::AlreadyActive);
        }

        self.state = DispatcherState::Transitioning;

        let scale = self.scales.build(&self.dataset, metric);
        self.synchronizer.apply_scale(&mut self.scene, &scale, metric, now_ms);
        self.binder.rebind(&mut self.scene, metric);
        self.scene.labels_mut().activate(metric);
        self.view.commit(metric, scale);

        self.state = DispatcherState::Idle;

        crate::log_info!(
            LogComponent::Application("Dispatcher"),
            "Switched metric {} -> {}",
            from,
            metric
        );
        self.events.publish(ChartEvent::MetricSwitched { from, to: metric });

        ClickOutcome::Switched { from, to: metric }
    }

    /// Returns false when `index` is not a point.
    pub fn hover_point(&mut self, index: usize) -> bool {
        self.scene.hover(index)
    }

    pub fn unhover_point(&mut self) {
        self.scene.unhover();
    }

    pub fn frame(&self, now_ms: f64) -> SceneFrame {
        self.scene.frame(now_ms)
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.scene.is_animating(now_ms)
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn selected_metric(&self) -> Metric {
        self.view.selected_metric()
    }

    pub fn x_scale(&self) -> &LinearScale {
        self.view.x_scale()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn dataset(&self) -> &MovieDataset {
        &self.dataset
    }
}
