//! Retained scene for the scatter chart.
//!
//! The scene owns every animated attribute. Presentation never reads it
//! directly; it samples a [`SceneFrame`] at the current clock instead.

use serde::Serialize;

use super::entities::{LabelSet, LabelState};
use super::transition::{Easing, ScaleTween, Tween};
use super::value_objects::{LinearScale, PointStyle, format_tick};
use crate::domain::movie_data::{Metric, MovieDataset, MovieRecord};

/// Hover content for `record` under `metric`, e.g. `"2005 Total Revenue: 300"`.
pub fn tooltip_text(metric: Metric, record: &MovieRecord) -> String {
    format!("{} {} {}", record.year, metric.tooltip_label(), metric.value_of(record))
}

/// Which metric hover content is generated for.
///
/// `generation` increases on every rebind so callers can tell bindings apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TooltipBinding {
    pub metric: Metric,
    pub generation: u64,
}

impl TooltipBinding {
    pub fn content(&self, record: &MovieRecord) -> String {
        tooltip_text(self.metric, record)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointNode {
    pub record: MovieRecord,
    pub cx: Tween,
    pub cy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    points: Vec<PointNode>,
    x_axis: ScaleTween,
    y_scale: LinearScale,
    style: PointStyle,
    labels: LabelSet,
    tooltip: TooltipBinding,
    hovered: Option<usize>,
    tick_count: usize,
}

impl Scene {
    pub fn new(
        dataset: &MovieDataset,
        metric: Metric,
        x_scale: &LinearScale,
        y_scale: LinearScale,
        style: PointStyle,
        easing: Easing,
        tick_count: usize,
    ) -> Self {
        let points = dataset
            .records()
            .iter()
            .map(|record| PointNode {
                record: *record,
                cx: Tween::settled(x_scale.map(metric.value_of(record)), easing),
                cy: y_scale.map(record.year),
            })
            .collect();

        Self {
            points,
            x_axis: ScaleTween::settled(x_scale, easing),
            y_scale,
            style,
            labels: LabelSet::new(metric),
            tooltip: TooltipBinding { metric, generation: 0 },
            hovered: None,
            tick_count,
        }
    }

    pub fn points(&self) -> &[PointNode] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [PointNode] {
        &mut self.points
    }

    pub fn x_axis(&self) -> &ScaleTween {
        &self.x_axis
    }

    pub fn x_axis_mut(&mut self) -> &mut ScaleTween {
        &mut self.x_axis
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn style(&self) -> &PointStyle {
        &self.style
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut LabelSet {
        &mut self.labels
    }

    pub fn tooltip(&self) -> TooltipBinding {
        self.tooltip
    }

    pub fn set_tooltip(&mut self, binding: TooltipBinding) {
        self.tooltip = binding;
    }

    /// Mark point `index` as hovered. Out-of-range indices clear the hover.
    pub fn hover(&mut self, index: usize) -> bool {
        self.hovered = (index < self.points.len()).then_some(index);
        self.hovered.is_some()
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Content the overlay would show right now, if a point is hovered.
    pub fn tooltip_content(&self) -> Option<String> {
        let point = self.points.get(self.hovered?)?;
        Some(self.tooltip.content(&point.record))
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.x_axis.is_active(now_ms) || self.points.iter().any(|p| p.cx.is_active(now_ms))
    }

    pub fn frame(&self, now_ms: f64) -> SceneFrame {
        let points: Vec<PointFrame> = self
            .points
            .iter()
            .map(|p| PointFrame { cx: p.cx.value_at(now_ms), cy: p.cy })
            .collect();

        let tooltip = self.hovered.and_then(|index| {
            let point = points.get(index)?;
            let record = &self.points.get(index)?.record;
            Some(TooltipFrame { x: point.cx, y: point.cy, text: self.tooltip.content(record) })
        });

        SceneFrame {
            x_ticks: axis_ticks(&self.x_axis.scale_at(now_ms), self.tick_count),
            y_ticks: axis_ticks(&self.y_scale, self.tick_count),
            points,
            style: self.style.clone(),
            labels: self
                .labels
                .iter()
                .map(|l| LabelFrame {
                    metric: l.metric,
                    title: l.title(),
                    offset_y: l.offset_y,
                    state: l.state,
                })
                .collect(),
            tooltip,
        }
    }
}

fn axis_ticks(scale: &LinearScale, count: usize) -> Vec<TickFrame> {
    let step = scale.tick_step(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| TickFrame { value, offset: scale.map(value), text: format_tick(value, step) })
        .collect()
}

/// Snapshot of the scene at one instant, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    pub points: Vec<PointFrame>,
    pub style: PointStyle,
    pub x_ticks: Vec<TickFrame>,
    pub y_ticks: Vec<TickFrame>,
    pub labels: Vec<LabelFrame>,
    pub tooltip: Option<TooltipFrame>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointFrame {
    pub cx: f64,
    pub cy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickFrame {
    pub value: f64,
    pub offset: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelFrame {
    pub metric: Metric,
    pub title: &'static str,
    pub offset_y: f64,
    pub state: LabelState,
}

/// Hovered point position in plot coordinates plus its text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipFrame {
    pub x: f64,
    pub y: f64,
    pub text: String,
}
