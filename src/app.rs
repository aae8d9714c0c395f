use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::{
    application::{ClickOutcome, InteractionDispatcher},
    config::ChartConfig,
    domain::{
        chart::SceneFrame,
        events::DomainEvent,
        logging::LogComponent,
        movie_data::MovieDataset,
    },
    infrastructure::{now_ms, rendering::FrameLoop},
};

/// Shared handle the chart components reach through context.
///
/// The dispatcher is the only writer of chart state; `frame` is the
/// reactive snapshot every component reads from.
#[derive(Clone)]
pub struct ChartHandle {
    dispatcher: Rc<RefCell<InteractionDispatcher>>,
    frame: RwSignal<SceneFrame>,
    frame_loop: FrameLoop,
}

impl ChartHandle {
    pub fn new(dispatcher: InteractionDispatcher) -> Self {
        let frame = create_rw_signal(dispatcher.frame(now_ms()));
        let dispatcher = Rc::new(RefCell::new(dispatcher));

        let frame_loop = {
            let dispatcher = Rc::clone(&dispatcher);
            FrameLoop::new(move |now| {
                let (next, animating) = {
                    let dispatcher = dispatcher.borrow();
                    (dispatcher.frame(now), dispatcher.is_animating(now))
                };
                frame.set(next);
                animating
            })
        };

        Self { dispatcher, frame, frame_loop }
    }

    pub fn frame(&self) -> RwSignal<SceneFrame> {
        self.frame
    }

    pub fn click_label(&self, label_id: &str) {
        let now = now_ms();
        let outcome = self.dispatcher.borrow_mut().handle_label_click(label_id, now);
        if let ClickOutcome::Switched { .. } = outcome {
            self.frame_loop.kick();
        }
        self.refresh(now);
    }

    pub fn hover(&self, index: usize) {
        if self.dispatcher.borrow_mut().hover_point(index) {
            self.refresh(now_ms());
        }
    }

    pub fn unhover(&self) {
        self.dispatcher.borrow_mut().unhover_point();
        self.refresh(now_ms());
    }

    /// Resample the scene outside the frame loop.
    pub fn refresh(&self, now: f64) {
        let next = self.dispatcher.borrow().frame(now);
        self.frame.set(next);
    }
}

#[component]
pub fn App(dataset: MovieDataset, config: ChartConfig) -> impl IntoView {
    let mut dispatcher = InteractionDispatcher::new(dataset, &config);
    dispatcher.subscribe(|event| {
        crate::log_debug!(
            LogComponent::Presentation("App"),
            "{}: {:?}",
            event.event_type(),
            event
        );
    });

    provide_context(ChartHandle::new(dispatcher));
    provide_context(config.clone());

    let title_x = -config.plot_height() / 2.0;
    let title_y = 40.0 - config.margin.left;

    view! {
        <style>
            {r#"
            .movie-chart-wrapper {
                position: relative;
                display: inline-block;
            }

            .movie-chart .active {
                font-weight: bold;
                fill: #000;
                cursor: default;
            }

            .movie-chart .inactive {
                font-weight: lighter;
                fill: #aaa;
                cursor: pointer;
            }

            .movie-chart .inactive:hover {
                fill: #000;
            }

            .movie-chart .axis-text {
                font-size: 14px;
            }

            .tooltip {
                position: absolute;
                transform: translate(-50%, -100%);
                background: rgba(0, 0, 0, 0.8);
                color: white;
                padding: 6px 10px;
                border-radius: 4px;
                font-size: 12px;
                white-space: nowrap;
                pointer-events: none;
            }
            "#}
        </style>
        <div class="movie-chart-wrapper">
            <svg class="movie-chart" width=config.svg_width height=config.svg_height>
                <g transform=format!("translate({}, {})", config.margin.left, config.margin.top)>
                    <XAxis />
                    <YAxis />
                    <Points />
                    <MetricLabels />
                    <text
                        class="axis-text"
                        transform="rotate(-90)"
                        y=title_y
                        x=title_x
                        dy="1em"
                    >
                        {config.y_axis_title.clone()}
                    </text>
                </g>
            </svg>
            <ChartTooltip />
        </div>
    }
}

/// Bottom axis; its ticks follow the animated domain.
#[component]
fn XAxis() -> impl IntoView {
    let frame = expect_context::<ChartHandle>().frame();
    let config = expect_context::<ChartConfig>();
    let plot_width = config.plot_width();

    view! {
        <g class="x-axis" transform=format!("translate(0, {})", config.plot_height())>
            <line x1=0 x2=plot_width stroke="currentColor" />
            {move || {
                frame.with(|f| {
                    f.x_ticks
                        .iter()
                        .map(|tick| {
                            view! {
                                <g transform=format!("translate({}, 0)", tick.offset)>
                                    <line y2=6 stroke="currentColor" />
                                    <text y=9 dy="0.71em" text-anchor="middle" font-size="10">
                                        {tick.text.clone()}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                })
            }}
        </g>
    }
}

#[component]
fn YAxis() -> impl IntoView {
    let frame = expect_context::<ChartHandle>().frame();
    let plot_height = expect_context::<ChartConfig>().plot_height();

    view! {
        <g class="y-axis">
            <line y1=0 y2=plot_height stroke="currentColor" />
            {move || {
                frame.with(|f| {
                    f.y_ticks
                        .iter()
                        .map(|tick| {
                            view! {
                                <g transform=format!("translate(0, {})", tick.offset)>
                                    <line x2="-6" stroke="currentColor" />
                                    <text x="-9" dy="0.32em" text-anchor="end" font-size="10">
                                        {tick.text.clone()}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                })
            }}
        </g>
    }
}

/// One circle per record. Only `cx` is reactive; the rest is fixed at mount.
#[component]
fn Points() -> impl IntoView {
    let handle = expect_context::<ChartHandle>();
    let frame = handle.frame();
    let (count, style) = frame.with_untracked(|f| (f.points.len(), f.style.clone()));

    view! {
        <g class="points">
            {(0..count)
                .map(|index| {
                    let cx = move || frame.with(|f| f.points.get(index).map_or(0.0, |p| p.cx));
                    let cy = frame.with_untracked(|f| f.points.get(index).map_or(0.0, |p| p.cy));
                    let on_over = {
                        let handle = handle.clone();
                        move |_: web_sys::MouseEvent| handle.hover(index)
                    };
                    let on_out = {
                        let handle = handle.clone();
                        move |_: web_sys::MouseEvent| handle.unhover()
                    };
                    view! {
                        <circle
                            cx=cx
                            cy=cy
                            r=style.radius
                            fill=style.fill.clone()
                            opacity=style.opacity
                            on:mouseover=on_over
                            on:mouseout=on_out
                        />
                    }
                })
                .collect_view()}
        </g>
    }
}

/// Clickable metric titles under the plot.
#[component]
fn MetricLabels() -> impl IntoView {
    let handle = expect_context::<ChartHandle>();
    let frame = handle.frame();
    let config = expect_context::<ChartConfig>();
    let labels = frame.with_untracked(|f| f.labels.clone());

    view! {
        <g transform=format!(
            "translate({}, {})",
            config.plot_width() / 2.0,
            config.plot_height() + 20.0,
        )>
            {labels
                .into_iter()
                .map(|label| {
                    let metric = label.metric;
                    let class = move || {
                        frame.with(|f| {
                            f.labels
                                .iter()
                                .find(|l| l.metric == metric)
                                .map_or("inactive", |l| l.state.css_class())
                        })
                    };
                    let on_click = {
                        let handle = handle.clone();
                        move |_: web_sys::MouseEvent| handle.click_label(metric.id())
                    };
                    view! {
                        <text
                            x=0
                            y=label.offset_y
                            text-anchor="middle"
                            data-metric=metric.id().to_string()
                            class=class
                            on:click=on_click
                        >
                            {label.title}
                        </text>
                    }
                })
                .collect_view()}
        </g>
    }
}

/// Overlay for the hovered point, placed above it with a fixed offset.
#[component]
fn ChartTooltip() -> impl IntoView {
    let frame = expect_context::<ChartHandle>().frame();
    let config = expect_context::<ChartConfig>();
    let origin_x = config.margin.left + config.tooltip_offset.left;
    let origin_y = config.margin.top + config.tooltip_offset.top - config.point_style.radius;
    let tooltip = move || frame.with(|f| f.tooltip.clone());

    view! {
        <div
            class="tooltip"
            style:display=move || if tooltip().is_some() { "block" } else { "none" }
            style:left=move || {
                tooltip().map_or_else(|| "0px".to_string(), |t| format!("{}px", origin_x + t.x))
            }
            style:top=move || {
                tooltip().map_or_else(|| "0px".to_string(), |t| format!("{}px", origin_y + t.y))
            }
        >
            {move || tooltip().map(|t| t.text).unwrap_or_default()}
        </div>
    }
}
