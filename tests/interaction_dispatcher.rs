use std::cell::RefCell;
use std::rc::Rc;

use box_office_scatter::application::{ClickOutcome, DispatcherState, InteractionDispatcher};
use box_office_scatter::config::ChartConfig;
use box_office_scatter::domain::chart::LabelState;
use box_office_scatter::domain::events::{ChartEvent, IgnoreReason};
use box_office_scatter::domain::movie_data::{Metric, MovieDataset, MovieRecord};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

fn dataset() -> MovieDataset {
    MovieDataset::new(vec![
        MovieRecord::new(2001.0, 50.0, 100.0, 5.0, 30000.0),
        MovieRecord::new(2002.0, 150.0, 200.0, 6.0, 40000.0),
        MovieRecord::new(2003.0, 120.0, 180.0, 7.5, 38000.0),
    ])
    .unwrap()
}

fn dispatcher() -> InteractionDispatcher {
    InteractionDispatcher::new(dataset(), &ChartConfig::default())
}

fn assert_single_active(dispatcher: &InteractionDispatcher) {
    let labels = dispatcher.scene().labels();
    assert_eq!(labels.active_count(), 1);
    assert_eq!(labels.active_metric(), Some(dispatcher.selected_metric()));
}

#[test]
fn starts_idle_on_total_revenue() {
    let dispatcher = dispatcher();
    assert_eq!(dispatcher.state(), DispatcherState::Idle);
    assert_eq!(dispatcher.selected_metric(), Metric::TotalRevenue);
    assert_eq!(dispatcher.x_scale().domain(), (80.0, 240.0));
    assert_single_active(&dispatcher);
}

#[test]
fn clicking_active_label_changes_nothing() {
    let mut dispatcher = dispatcher();
    let scale_before = *dispatcher.x_scale();
    let labels_before = dispatcher.scene().labels().clone();

    let outcome = dispatcher.handle_label_click("total_revenue", 0.0);

    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::AlreadyActive));
    assert_eq!(*dispatcher.x_scale(), scale_before);
    assert_eq!(*dispatcher.scene().labels(), labels_before);
    assert!(!dispatcher.is_animating(0.0));
}

#[test]
fn switching_updates_scale_and_labels() {
    let mut dispatcher = dispatcher();

    let outcome = dispatcher.handle_label_click("tickets_sold", 0.0);

    assert_eq!(
        outcome,
        ClickOutcome::Switched { from: Metric::TotalRevenue, to: Metric::TicketsSold }
    );
    assert_eq!(dispatcher.state(), DispatcherState::Idle);
    assert_eq!(dispatcher.x_scale().domain(), (40.0, 180.0));
    let labels = dispatcher.scene().labels();
    assert_eq!(labels.state_of(Metric::TicketsSold), Some(LabelState::Active));
    assert_eq!(labels.state_of(Metric::TotalRevenue), Some(LabelState::Inactive));
    assert!(dispatcher.is_animating(1.0));
}

#[test]
fn switching_back_restores_direct_build() {
    let config = ChartConfig::default();
    let mut dispatcher = InteractionDispatcher::new(dataset(), &config);
    let direct = config.scale_builder().build(&dataset(), Metric::TotalRevenue);

    dispatcher.handle_label_click("cinema_sites", 0.0);
    dispatcher.handle_label_click("total_revenue", 100.0);

    assert_eq!(*dispatcher.x_scale(), direct);
    assert_eq!(dispatcher.scene().x_axis().target_scale(), direct);
}

#[test]
fn unknown_label_is_ignored() {
    let mut dispatcher = dispatcher();
    let scale_before = *dispatcher.x_scale();

    let outcome = dispatcher.handle_label_click("tcket_sales", 0.0);

    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::UnknownMetric));
    assert_eq!(dispatcher.selected_metric(), Metric::TotalRevenue);
    assert_eq!(*dispatcher.x_scale(), scale_before);
    assert_single_active(&dispatcher);
}

#[test]
fn events_are_published_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = dispatcher();
    let sink = Rc::clone(&seen);
    dispatcher.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    dispatcher.handle_label_click("ticket_price", 0.0);
    dispatcher.handle_label_click("ticket_price", 10.0);
    dispatcher.handle_label_click("", 20.0);

    assert_eq!(
        *seen.borrow(),
        vec![
            ChartEvent::MetricSwitched { from: Metric::TotalRevenue, to: Metric::TicketPrice },
            ChartEvent::ClickIgnored {
                label_id: "ticket_price".to_string(),
                reason: IgnoreReason::AlreadyActive,
            },
            ChartEvent::ClickIgnored { label_id: String::new(), reason: IgnoreReason::UnknownMetric },
        ]
    );
}

#[quickcheck]
fn exactly_one_label_active_after_any_clicks(clicks: Vec<u8>) -> bool {
    let metrics: Vec<Metric> = Metric::iter().collect();
    let mut dispatcher = dispatcher();

    for (step, click) in clicks.iter().enumerate() {
        let id = match metrics.get(*click as usize % (metrics.len() + 1)) {
            Some(metric) => metric.id().to_string(),
            None => "not_a_metric".to_string(),
        };
        dispatcher.handle_label_click(&id, step as f64 * 50.0);
    }

    let labels = dispatcher.scene().labels();
    labels.active_count() == 1
        && labels.active_metric() == Some(dispatcher.selected_metric())
        && dispatcher.view().selected_metric() == dispatcher.selected_metric()
}
