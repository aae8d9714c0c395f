use box_office_scatter::application::InteractionDispatcher;
use box_office_scatter::config::ChartConfig;
use box_office_scatter::domain::chart::tooltip_text;
use box_office_scatter::domain::movie_data::{Metric, MovieDataset, MovieRecord};
use strum::IntoEnumIterator;

fn record_2005() -> MovieRecord {
    MovieRecord::new(2005.0, 1200.0, 300.0, 7.89, 39000.0)
}

#[test]
fn revenue_tooltip_text() {
    assert_eq!(tooltip_text(Metric::TotalRevenue, &record_2005()), "2005 Total Revenue: 300");
}

#[test]
fn every_metric_has_its_own_label() {
    let lines: Vec<String> =
        Metric::iter().map(|metric| tooltip_text(metric, &record_2005())).collect();

    insta::assert_json_snapshot!(lines, @r###"
    [
      "2005 Total Revenue: 300",
      "2005 Ticket Sales: 1200",
      "2005 Cinema Sites: 39000",
      "2005 Ticket Price: 7.89"
    ]
    "###);
}

#[test]
fn nan_value_is_printed_not_panicked() {
    let record = MovieRecord::new(2010.0, f64::NAN, 1.0, 1.0, 1.0);
    assert_eq!(tooltip_text(Metric::TicketsSold, &record), "2010 Ticket Sales: NaN");
}

#[test]
fn visible_tooltip_follows_rebind_immediately() {
    let dataset = MovieDataset::new(vec![
        record_2005(),
        MovieRecord::new(2006.0, 1300.0, 320.0, 8.0, 39500.0),
    ])
    .unwrap();
    let mut dispatcher = InteractionDispatcher::new(dataset, &ChartConfig::default());

    assert!(dispatcher.hover_point(0));
    assert_eq!(
        dispatcher.scene().tooltip_content().as_deref(),
        Some("2005 Total Revenue: 300")
    );

    dispatcher.handle_label_click("ticket_price", 0.0);

    assert_eq!(dispatcher.scene().tooltip_content().as_deref(), Some("2005 Ticket Price: 7.89"));
    let frame = dispatcher.frame(0.0);
    let tooltip = frame.tooltip.expect("hovered point shows a tooltip");
    assert_eq!(tooltip.text, "2005 Ticket Price: 7.89");
    assert_eq!(tooltip.x, frame.points[0].cx);
    assert_eq!(tooltip.y, frame.points[0].cy);
}

#[test]
fn hover_out_hides_tooltip() {
    let dataset = MovieDataset::new(vec![record_2005()]).unwrap();
    let mut dispatcher = InteractionDispatcher::new(dataset, &ChartConfig::default());

    assert!(!dispatcher.hover_point(5));
    assert!(dispatcher.frame(0.0).tooltip.is_none());

    dispatcher.hover_point(0);
    dispatcher.unhover_point();
    assert!(dispatcher.scene().tooltip_content().is_none());
    assert!(dispatcher.frame(0.0).tooltip.is_none());
}

#[test]
fn rebinding_bumps_generation_once_per_switch() {
    let dataset = MovieDataset::new(vec![record_2005()]).unwrap();
    let mut dispatcher = InteractionDispatcher::new(dataset, &ChartConfig::default());

    dispatcher.handle_label_click("cinema_sites", 0.0);
    dispatcher.handle_label_click("cinema_sites", 10.0);
    dispatcher.handle_label_click("tickets_sold", 20.0);

    let binding = dispatcher.scene().tooltip();
    assert_eq!(binding.metric, Metric::TicketsSold);
    assert_eq!(binding.generation, 2);
}
