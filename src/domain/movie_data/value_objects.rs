use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use super::entities::MovieRecord;

/// Value Object - metric plotted on the horizontal axis.
///
/// The strum/serde name is the canonical machine id: it is the CSV column,
/// the `data-metric` attribute on the axis label, and the key for every
/// lookup below. Variant order is the label order under the plot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Metric {
    #[strum(serialize = "total_revenue")]
    #[serde(rename = "total_revenue")]
    TotalRevenue,

    #[strum(serialize = "tickets_sold")]
    #[serde(rename = "tickets_sold")]
    TicketsSold,

    #[strum(serialize = "cinema_sites")]
    #[serde(rename = "cinema_sites")]
    CinemaSites,

    #[strum(serialize = "ticket_price")]
    #[serde(rename = "ticket_price")]
    TicketPrice,
}

/// One row of the metric lookup table.
pub struct MetricSpec {
    pub metric: Metric,
    pub tooltip_label: &'static str,
    pub axis_title: &'static str,
    pub accessor: fn(&MovieRecord) -> f64,
}

static TOTAL_REVENUE: MetricSpec = MetricSpec {
    metric: Metric::TotalRevenue,
    tooltip_label: "Total Revenue:",
    axis_title: "Total Annual Movie Industry Revenue (Billions $)",
    accessor: total_revenue,
};

static TICKETS_SOLD: MetricSpec = MetricSpec {
    metric: Metric::TicketsSold,
    tooltip_label: "Ticket Sales:",
    axis_title: "# of Tickets Sold (Millions)",
    accessor: tickets_sold,
};

static CINEMA_SITES: MetricSpec = MetricSpec {
    metric: Metric::CinemaSites,
    tooltip_label: "Cinema Sites:",
    axis_title: "# of Cinemas in U.S.",
    accessor: cinema_sites,
};

static TICKET_PRICE: MetricSpec = MetricSpec {
    metric: Metric::TicketPrice,
    tooltip_label: "Ticket Price:",
    axis_title: "Average Ticket Price ($ U.S.)",
    accessor: ticket_price,
};

fn total_revenue(record: &MovieRecord) -> f64 {
    record.total_revenue
}

fn tickets_sold(record: &MovieRecord) -> f64 {
    record.tickets_sold
}

fn cinema_sites(record: &MovieRecord) -> f64 {
    record.cinema_sites
}

fn ticket_price(record: &MovieRecord) -> f64 {
    record.ticket_price
}

impl Metric {
    /// Metric shown before the first click.
    pub const INITIAL: Metric = Metric::TotalRevenue;

    pub fn spec(self) -> &'static MetricSpec {
        match self {
            Metric::TotalRevenue => &TOTAL_REVENUE,
            Metric::TicketsSold => &TICKETS_SOLD,
            Metric::CinemaSites => &CINEMA_SITES,
            Metric::TicketPrice => &TICKET_PRICE,
        }
    }

    /// Canonical machine id, e.g. `"tickets_sold"`.
    pub fn id(&self) -> &str {
        self.as_ref()
    }

    pub fn tooltip_label(self) -> &'static str {
        self.spec().tooltip_label
    }

    pub fn axis_title(self) -> &'static str {
        self.spec().axis_title
    }

    pub fn value_of(self, record: &MovieRecord) -> f64 {
        (self.spec().accessor)(record)
    }
}
