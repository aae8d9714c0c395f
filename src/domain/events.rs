use crate::domain::movie_data::Metric;
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyActive,
    UnknownMetric,
}

/// Events emitted by the chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    MetricSwitched { from: Metric, to: Metric },
    ClickIgnored { label_id: String, reason: IgnoreReason },
}

impl DomainEvent for ChartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ChartEvent::MetricSwitched { .. } => "MetricSwitched",
            ChartEvent::ClickIgnored { .. } => "ClickIgnored",
        }
    }
}

pub trait EventPublisher {
    fn publish(&self, event: ChartEvent);
}

/// Simple in-memory event bus; handlers run synchronously in subscription order.
#[derive(Default)]
pub struct InMemoryEventBus {
    handlers: Vec<Box<dyn Fn(&ChartEvent)>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish(&self, event: ChartEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }
}
