use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes every domain event to the tracing subscriber as a structured line.
#[derive(Debug)]
pub struct LogsPublisher {
    topic: String,
}

impl LogsPublisher {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl EventPublisher for LogsPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        info!(topic = %self.topic, event_id = %event.event_id, name = %event.name, key = %event.key,
            logical_date = event.logical_date, data = %event.json_data, "domain event");
        Ok(())
    }
}
