use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// DomainEventType defines type of event for domain changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
}

// DomainEvent records a committed change to holdings or members. `logical_date` is the
// library day the change happened on, `created_at` the wall clock time it was recorded.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub logical_date: u64,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, logical_date: u64,
                               metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Added, logical_date, metadata, json))
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, logical_date: u64,
                                 metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Updated, logical_date, metadata, json))
    }

    fn build(name: &str, group: &str, key: &str, kind: DomainEventType, logical_date: u64,
             metadata: &HashMap<String, String>, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            logical_date,
            metadata: metadata.clone(),
            json_data: json,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[test]
    fn test_should_build_added() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("name", "group", "key", 3, &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        assert_eq!("name", event.name.as_str());
        assert_eq!("key", event.key.as_str());
        assert_eq!(3, event.logical_date);
        assert_eq!(DomainEventType::Added, event.kind);
    }

    #[test]
    fn test_should_build_updated() {
        let event = DomainEvent::updated("name", "group", "key", 0, &HashMap::new(), &vec!["abc"]).expect("build event");
        assert_eq!(r#"["abc"]"#, event.json_data.as_str());
        assert_eq!(DomainEventType::Updated, event.kind);
    }

    #[test]
    fn test_should_assign_unique_event_ids() {
        let first = DomainEvent::updated("name", "group", "key", 0, &HashMap::new(), &1).expect("build event");
        let second = DomainEvent::updated("name", "group", "key", 0, &HashMap::new(), &1).expect("build event");
        assert_ne!(first.event_id, second.event_id);
    }
}
