use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

pub const DEFAULT_FINE_PER_DAY: f64 = 0.10;

// Identifiable defines the key under which an entity is registered with the library
pub trait Identifiable {
    fn id(&self) -> String;
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub fine_per_day: f64,
    pub events_via: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            fine_per_day: DEFAULT_FINE_PER_DAY,
            events_via: GatewayPublisherVia::Logs,
        }
    }
}
