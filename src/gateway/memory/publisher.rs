use std::sync::{Arc, Mutex};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps a journal of published events. Clones share the same journal,
// so a caller can hand one clone to the library and read events back from another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    journal: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        let journal = self.journal.lock()
            .map_err(|err| LibraryError::runtime(format!("event journal poisoned {:?}", err).as_str(), None))?;
        Ok(journal.clone())
    }

    pub fn event_names(&self) -> LibraryResult<Vec<String>> {
        Ok(self.events()?.iter().map(|e| e.name.to_string()).collect())
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut journal = self.journal.lock()
            .map_err(|err| LibraryError::runtime(format!("event journal poisoned {:?}", err).as_str(), None))?;
        journal.push(event.clone());
        Ok(())
    }
}
