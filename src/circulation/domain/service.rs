use std::collections::HashMap;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};
use crate::circulation::domain::CirculationService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{CirculationStatus, LibraryError, LibraryResult, TransactionOutcome};
use crate::gateway::events::EventPublisher;
use crate::items::domain::Loanable;
use crate::items::domain::model::LibraryItem;
use crate::patrons::domain::model::Patron;

const HOLDINGS_GROUP: &str = "holdings";
const MEMBERS_GROUP: &str = "members";
const CIRCULATION_GROUP: &str = "circulation";

// Library owns the holdings and members of a branch together with its logical date.
// Items and patrons refer to each other by id only; all cross references are resolved
// through the two maps, and all mutation goes through the transaction methods.
#[derive(Debug)]
pub struct Library {
    branch_id: String,
    fine_per_day: f64,
    holdings: HashMap<String, LibraryItem>,
    members: HashMap<String, Patron>,
    current_date: u64,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            fine_per_day: config.fine_per_day,
            holdings: HashMap::new(),
            members: HashMap::new(),
            current_date: 0,
            events_publisher,
        }
    }

    pub fn branch_id(&self) -> &str {
        self.branch_id.as_str()
    }

    // Direct access for callers that need to repair or stage item state by hand.
    pub(crate) fn lookup_library_item_mut(&mut self, library_item_id: &str) -> Option<&mut LibraryItem> {
        self.holdings.get_mut(library_item_id)
    }

    fn publish<T: Serialize>(&self, name: &str, group: &str, key: &str, kind: DomainEventType, data: &T) {
        let metadata = HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]);
        let event = match kind {
            DomainEventType::Added => DomainEvent::added(name, group, key, self.current_date, &metadata, data),
            DomainEventType::Updated => DomainEvent::updated(name, group, key, self.current_date, &metadata, data),
        };
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!(name, key, "failed to publish event: {}", err);
        }
    }
}

fn register<T: Identifiable>(entries: &mut HashMap<String, T>, entity: T) -> bool {
    entries.insert(entity.id(), entity).is_some()
}

impl CirculationService for Library {
    fn holdings(&self) -> &HashMap<String, LibraryItem> {
        &self.holdings
    }

    fn members(&self) -> &HashMap<String, Patron> {
        &self.members
    }

    fn current_date(&self) -> u64 {
        self.current_date
    }

    fn add_library_item(&mut self, library_item: LibraryItem) {
        let snapshot = library_item.clone();
        if register(&mut self.holdings, library_item) {
            debug!(library_item_id = snapshot.library_item_id(), "replaced existing library item");
        }
        self.publish("item_added", HOLDINGS_GROUP, snapshot.library_item_id(), DomainEventType::Added, &snapshot);
    }

    fn add_patron(&mut self, patron: Patron) {
        let snapshot = patron.clone();
        if register(&mut self.members, patron) {
            debug!(patron_id = snapshot.patron_id(), "replaced existing patron");
        }
        self.publish("patron_added", MEMBERS_GROUP, snapshot.patron_id(), DomainEventType::Added, &snapshot);
    }

    fn lookup_library_item_from_id(&self, library_item_id: &str) -> Option<&LibraryItem> {
        self.holdings.get(library_item_id)
    }

    fn lookup_patron_from_id(&self, patron_id: &str) -> Option<&Patron> {
        self.members.get(patron_id)
    }

    fn check_out_library_item(&mut self, patron_id: &str, library_item_id: &str) -> TransactionOutcome {
        let Some(patron) = self.members.get_mut(patron_id) else {
            debug!(patron_id, library_item_id, "check out rejected, patron not found");
            return TransactionOutcome::PatronNotFound;
        };
        let Some(library_item) = self.holdings.get_mut(library_item_id) else {
            debug!(patron_id, library_item_id, "check out rejected, item not found");
            return TransactionOutcome::ItemNotFound;
        };

        match library_item.status() {
            CirculationStatus::CheckedOut => {
                debug!(patron_id, library_item_id, "check out rejected, item already checked out");
                return TransactionOutcome::ItemAlreadyCheckedOut;
            }
            CirculationStatus::OnHoldShelf if library_item.requested_by() != Some(patron_id) => {
                debug!(patron_id, library_item_id, "check out rejected, item on hold by another patron");
                return TransactionOutcome::ItemOnHoldByAnotherPatron;
            }
            _ => {}
        }

        if library_item.requested_by() == Some(patron_id) {
            library_item.set_requested_by(None);
        }
        library_item.set_checked_out_by(Some(patron_id.to_string()));
        library_item.set_date_checked_out(Some(self.current_date));
        library_item.set_status(CirculationStatus::CheckedOut);
        patron.add_library_item(library_item_id);

        let snapshot = library_item.clone();
        info!(patron_id, library_item_id, current_date = self.current_date, "library item checked out");
        self.publish("item_checked_out", CIRCULATION_GROUP, library_item_id, DomainEventType::Updated, &snapshot);
        TransactionOutcome::Success
    }

    fn return_library_item(&mut self, library_item_id: &str) -> LibraryResult<TransactionOutcome> {
        let Some(library_item) = self.holdings.get_mut(library_item_id) else {
            debug!(library_item_id, "return rejected, item not found");
            return Ok(TransactionOutcome::ItemNotFound);
        };
        if library_item.status() != CirculationStatus::CheckedOut {
            debug!(library_item_id, "return rejected, item already in library");
            return Ok(TransactionOutcome::ItemAlreadyInLibrary);
        }

        let patron_id = library_item.checked_out_by()
            .map(str::to_string)
            .ok_or_else(|| LibraryError::invariant(
                format!("checked out item {} has no holder", library_item_id).as_str(), None))?;
        let patron = self.members.get_mut(patron_id.as_str())
            .ok_or_else(|| LibraryError::invariant(
                format!("holder {} of item {} is not a member", patron_id, library_item_id).as_str(), None))?;
        patron.remove_library_item(library_item_id)?;

        // a pending request takes priority over shelving
        if library_item.requested_by().is_some() {
            library_item.set_status(CirculationStatus::OnHoldShelf);
        } else {
            library_item.set_status(CirculationStatus::OnShelf);
        }
        library_item.set_checked_out_by(None);
        library_item.set_date_checked_out(None);

        let snapshot = library_item.clone();
        info!(patron_id = patron_id.as_str(), library_item_id, status = %snapshot.status(), "library item returned");
        self.publish("item_returned", CIRCULATION_GROUP, library_item_id, DomainEventType::Updated, &snapshot);
        Ok(TransactionOutcome::Success)
    }

    fn request_library_item(&mut self, patron_id: &str, library_item_id: &str) -> TransactionOutcome {
        if !self.members.contains_key(patron_id) {
            debug!(patron_id, library_item_id, "request rejected, patron not found");
            return TransactionOutcome::PatronNotFound;
        }
        let Some(library_item) = self.holdings.get_mut(library_item_id) else {
            debug!(patron_id, library_item_id, "request rejected, item not found");
            return TransactionOutcome::ItemNotFound;
        };
        if library_item.requested_by().is_some() {
            debug!(patron_id, library_item_id, "request rejected, item already on hold");
            return TransactionOutcome::ItemAlreadyOnHold;
        }

        library_item.set_requested_by(Some(patron_id.to_string()));
        if library_item.status() == CirculationStatus::OnShelf {
            library_item.set_status(CirculationStatus::OnHoldShelf);
        }

        let snapshot = library_item.clone();
        info!(patron_id, library_item_id, status = %snapshot.status(), "library item requested");
        self.publish("item_requested", CIRCULATION_GROUP, library_item_id, DomainEventType::Updated, &snapshot);
        TransactionOutcome::Success
    }

    fn pay_fine(&mut self, patron_id: &str, amount: f64) -> TransactionOutcome {
        let Some(patron) = self.members.get_mut(patron_id) else {
            debug!(patron_id, amount, "payment rejected, patron not found");
            return TransactionOutcome::PatronNotFound;
        };
        patron.amend_fine(-amount);

        let balance = patron.fine_amount();
        info!(patron_id, amount, balance, "fine paid");
        self.publish("fine_paid", MEMBERS_GROUP, patron_id, DomainEventType::Updated,
                     &json!({"patron_id": patron_id, "amount": amount, "balance": balance}));
        TransactionOutcome::Success
    }

    // Charges are re-evaluated from the check-out date on every advance, so an overdue
    // item costs its holder fine_per_day for each advance until it comes back.
    fn increment_current_date(&mut self) {
        self.current_date += 1;
        let today = self.current_date;

        let mut assessed = vec![];
        for library_item in self.holdings.values() {
            if !library_item.is_overdue(today) {
                continue;
            }
            let holder = library_item.checked_out_by();
            let patron = match holder {
                Some(patron_id) => self.members.get_mut(patron_id),
                None => None,
            };
            match patron {
                Some(patron) => {
                    patron.amend_fine(self.fine_per_day);
                    assessed.push((patron.patron_id().to_string(), json!({
                        "patron_id": patron.patron_id(),
                        "library_item_id": library_item.library_item_id(),
                        "amount": self.fine_per_day,
                        "balance": patron.fine_amount(),
                    })));
                }
                None => {
                    warn!(library_item_id = library_item.library_item_id(), holder,
                        "overdue item has no resolvable holder, no fine assessed");
                }
            }
        }

        debug!(current_date = today, fines = assessed.len(), "advanced current date");
        for (patron_id, charge) in assessed {
            self.publish("fine_assessed", MEMBERS_GROUP, patron_id.as_str(), DomainEventType::Updated, &charge);
        }
    }
}
