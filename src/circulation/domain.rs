use std::collections::HashMap;
use crate::core::library::{LibraryResult, TransactionOutcome};
use crate::items::domain::model::LibraryItem;
use crate::patrons::domain::model::Patron;

pub mod service;

// CirculationService is the transaction surface of a library branch. Every rejection is
// reported as a TransactionOutcome; the only error is a broken internal invariant.
pub trait CirculationService: Send {
    fn holdings(&self) -> &HashMap<String, LibraryItem>;
    fn members(&self) -> &HashMap<String, Patron>;
    fn current_date(&self) -> u64;

    fn add_library_item(&mut self, library_item: LibraryItem);
    fn add_patron(&mut self, patron: Patron);
    fn lookup_library_item_from_id(&self, library_item_id: &str) -> Option<&LibraryItem>;
    fn lookup_patron_from_id(&self, patron_id: &str) -> Option<&Patron>;

    fn check_out_library_item(&mut self, patron_id: &str, library_item_id: &str) -> TransactionOutcome;
    fn return_library_item(&mut self, library_item_id: &str) -> LibraryResult<TransactionOutcome>;
    fn request_library_item(&mut self, patron_id: &str, library_item_id: &str) -> TransactionOutcome;
    fn pay_fine(&mut self, patron_id: &str, amount: f64) -> TransactionOutcome;
    fn increment_current_date(&mut self);
}
