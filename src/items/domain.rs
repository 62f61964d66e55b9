use crate::core::domain::Identifiable;
use crate::core::library::CirculationStatus;

pub mod model;

// Loanable is implemented by anything the library can lend out and fine for.
pub trait Loanable: Identifiable {
    fn checkout_length(&self) -> u64;
    fn status(&self) -> CirculationStatus;
    fn date_checked_out(&self) -> Option<u64>;

    // An item is overdue once the days elapsed since check-out exceed its checkout length.
    fn is_overdue(&self, current_date: u64) -> bool {
        match (self.status(), self.date_checked_out()) {
            (CirculationStatus::CheckedOut, Some(checked_out_at)) => {
                current_date.saturating_sub(checked_out_at) > self.checkout_length()
            }
            _ => false,
        }
    }
}
