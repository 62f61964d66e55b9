use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// Patron abstracts a library member, the items they currently have checked out (in
// check-out order) and their outstanding fine. The balance has no floor, so an
// overpayment leaves it negative.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Patron {
    patron_id: String,
    name: String,
    checked_out_items: Vec<String>,
    fine_amount: f64,
}

impl Patron {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            checked_out_items: vec![],
            fine_amount: 0.0,
        }
    }

    pub fn patron_id(&self) -> &str {
        self.patron_id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn checked_out_items(&self) -> &[String] {
        self.checked_out_items.as_slice()
    }

    pub fn fine_amount(&self) -> f64 {
        self.fine_amount
    }

    pub fn add_library_item(&mut self, library_item_id: &str) {
        self.checked_out_items.push(library_item_id.to_string());
    }

    // Removes the first occurrence of the item. A missing item means the library's
    // bookkeeping is broken, so it is reported as an invariant error.
    pub fn remove_library_item(&mut self, library_item_id: &str) -> LibraryResult<()> {
        match self.checked_out_items.iter().position(|id| id == library_item_id) {
            Some(ndx) => {
                self.checked_out_items.remove(ndx);
                Ok(())
            }
            None => Err(LibraryError::invariant(
                format!("item {} is not checked out by patron {}",
                        library_item_id, self.patron_id).as_str(), None)),
        }
    }

    pub fn amend_fine(&mut self, amount: f64) {
        self.fine_amount += amount;
    }
}

impl Identifiable for Patron {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}


#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::patrons::domain::model::Patron;

    fn assert_close(expected: f64, actual: f64) {
        assert!((expected - actual).abs() < 1e-9, "expected {} but was {}", expected, actual);
    }

    #[test]
    fn test_should_build_patron() {
        let patron = Patron::new("123", "John");
        assert_eq!("123", patron.patron_id());
        assert_eq!("John", patron.name());
        assert!(patron.checked_out_items().is_empty());
        assert_eq!(0.0, patron.fine_amount());
    }

    #[test]
    fn test_should_add_and_remove_items_in_order() {
        let mut patron = Patron::new("123", "John");
        patron.add_library_item("abc");
        assert_eq!(vec!["abc".to_string()], patron.checked_out_items());
        patron.add_library_item("aaa");
        assert_eq!(vec!["abc".to_string(), "aaa".to_string()], patron.checked_out_items());
        patron.remove_library_item("abc").expect("should remove");
        assert_eq!(vec!["aaa".to_string()], patron.checked_out_items());
    }

    #[test]
    fn test_should_remove_only_first_duplicate() {
        let mut patron = Patron::new("123", "John");
        patron.add_library_item("abc");
        patron.add_library_item("abc");
        patron.remove_library_item("abc").expect("should remove");
        assert_eq!(vec!["abc".to_string()], patron.checked_out_items());
    }

    #[test]
    fn test_should_fail_removing_missing_item() {
        let mut patron = Patron::new("123", "John");
        let res = patron.remove_library_item("abc");
        assert!(matches!(res, Err(LibraryError::Invariant{ message: _, reason_code: _ })));
    }

    #[test]
    fn test_should_amend_fine_without_floor() {
        let mut patron = Patron::new("123", "John");
        patron.amend_fine(20.0);
        assert_close(20.0, patron.fine_amount());
        patron.amend_fine(-5.0);
        assert_close(15.0, patron.fine_amount());
        patron.amend_fine(0.2);
        assert_close(15.2, patron.fine_amount());
        patron.amend_fine(-20.0);
        assert_close(-4.8, patron.fine_amount());
    }
}
