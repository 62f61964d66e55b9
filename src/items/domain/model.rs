use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::CirculationStatus;
use crate::items::domain::Loanable;

pub const BOOK_CHECKOUT_LENGTH: u64 = 21;
pub const MOVIE_CHECKOUT_LENGTH: u64 = 7;
pub const ALBUM_CHECKOUT_LENGTH: u64 = 14;

// ItemKind is the closed set of things the library lends. Kinds differ only in how long
// they may be borrowed and in the one descriptive field they carry.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemKind {
    Book { author: String },
    Movie { director: String },
    Album { artist: String },
}

impl ItemKind {
    pub fn checkout_length(&self) -> u64 {
        match self {
            ItemKind::Book { .. } => BOOK_CHECKOUT_LENGTH,
            ItemKind::Movie { .. } => MOVIE_CHECKOUT_LENGTH,
            ItemKind::Album { .. } => ALBUM_CHECKOUT_LENGTH,
        }
    }

    // author, director or artist depending on the kind
    pub fn creator(&self) -> &str {
        match self {
            ItemKind::Book { author } => author.as_str(),
            ItemKind::Movie { director } => director.as_str(),
            ItemKind::Album { artist } => artist.as_str(),
        }
    }
}

// LibraryItem is a single lendable copy held by the library. Patron references are
// stored as patron ids and resolved through the library's members.
//
// Setters do not validate against the current status; keeping the fields consistent
// is the job of the circulation engine.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibraryItem {
    library_item_id: String,
    title: String,
    kind: ItemKind,
    status: CirculationStatus,
    checked_out_by: Option<String>,
    requested_by: Option<String>,
    date_checked_out: Option<u64>,
}

impl LibraryItem {
    pub fn new(library_item_id: &str, title: &str, kind: ItemKind) -> Self {
        Self {
            library_item_id: library_item_id.to_string(),
            title: title.to_string(),
            kind,
            status: CirculationStatus::OnShelf,
            checked_out_by: None,
            requested_by: None,
            date_checked_out: None,
        }
    }

    pub fn book(library_item_id: &str, title: &str, author: &str) -> Self {
        Self::new(library_item_id, title, ItemKind::Book { author: author.to_string() })
    }

    pub fn movie(library_item_id: &str, title: &str, director: &str) -> Self {
        Self::new(library_item_id, title, ItemKind::Movie { director: director.to_string() })
    }

    pub fn album(library_item_id: &str, title: &str, artist: &str) -> Self {
        Self::new(library_item_id, title, ItemKind::Album { artist: artist.to_string() })
    }

    pub fn library_item_id(&self) -> &str {
        self.library_item_id.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn creator(&self) -> &str {
        self.kind.creator()
    }

    pub fn set_status(&mut self, status: CirculationStatus) {
        self.status = status;
    }

    pub fn checked_out_by(&self) -> Option<&str> {
        self.checked_out_by.as_deref()
    }

    pub fn set_checked_out_by(&mut self, patron_id: Option<String>) {
        self.checked_out_by = patron_id;
    }

    pub fn requested_by(&self) -> Option<&str> {
        self.requested_by.as_deref()
    }

    pub fn set_requested_by(&mut self, patron_id: Option<String>) {
        self.requested_by = patron_id;
    }

    pub fn set_date_checked_out(&mut self, date: Option<u64>) {
        self.date_checked_out = date;
    }
}

impl Identifiable for LibraryItem {
    fn id(&self) -> String {
        self.library_item_id.to_string()
    }
}

impl Loanable for LibraryItem {
    fn checkout_length(&self) -> u64 {
        self.kind.checkout_length()
    }

    fn status(&self) -> CirculationStatus {
        self.status
    }

    fn date_checked_out(&self) -> Option<u64> {
        self.date_checked_out
    }
}


#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::CirculationStatus;
    use crate::items::domain::Loanable;
    use crate::items::domain::model::{ItemKind, LibraryItem};

    #[test]
    fn test_should_build_library_item() {
        let item = LibraryItem::book("abc", "the thing", "someone");
        assert_eq!("abc", item.library_item_id());
        assert_eq!("abc", item.id().as_str());
        assert_eq!("the thing", item.title());
        assert_eq!(CirculationStatus::OnShelf, item.status());
        assert_eq!(None, item.checked_out_by());
        assert_eq!(None, item.requested_by());
        assert_eq!(None, item.date_checked_out());
    }

    #[test]
    fn test_should_use_checkout_length_of_kind() {
        assert_eq!(21, LibraryItem::book("1", "Dune", "Frank Herbert").checkout_length());
        assert_eq!(7, LibraryItem::movie("2", "Alien", "Ridley Scott").checkout_length());
        assert_eq!(14, LibraryItem::album("3", "Kid A", "Radiohead").checkout_length());
    }

    #[test]
    fn test_should_expose_creator() {
        let movie = LibraryItem::movie("2", "Alien", "Ridley Scott");
        assert_eq!("Ridley Scott", movie.creator());
        assert_eq!(&ItemKind::Movie { director: "Ridley Scott".to_string() }, movie.kind());
    }

    #[test]
    fn test_should_set_fields_without_validation() {
        let mut item = LibraryItem::album("3", "Kid A", "Radiohead");
        item.set_checked_out_by(Some("123".to_string()));
        assert_eq!(Some("123"), item.checked_out_by());
        assert_eq!(CirculationStatus::OnShelf, item.status());
        item.set_requested_by(Some("124".to_string()));
        item.set_date_checked_out(Some(4));
        item.set_status(CirculationStatus::CheckedOut);
        assert_eq!(Some("124"), item.requested_by());
        assert_eq!(Some(4), item.date_checked_out());
        assert_eq!(CirculationStatus::CheckedOut, item.status());
    }

    #[test]
    fn test_should_detect_overdue() {
        let mut item = LibraryItem::movie("2", "Alien", "Ridley Scott");
        assert!(!item.is_overdue(100));
        item.set_status(CirculationStatus::CheckedOut);
        item.set_date_checked_out(Some(3));
        assert!(!item.is_overdue(10));
        assert!(item.is_overdue(11));
    }

    #[test]
    fn test_should_serialize_kind_with_tag() {
        let json = serde_json::to_string(&ItemKind::Album { artist: "Radiohead".to_string() }).expect("serialize");
        assert_eq!(r#"{"kind":"Album","artist":"Radiohead"}"#, json.as_str());
    }
}
