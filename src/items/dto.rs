use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::items::domain::model::LibraryItem;

// ItemRecord is a flat catalog record as found in the catalog JSON files. The kind is
// inferred from which descriptive field is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRecord {
    #[serde(rename_all = "PascalCase")]
    Book { id: String, title: String, author: String },
    #[serde(rename_all = "PascalCase")]
    Movie { id: String, title: String, director: String },
    #[serde(rename_all = "PascalCase")]
    Album { id: String, title: String, artist: String },
}

impl Identifiable for ItemRecord {
    fn id(&self) -> String {
        match self {
            ItemRecord::Book { id, .. } => id.to_string(),
            ItemRecord::Movie { id, .. } => id.to_string(),
            ItemRecord::Album { id, .. } => id.to_string(),
        }
    }
}

impl From<&ItemRecord> for LibraryItem {
    fn from(other: &ItemRecord) -> LibraryItem {
        match other {
            ItemRecord::Book { id, title, author } => LibraryItem::book(id, title, author),
            ItemRecord::Movie { id, title, director } => LibraryItem::movie(id, title, director),
            ItemRecord::Album { id, title, artist } => LibraryItem::album(id, title, artist),
        }
    }
}
