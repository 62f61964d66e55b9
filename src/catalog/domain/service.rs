use std::fs;
use std::path::Path;
use tracing::debug;
use crate::catalog::domain::CatalogSource;
use crate::core::library::LibraryResult;
use crate::items::domain::model::LibraryItem;
use crate::items::dto::ItemRecord;
use crate::patrons::domain::model::Patron;
use crate::patrons::dto::PatronRecord;

const ITEM_FILES: [&str; 3] = ["books.json", "movies.json", "albums.json"];
const PATRON_FILE: &str = "patrons.json";

// JsonCatalog holds catalog documents, each a JSON array of flat records.
#[derive(Debug, Default, Clone)]
pub struct JsonCatalog {
    item_documents: Vec<String>,
    patron_documents: Vec<String>,
}

impl JsonCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items_json(mut self, json: &str) -> Self {
        self.item_documents.push(json.to_string());
        self
    }

    pub fn with_patrons_json(mut self, json: &str) -> Self {
        self.patron_documents.push(json.to_string());
        self
    }

    // Reads books.json, movies.json, albums.json and patrons.json from the directory.
    // Files that do not exist are skipped.
    pub fn from_dir(dir: &Path) -> LibraryResult<Self> {
        let mut catalog = Self::new();
        for name in ITEM_FILES {
            if let Some(json) = read_if_exists(&dir.join(name))? {
                catalog = catalog.with_items_json(json.as_str());
            }
        }
        if let Some(json) = read_if_exists(&dir.join(PATRON_FILE))? {
            catalog = catalog.with_patrons_json(json.as_str());
        }
        Ok(catalog)
    }
}

fn read_if_exists(path: &Path) -> LibraryResult<Option<String>> {
    if !path.exists() {
        debug!(path = %path.display(), "catalog file not found, skipping");
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

impl CatalogSource for JsonCatalog {
    fn library_items(&self) -> LibraryResult<Vec<LibraryItem>> {
        let mut library_items = vec![];
        for json in &self.item_documents {
            let records: Vec<ItemRecord> = serde_json::from_str(json)?;
            library_items.extend(records.iter().map(LibraryItem::from));
        }
        Ok(library_items)
    }

    fn patrons(&self) -> LibraryResult<Vec<Patron>> {
        let mut patrons = vec![];
        for json in &self.patron_documents {
            let records: Vec<PatronRecord> = serde_json::from_str(json)?;
            patrons.extend(records.iter().map(Patron::from));
        }
        Ok(patrons)
    }
}
