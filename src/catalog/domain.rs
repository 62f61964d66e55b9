use tracing::info;
use crate::circulation::domain::CirculationService;
use crate::core::library::LibraryResult;
use crate::items::domain::model::LibraryItem;
use crate::patrons::domain::model::Patron;

pub mod service;

// CatalogSource produces already parsed entities for registration with a library.
pub trait CatalogSource {
    fn library_items(&self) -> LibraryResult<Vec<LibraryItem>>;
    fn patrons(&self) -> LibraryResult<Vec<Patron>>;
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct CatalogSummary {
    pub library_items: usize,
    pub patrons: usize,
}

// Registers every item and patron of the source. Both lists are parsed before anything
// is registered, so a malformed source leaves the library untouched.
pub fn load_catalog(library: &mut dyn CirculationService, source: &dyn CatalogSource) -> LibraryResult<CatalogSummary> {
    let library_items = source.library_items()?;
    let patrons = source.patrons()?;
    let summary = CatalogSummary {
        library_items: library_items.len(),
        patrons: patrons.len(),
    };
    for library_item in library_items {
        library.add_library_item(library_item);
    }
    for patron in patrons {
        library.add_patron(patron);
    }
    info!(library_items = summary.library_items, patrons = summary.patrons, "catalog loaded");
    Ok(summary)
}
