//! Catalog - the records a loader produces and the document they come from.
//!
//! The remote store returns one JSON object per collection, keyed by the
//! store's own ids:
//!
//! ```json
//! {
//!   "m1": { "name": "Sushi", "description": "Finest fish and veggies", "price": 22.99 },
//!   "m2": { "name": "Schnitzel", "description": "A german specialty!", "price": 16.5 }
//! }
//! ```
//!
//! [`CatalogDocument`] keeps those pairs in source order and [`normalize`]
//! turns them into [`Record`]s, one per key.
//!
//! ```ignore
//! use catalog_loader::catalog::{normalize, CatalogDocument};
//!
//! let document = CatalogDocument::parse(br#"{"m1": {"name": "Pizza", "price": 9.5}}"#)?;
//! let records = normalize(document);
//! assert_eq!(records[0].id, "m1");
//! ```

mod document;
mod record;

pub use document::{CatalogDocument, CatalogEntry};
pub use record::Record;

/// Build one record per document key, in the document's key order.
///
/// `id` is the source key; the entry's fields are moved across unchanged.
/// No sorting and no deduplication happens here.
pub fn normalize(document: CatalogDocument) -> Vec<Record> {
    document
        .into_entries()
        .into_iter()
        .map(|(id, entry)| Record::from_entry(id, entry))
        .collect()
}
