use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CatalogEntry;

/// A single catalog entry, identified by its key in the source document.
///
/// Fields are carried exactly as the store returned them, whatever their JSON
/// type. An absent or `null` field is `None`. The `*_str`/`price_f64` helpers
/// read a field for display when it has the expected type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
}

impl Record {
    pub(crate) fn from_entry(id: String, entry: CatalogEntry) -> Self {
        Self {
            id,
            name: entry.name,
            description: entry.description,
            price: entry.price,
        }
    }

    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    pub fn description_str(&self) -> Option<&str> {
        self.description.as_ref().and_then(Value::as_str)
    }

    /// The price as an `f64` if it is a JSON number.
    pub fn price_f64(&self) -> Option<f64> {
        self.price.as_ref().and_then(Value::as_f64)
    }
}
