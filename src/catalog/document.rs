//! CatalogDocument - a collection body parsed into ordered key/entry pairs.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The value stored under one key of the collection.
///
/// Fields are kept as raw JSON values. An entry that is not an object (a
/// number, string, array or bool) has no fields and becomes an entry with
/// every field `None`. A `null` entry is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
}

impl CatalogEntry {
    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let mut take = |key: &str| fields.remove(key).filter(|v| !v.is_null());
        Self {
            name: take("name"),
            description: take("description"),
            price: take("price"),
        }
    }
}

impl<'de> Deserialize<'de> for CatalogEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Err(de::Error::invalid_type(
                Unexpected::Unit,
                &"a catalog entry",
            )),
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            _ => Ok(Self::default()),
        }
    }
}

/// A collection body as an explicit list of `(key, entry)` pairs.
///
/// Order is the order keys appear in the body. A `null` body parses to an
/// empty document; an empty body is not JSON and fails. If a key repeats, the
/// last value wins and keeps the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogDocument {
    entries: Vec<(String, CatalogEntry)>,
}

impl CatalogDocument {
    /// Parse a response body.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    pub fn into_entries(self) -> Vec<(String, CatalogEntry)> {
        self.entries
    }
}

impl FromIterator<(String, CatalogEntry)> for CatalogDocument {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        let mut builder = DocumentBuilder::default();
        for (key, entry) in iter {
            builder.push(key, entry);
        }
        builder.finish()
    }
}

#[derive(Default)]
struct DocumentBuilder {
    entries: Vec<(String, CatalogEntry)>,
    positions: HashMap<String, usize>,
}

impl DocumentBuilder {
    fn push(&mut self, key: String, entry: CatalogEntry) {
        match self.positions.get(&key) {
            Some(&index) => self.entries[index].1 = entry,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
            }
        }
    }

    fn finish(self) -> CatalogDocument {
        CatalogDocument {
            entries: self.entries,
        }
    }
}

impl<'de> Deserialize<'de> for CatalogDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = CatalogDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object of catalog entries, or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CatalogDocument::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CatalogDocument::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut builder = DocumentBuilder::default();
        while let Some((key, entry)) = map.next_entry::<String, CatalogEntry>()? {
            builder.push(key, entry);
        }
        Ok(builder.finish())
    }
}
