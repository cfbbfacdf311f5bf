//! Documents as persisted by the store.
//!
//! A document is an ordered list of named properties. Each property carries
//! either one text value or many, and a flag telling the store whether to keep
//! posting entries for it. Unindexed properties are stored verbatim and can
//! only be read back, never filtered on.

use crate::types::FieldName;
use std::collections::BTreeSet;

pub(crate) mod versioned_document;

pub use versioned_document::latest_document::{Document, Property, PropertyValue};

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property.
    pub fn with(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Returns the first property with the given name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name.as_str() == name)
    }

    /// Returns the value of a single-valued property.
    pub fn text(&self, name: &str) -> Option<&str> {
        match &self.get(name)?.value {
            PropertyValue::Text(text) => Some(text),
            PropertyValue::Multiple(_) => None,
        }
    }

    /// Distinct `(property, value)` pairs the store must keep posting entries for.
    pub fn index_entries(&self) -> BTreeSet<(&FieldName, &str)> {
        self.properties
            .iter()
            .filter(|p| p.indexed)
            .flat_map(|p| p.value.as_slice().iter().map(move |v| (&p.name, v.as_str())))
            .collect()
    }
}

impl Property {
    /// An indexed single-valued property.
    pub fn text(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: PropertyValue::Text(value.into()),
            indexed: true,
        }
    }

    /// An indexed multi-valued property.
    pub fn multiple(name: FieldName, values: impl IntoIterator<Item = String>) -> Self {
        Self {
            name,
            value: PropertyValue::Multiple(values.into_iter().collect()),
            indexed: true,
        }
    }

    /// Marks the property as stored-only.
    pub fn noindex(mut self) -> Self {
        self.indexed = false;
        self
    }
}

impl PropertyValue {
    pub fn as_slice(&self) -> &[String] {
        match self {
            PropertyValue::Text(text) => std::slice::from_ref(text),
            PropertyValue::Multiple(values) => values,
        }
    }
}

#[cfg(test)]
mod tests;
