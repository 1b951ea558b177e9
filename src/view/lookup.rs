use std::collections::HashMap;

use store_domain::{Identifiable, NamedEntity, RecordId};

/// id -> name map built from a second collection to label foreign keys.
///
/// Rebuilt on every render; nothing is cached between loads.
#[derive(Debug, Clone, Default)]
pub struct NameLookup {
    names: HashMap<RecordId, String>,
    fallback_prefix: String,
}

impl NameLookup {
    pub fn build<T>(records: &[T], fallback_prefix: impl Into<String>) -> Self
    where
        T: Identifiable + NamedEntity,
    {
        let names = records
            .iter()
            .map(|record| (record.id(), record.name().to_string()))
            .collect();
        Self {
            names,
            fallback_prefix: fallback_prefix.into(),
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Name for `id`, or `<prefix> #<id>` when the record is unknown.
    pub fn label(&self, id: RecordId) -> String {
        match self.get(id) {
            Some(name) => name.to_string(),
            None => format!("{} #{}", self.fallback_prefix, id),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
