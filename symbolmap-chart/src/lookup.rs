use std::collections::HashMap;

use crate::record::{StateId, StateRecord};

/// Cross reference of state ids, names and two letter codes.
///
/// Ids and codes live in separate maps so a code can never shadow an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookup {
    names: HashMap<StateId, String>,
    ids: HashMap<String, StateId>,
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, overwriting any previous entries for its id and code
    pub fn insert(&mut self, record: &StateRecord) {
        self.names.insert(record.id, record.name.clone());
        if !record.code.is_empty() {
            self.ids.insert(record.code.clone(), record.id);
        }
    }

    pub fn name(&self, id: StateId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn id(&self, code: &str) -> Option<StateId> {
        self.ids.get(code).copied()
    }

    pub fn name_for_code(&self, code: &str) -> Option<&str> {
        self.id(code).and_then(|id| self.name(id))
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> Extend<&'a StateRecord> for Lookup {
    fn extend<T: IntoIterator<Item = &'a StateRecord>>(&mut self, iter: T) {
        iter.into_iter().for_each(|record| self.insert(record));
    }
}

impl Extend<StateRecord> for Lookup {
    fn extend<T: IntoIterator<Item = StateRecord>>(&mut self, iter: T) {
        iter.into_iter().for_each(|record| self.insert(&record));
    }
}
