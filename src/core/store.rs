//! In-memory record store.
//!
//! Records keep insertion order, which is also their on-screen order. Ids come
//! from a counter that only grows, so a deleted id is never handed out again.

use crate::core::crud::CrudError;

/// A single labeled record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub label: String,
}

impl Record {
    /// Text drawn inside the record's box.
    pub fn display_text(&self) -> String {
        format!("{}. {}", self.id, self.label)
    }
}

/// Ordered records plus the next id to assign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
}

/// Trim a user-supplied label, rejecting empty input.
pub fn normalize_label(raw: &str) -> Result<String, CrudError> {
    let label = raw.trim();
    if label.is_empty() {
        return Err(CrudError::EmptyLabel);
    }
    Ok(label.to_string())
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from seed labels. Blank seeds are skipped.
    pub fn seeded<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for label in labels {
            if let Err(e) = store.create(label.as_ref()) {
                tracing::warn!("Skipping seed label {:?}: {}", label.as_ref(), e);
            }
        }
        store
    }

    /// Append a record with the next sequential id.
    pub fn create(&mut self, raw_label: &str) -> Result<&Record, CrudError> {
        let label = normalize_label(raw_label)?;
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(Record { id, label });
        Ok(&self.records[self.records.len() - 1])
    }

    /// Replace the label at `index`, keeping id and position.
    pub fn relabel(&mut self, index: usize, raw_label: &str) -> Result<&Record, CrudError> {
        let label = normalize_label(raw_label)?;
        let record = self
            .records
            .get_mut(index)
            .ok_or(CrudError::NoSuchRecord(index))?;
        record.label = label;
        Ok(record)
    }

    pub fn remove(&mut self, index: usize) -> Result<Record, CrudError> {
        if index >= self.records.len() {
            return Err(CrudError::NoSuchRecord(index));
        }
        Ok(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
