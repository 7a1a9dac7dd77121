//! Canonical record collection with stable identities.

use std::fmt;

use super::Record;

/// Stable identifier assigned to a record when it is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A record paired with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RecordId,
    pub record: Record,
}

/// Ordered, identified records.
///
/// Mutations are full replacement and removal (by id or by location). Every
/// mutation bumps `generation`, which downstream caches use as their key.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    rows: Vec<Row>,
    next_id: u64,
    generation: u64,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let mut collection = Self::new();
        collection.replace(records);
        collection
    }

    /// Replaces all rows, assigning fresh ids in load order.
    pub fn replace(&mut self, records: Vec<Record>) {
        let mut next_id = self.next_id;
        self.rows = records
            .into_iter()
            .map(|record| {
                next_id += 1;
                Row {
                    id: RecordId(next_id),
                    record,
                }
            })
            .collect();
        self.next_id = next_id;
        self.generation += 1;
    }

    /// Removes the row with `id`. Returns the removed record.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let pos = self.rows.iter().position(|r| r.id == id)?;
        self.generation += 1;
        Some(self.rows.remove(pos).record)
    }

    /// Removes every row whose location equals `location`. Returns the count.
    pub fn remove_location(&mut self, location: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|r| r.record.location != location);
        let removed = before - self.rows.len();
        if removed > 0 {
            self.generation += 1;
        }
        removed
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_record as record;

    #[test]
    fn ids_are_assigned_in_load_order() {
        let c = Collection::from_records(vec![record("A", "a1", 1.0), record("B", "b1", 2.0)]);
        let ids: Vec<u64> = c.rows().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn replace_never_reuses_ids() {
        let mut c = Collection::from_records(vec![record("A", "a1", 1.0)]);
        c.replace(vec![record("B", "b1", 2.0)]);
        assert_eq!(c.rows()[0].id, RecordId(2));
        assert!(c.remove(RecordId(1)).is_none());
    }

    #[test]
    fn remove_by_id_bumps_generation() {
        let mut c = Collection::from_records(vec![
            record("A", "a1", 1.0),
            record("A", "a2", 2.0),
            record("B", "b1", 3.0),
        ]);
        let generation = c.generation();
        let removed = c.remove(RecordId(2)).unwrap();
        assert_eq!(removed.branch, "a2");
        assert_eq!(c.len(), 2);
        assert!(c.generation() > generation);

        let generation = c.generation();
        assert!(c.remove(RecordId(2)).is_none());
        assert_eq!(c.generation(), generation);
    }

    #[test]
    fn remove_location_drops_whole_group() {
        let mut c = Collection::from_records(vec![
            record("A", "a1", 1.0),
            record("B", "b1", 3.0),
            record("A", "a2", 2.0),
        ]);
        assert_eq!(c.remove_location("A"), 2);
        assert_eq!(c.len(), 1);
        assert_eq!(c.rows()[0].record.location, "B");
        assert_eq!(c.remove_location("missing"), 0);
    }
}
