// Mon Jan 19 2026 - Alex

use crate::objects::{ObjectRecord, ObjectTable};

/// Single-pass walk over a table in discovery order, skipping records
/// that are no longer valid.
pub struct ObjectsIter<'a> {
    table: &'a ObjectTable,
    position: usize,
}

impl<'a> ObjectsIter<'a> {
    pub(crate) fn new(table: &'a ObjectTable) -> Self {
        Self { table, position: 0 }
    }
}

impl<'a> Iterator for ObjectsIter<'a> {
    type Item = &'a ObjectRecord;

    fn next(&mut self) -> Option<Self::Item> {
        while let Ok(record) = self.table.by_index(self.position) {
            self.position += 1;
            if record.is_valid() {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.table.len().saturating_sub(self.position)))
    }
}
