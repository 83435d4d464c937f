// Mon Jan 19 2026 - Alex

use crate::objects::{NameTable, ObjectRecord, ObjectTable, ObjectsError};

/// Heuristic acceptance test for candidate table entries.
///
/// The object's class pointer is not checked against any known class.
pub struct ObjectValidator<'a> {
    table: &'a ObjectTable,
    names: &'a dyn NameTable,
    max_index_gap: i32,
}

impl<'a> ObjectValidator<'a> {
    pub fn new(table: &'a ObjectTable, names: &'a dyn NameTable, max_index_gap: i32) -> Self {
        Self {
            table,
            names,
            max_index_gap,
        }
    }

    /// `outer_check` is set while validating an outer chain, which skips the
    /// internal index ordering test.
    pub fn is_valid(&self, record: &ObjectRecord, outer_check: bool) -> Result<bool, ObjectsError> {
        let name_count = self.names.count();
        if name_count == 0 {
            return Err(ObjectsError::NamesNotLoaded);
        }

        if record.name_index < 0 || record.name_index as usize >= name_count {
            log::trace!("{}: name index {} out of range", record.address, record.name_index);
            return Ok(false);
        }

        if !outer_check {
            if let Some(last) = self.table.last() {
                let low = last.internal_index as i64;
                let high = low + self.max_index_gap as i64;
                let index = record.internal_index as i64;
                if index < low || index > high {
                    log::trace!(
                        "{}: internal index {} outside [{}, {}]",
                        record.address,
                        index,
                        low,
                        high
                    );
                    return Ok(false);
                }
            }
        }

        if record.outer.is_null() {
            return Ok(true);
        }

        match self.table.get(record.outer) {
            Some(outer) => self.is_valid(outer, true),
            None => {
                log::trace!("{}: outer {} not in table", record.address, record.outer);
                Ok(false)
            }
        }
    }
}
