// Mon Jan 19 2026 - Alex

use crate::memory::Address;
use crate::view::{MaterializedStruct, ViewError};
use serde::Serialize;

pub const FIELD_NAME: &str = "Name";
pub const FIELD_NAME_INDEX: &str = "ComparisonIndex";
pub const FIELD_NAME_NUMBER: &str = "Number";
pub const FIELD_INTERNAL_INDEX: &str = "InternalIndex";
pub const FIELD_OUTER: &str = "Outer";
pub const FIELD_CLASS: &str = "Class";
pub const FIELD_ITEM_OBJECT: &str = "Object";

/// The slice of a UObject the table keeps after a successful walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRecord {
    pub address: Address,
    pub name_index: i32,
    pub name_number: i32,
    pub internal_index: i32,
    pub outer: Address,
    pub class: Address,
}

impl ObjectRecord {
    /// Returned by lookups that miss.
    pub const EMPTY: ObjectRecord = ObjectRecord {
        address: Address::NULL,
        name_index: 0,
        name_number: 0,
        internal_index: 0,
        outer: Address::NULL,
        class: Address::NULL,
    };

    /// Extracts the tracked fields from a materialized UObject.
    ///
    /// `Number` is optional; schemas without it yield zero.
    pub fn from_struct(object: &MaterializedStruct) -> Result<Self, ViewError> {
        let name = object.child(FIELD_NAME)?;
        let name_number = match name.field(FIELD_NAME_NUMBER) {
            Ok(field) => field.read_as::<i32>()?,
            Err(ViewError::FieldNotFound { .. }) => 0,
            Err(e) => return Err(e),
        };

        Ok(Self {
            address: object.address(),
            name_index: name.read::<i32>(FIELD_NAME_INDEX)?,
            name_number,
            internal_index: object.read::<i32>(FIELD_INTERNAL_INDEX)?,
            outer: object.read_ptr(FIELD_OUTER)?,
            class: object.read_ptr(FIELD_CLASS)?,
        })
    }

    pub fn is_valid(&self) -> bool {
        !self.address.is_null()
    }
}

impl Default for ObjectRecord {
    fn default() -> Self {
        Self::EMPTY
    }
}
