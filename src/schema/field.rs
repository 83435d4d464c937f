// Mon Jan 19 2026 - Alex

use crate::schema::{StructDefinition, TypeClass};
use std::fmt;
use std::sync::Arc;

/// One resolved field: where it sits in its struct and how big it is.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    name: String,
    type_name: String,
    offset: usize,
    size: usize,
    class: TypeClass,
    nested: Option<Arc<StructDefinition>>,
}

impl FieldDefinition {
    pub fn new(
        name: String,
        type_name: String,
        offset: usize,
        size: usize,
        class: TypeClass,
        nested: Option<Arc<StructDefinition>>,
    ) -> Self {
        Self {
            name,
            type_name,
            offset,
            size,
            class,
            nested,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn class(&self) -> TypeClass {
        self.class
    }

    pub fn is_struct_valued(&self) -> bool {
        self.nested.is_some()
    }

    pub fn is_pointer_valued(&self) -> bool {
        self.class.is_pointer_valued()
    }

    /// The inline struct this field holds, if it is struct-valued.
    pub fn nested(&self) -> Option<&Arc<StructDefinition>> {
        self.nested.as_ref()
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ 0x{:x}: {} ({} bytes)", self.name, self.offset, self.type_name, self.size)
    }
}
