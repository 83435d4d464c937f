// Mon Jan 19 2026 - Alex

use crate::schema::{FieldDefinition, SchemaError};

/// A resolved struct with a flattened field list: inherited fields first,
/// at the same offsets they have in the super struct.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDefinition {
    name: String,
    super_name: Option<String>,
    fields: Vec<FieldDefinition>,
    size: usize,
}

impl StructDefinition {
    pub fn new(name: String, super_name: Option<String>) -> Self {
        Self {
            name,
            super_name,
            fields: Vec::new(),
            size: 0,
        }
    }

    pub(crate) fn push_field(&mut self, field: FieldDefinition) -> Result<(), SchemaError> {
        if self.field(field.name()).is_some() {
            return Err(SchemaError::DuplicateField {
                name: self.name.clone(),
                field: field.name().to_string(),
            });
        }
        self.size += field.size();
        self.fields.push(field);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn super_name(&self) -> Option<&str> {
        self.super_name.as_deref()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Bytes by which this layout overstates its size in a target whose
    /// pointers are narrower than `native_width`.
    pub fn unneeded_byte_count(&self, native_width: usize, target_width: usize) -> usize {
        if native_width <= target_width {
            return 0;
        }
        let shrink = native_width - target_width;
        self.fields
            .iter()
            .map(|field| {
                if field.is_pointer_valued() {
                    shrink
                } else if let Some(nested) = field.nested() {
                    nested.unneeded_byte_count(native_width, target_width)
                } else {
                    0
                }
            })
            .sum()
    }

    /// Size of one instance as laid out in the target process.
    pub fn foreign_size(&self, native_width: usize, target_width: usize) -> usize {
        self.size - self.unneeded_byte_count(native_width, target_width)
    }
}
