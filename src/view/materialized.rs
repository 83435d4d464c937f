// Mon Jan 19 2026 - Alex

use crate::memory::Address;
use crate::schema::{FieldDefinition, StructDefinition};
use crate::view::{FieldValue, StructReader, ViewError};
use bytes::Bytes;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// A local copy of one struct instance read from the target process.
///
/// Struct-valued fields are materialized on first access over the same
/// buffer and kept until this instance is dropped.
pub struct MaterializedStruct {
    definition: Arc<StructDefinition>,
    address: Address,
    bytes: Bytes,
    nested: Vec<OnceCell<MaterializedStruct>>,
    native_width: usize,
    target_width: usize,
}

impl MaterializedStruct {
    pub(crate) fn new(
        definition: Arc<StructDefinition>,
        address: Address,
        bytes: Bytes,
        native_width: usize,
        target_width: usize,
    ) -> Self {
        let nested = definition.fields().iter().map(|_| OnceCell::new()).collect();
        Self {
            definition,
            address,
            bytes,
            nested,
            native_width,
            target_width,
        }
    }

    /// Replaces the buffer with a fresh read of the same struct type.
    pub(crate) fn reset(&mut self, address: Address, bytes: Bytes) {
        self.address = address;
        self.bytes = bytes;
        for cell in &mut self.nested {
            cell.take();
        }
    }

    pub fn definition(&self) -> &Arc<StructDefinition> {
        &self.definition
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn field(&self, name: &str) -> Result<FieldView<'_>, ViewError> {
        let index = self
            .definition
            .field_index(name)
            .ok_or_else(|| ViewError::FieldNotFound {
                struct_name: self.definition.name().to_string(),
                field: name.to_string(),
            })?;
        Ok(FieldView { owner: self, index })
    }

    pub fn read<T: FieldValue>(&self, field: &str) -> Result<T, ViewError> {
        self.field(field)?.read_as()
    }

    pub fn read_ptr(&self, field: &str) -> Result<Address, ViewError> {
        self.field(field)?.read_as_pointer()
    }

    pub fn child(&self, field: &str) -> Result<&MaterializedStruct, ViewError> {
        let index = self.field(field)?.index;
        self.nested_at(index)
    }

    /// Bytes by which this struct's resolved size overstates its size in
    /// the target, when the target's pointers are narrower than ours.
    pub fn unneeded_byte_count(&self) -> usize {
        self.definition.unneeded_byte_count(self.native_width, self.target_width)
    }

    /// Stride of this struct when it is an array element in target memory.
    pub fn foreign_size(&self) -> usize {
        self.definition.size() - self.unneeded_byte_count()
    }

    fn nested_at(&self, index: usize) -> Result<&MaterializedStruct, ViewError> {
        let field = &self.definition.fields()[index];
        let nested = field
            .nested()
            .ok_or_else(|| ViewError::NotAStruct(field.name().to_string()))?;
        let end = field.offset() + field.size();
        if end > self.bytes.len() {
            return Err(ViewError::OutOfBounds {
                field: field.name().to_string(),
                offset: field.offset(),
                len: field.size(),
            });
        }
        Ok(self.nested[index].get_or_init(|| {
            MaterializedStruct::new(
                Arc::clone(nested),
                self.address.offset(field.offset()),
                self.bytes.slice(field.offset()..end),
                self.native_width,
                self.target_width,
            )
        }))
    }
}

impl fmt::Debug for MaterializedStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterializedStruct")
            .field("name", &self.definition.name())
            .field("address", &self.address)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// One field of a materialized struct.
#[derive(Clone, Copy)]
pub struct FieldView<'a> {
    owner: &'a MaterializedStruct,
    index: usize,
}

impl<'a> FieldView<'a> {
    pub fn definition(&self) -> &'a FieldDefinition {
        &self.owner.definition.fields()[self.index]
    }

    pub fn bytes(&self) -> Result<&'a [u8], ViewError> {
        let field = self.definition();
        self.slice(field.size())
    }

    /// Reinterprets the start of the field as `T`; choosing a `T` that
    /// matches the declared field type is up to the caller.
    pub fn read_as<T: FieldValue>(&self) -> Result<T, ViewError> {
        Ok(T::from_le_slice(self.slice(T::SIZE)?))
    }

    /// Reads a pointer stored in this field's native-width slot.
    pub fn read_as_pointer(&self) -> Result<Address, ViewError> {
        match self.definition().size() {
            4 => Ok(Address::new(self.read_as::<u32>()? as u64)),
            _ => self.read_as::<Address>(),
        }
    }

    /// The inline struct held by this field; no further target reads.
    pub fn read_as_struct(&self) -> Result<&'a MaterializedStruct, ViewError> {
        self.owner.nested_at(self.index)
    }

    /// Follows the pointer in this field and materializes `struct_name` there.
    pub fn read_as_pointer_to_struct(
        &self,
        reader: &StructReader,
        struct_name: &str,
    ) -> Result<MaterializedStruct, ViewError> {
        let target = self.read_as_pointer()?;
        reader.read(target, struct_name)
    }

    fn slice(&self, len: usize) -> Result<&'a [u8], ViewError> {
        let field = self.definition();
        let start = field.offset();
        let bytes: &'a [u8] = &self.owner.bytes;
        bytes.get(start..start + len).ok_or_else(|| ViewError::OutOfBounds {
            field: field.name().to_string(),
            offset: start,
            len,
        })
    }
}
