// Mon Jan 19 2026 - Alex

use crate::memory::{Address, MemoryReader};
use crate::schema::{StructDefinition, TypeRegistry};
use crate::view::{MaterializedStruct, ViewError};
use bytes::Bytes;
use std::sync::Arc;

/// Materializes schema structs out of target memory.
#[derive(Clone)]
pub struct StructReader {
    memory: Arc<dyn MemoryReader>,
    registry: Arc<TypeRegistry>,
}

impl StructReader {
    pub fn new(memory: Arc<dyn MemoryReader>, registry: Arc<TypeRegistry>) -> Self {
        Self { memory, registry }
    }

    pub fn memory(&self) -> &Arc<dyn MemoryReader> {
        &self.memory
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    pub fn native_width(&self) -> usize {
        self.registry.pointer_width()
    }

    pub fn target_width(&self) -> usize {
        self.memory.pointer_width()
    }

    /// Copies one `struct_name` instance at `address` into a local buffer.
    pub fn read(&self, address: Address, struct_name: &str) -> Result<MaterializedStruct, ViewError> {
        let definition = self.registry.resolve(struct_name, false)?;
        let bytes = self.read_image(&definition, address)?;
        Ok(MaterializedStruct::new(
            definition,
            address,
            bytes,
            self.native_width(),
            self.target_width(),
        ))
    }

    /// Re-reads `scratch`'s struct type at `address`, reusing the instance.
    pub fn read_into(&self, scratch: &mut MaterializedStruct, address: Address) -> Result<(), ViewError> {
        let bytes = self.read_image(scratch.definition(), address)?;
        scratch.reset(address, bytes);
        Ok(())
    }

    fn read_image(&self, definition: &StructDefinition, address: Address) -> Result<Bytes, ViewError> {
        let native = self.native_width();
        let target = self.target_width();
        if native <= target {
            let raw = self.memory.read_bytes(address, definition.size())?;
            return Ok(Bytes::from(raw));
        }

        let raw = self.memory.read_bytes(address, definition.foreign_size(native, target))?;
        let mut widened = Vec::with_capacity(definition.size());
        widen_pointers(definition, &raw, &mut widened, native, target);
        Ok(Bytes::from(widened))
    }
}

/// Lays a narrow-pointer target image out at native offsets, zero-extending
/// every pointer-valued field. Returns the number of target bytes consumed.
fn widen_pointers(
    definition: &StructDefinition,
    raw: &[u8],
    out: &mut Vec<u8>,
    native: usize,
    target: usize,
) -> usize {
    let mut pos = 0;
    for field in definition.fields() {
        if field.is_pointer_valued() {
            let mut slot = [0u8; 16];
            slot[..target].copy_from_slice(&raw[pos..pos + target]);
            out.extend_from_slice(&slot[..native]);
            pos += target;
        } else if let Some(nested) = field.nested() {
            pos += widen_pointers(nested, &raw[pos..], out, native, target);
        } else {
            out.extend_from_slice(&raw[pos..pos + field.size()]);
            pos += field.size();
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::SnapshotMemory;
    use crate::schema::SchemaDocument;

    const SCHEMA: &str = r#"{"structs":[
        {"name":"FName","super":"","vars":[{"ComparisonIndex":"int32"},{"Number":"int32"}]},
        {"name":"UObject","super":"","vars":[
            {"VfTable":"void*"},{"ObjectFlags":"int32"},{"InternalIndex":"int32"},
            {"Class":"UClass*"},{"Name":"FName"},{"Outer":"UObject*"}
        ]},
        {"name":"Holder","super":"","vars":[{"Flag":"uint8"},{"pad":3},{"Value":"float"},{"Target":"UObject*"}]},
        {"name":"Scalars","super":"","vars":[
            {"I8":"int8"},{"I16":"int16"},{"I32":"int32"},{"I64":"int64"},
            {"U8":"uint8"},{"U16":"uint16"},{"U32":"uint32"},{"U64":"uint64"},
            {"F32":"float"},{"F64":"double"},{"Flag":"bool"},{"Dw":"DWORD"},{"Dw64":"DWORD64"},
            {"Ptr":"uintptr"},{"Text":"string"},{"Blob":6},{"Name":"FName"}
        ]}
    ]}"#;

    fn reader(image: SnapshotMemory) -> StructReader {
        let registry = TypeRegistry::with_pointer_width(8);
        registry.load(SchemaDocument::from_json(SCHEMA).unwrap(), false).unwrap();
        StructReader::new(Arc::new(image), Arc::new(registry))
    }

    #[test]
    fn test_fields_read_back_written_bytes() {
        let base = Address::new(0x10000);
        let mut image = SnapshotMemory::new(base, 0x100, 8);
        image.write_u64(base, 0x1400_0000).unwrap();
        image.write_i32(base.offset(8), 0x20).unwrap();
        image.write_i32(base.offset(12), 42).unwrap();
        image.write_u64(base.offset(16), 0x10080).unwrap();
        image.write_i32(base.offset(24), 7).unwrap();
        image.write_i32(base.offset(28), 3).unwrap();
        image.write_u64(base.offset(32), 0x100c0).unwrap();

        let reader = reader(image);
        let object = reader.read(base, "UObject").unwrap();

        assert_eq!(object.bytes().len(), 40);
        assert_eq!(object.read_ptr("VfTable").unwrap(), Address::new(0x1400_0000));
        assert_eq!(object.read::<i32>("ObjectFlags").unwrap(), 0x20);
        assert_eq!(object.read::<i32>("InternalIndex").unwrap(), 42);
        assert_eq!(object.read_ptr("Class").unwrap(), Address::new(0x10080));
        assert_eq!(object.read_ptr("Outer").unwrap(), Address::new(0x100c0));

        let name = object.field("Name").unwrap().read_as_struct().unwrap();
        assert_eq!(name.read::<i32>("ComparisonIndex").unwrap(), 7);
        assert_eq!(name.read::<i32>("Number").unwrap(), 3);
        assert_eq!(name.address(), base.offset(24));
        assert_eq!(object.field("Name").unwrap().bytes().unwrap(), &[7, 0, 0, 0, 3, 0, 0, 0]);
    }

    /// One `Scalars` instance as the target stores it at `width`.
    fn scalars_image(width: usize) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&(-5i8).to_le_bytes());
        data.extend_from_slice(&(-300i16).to_le_bytes());
        data.extend_from_slice(&(-70_000i32).to_le_bytes());
        data.extend_from_slice(&(-5_000_000_000i64).to_le_bytes());
        data.push(0xfe);
        data.extend_from_slice(&0xbeefu16.to_le_bytes());
        data.extend_from_slice(&0xdead_beefu32.to_le_bytes());
        data.extend_from_slice(&0x0123_4567_89ab_cdefu64.to_le_bytes());
        data.extend_from_slice(&1.25f32.to_le_bytes());
        data.extend_from_slice(&(-2.5f64).to_le_bytes());
        data.push(1);
        data.extend_from_slice(&0x1111_2222u32.to_le_bytes());
        data.extend_from_slice(&0x3333_4444_5555_6666u64.to_le_bytes());
        data.extend_from_slice(&0x8765_4321u64.to_le_bytes()[..width]);
        data.extend_from_slice(&0x0002_0000u64.to_le_bytes()[..width]);
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        data.extend_from_slice(&9i32.to_le_bytes());
        data.extend_from_slice(&2i32.to_le_bytes());
        data
    }

    #[test]
    fn test_every_field_kind_reads_back() {
        for width in [8, 4] {
            let base = Address::new(0x20000);
            let image = SnapshotMemory::from_bytes(scalars_image(width), base, width);
            let reader = reader(image);
            let scalars = reader.read(base, "Scalars").unwrap();

            assert_eq!(scalars.bytes().len(), 85, "width {}", width);
            assert_eq!(scalars.foreign_size(), if width == 8 { 85 } else { 77 });
            assert_eq!(scalars.read::<i8>("I8").unwrap(), -5);
            assert_eq!(scalars.read::<i16>("I16").unwrap(), -300);
            assert_eq!(scalars.read::<i32>("I32").unwrap(), -70_000);
            assert_eq!(scalars.read::<i64>("I64").unwrap(), -5_000_000_000);
            assert_eq!(scalars.read::<u8>("U8").unwrap(), 0xfe);
            assert_eq!(scalars.read::<u16>("U16").unwrap(), 0xbeef);
            assert_eq!(scalars.read::<u32>("U32").unwrap(), 0xdead_beef);
            assert_eq!(scalars.read::<u64>("U64").unwrap(), 0x0123_4567_89ab_cdef);
            assert_eq!(scalars.read::<f32>("F32").unwrap(), 1.25);
            assert_eq!(scalars.read::<f64>("F64").unwrap(), -2.5);
            assert!(scalars.read::<bool>("Flag").unwrap());
            assert_eq!(scalars.read::<u32>("Dw").unwrap(), 0x1111_2222);
            assert_eq!(scalars.read::<u64>("Dw64").unwrap(), 0x3333_4444_5555_6666);
            assert_eq!(scalars.read::<u64>("Ptr").unwrap(), 0x8765_4321);
            assert_eq!(scalars.read_ptr("Ptr").unwrap(), Address::new(0x8765_4321));
            assert_eq!(scalars.read_ptr("Text").unwrap(), Address::new(0x0002_0000));

            let blob = scalars.field("Blob").unwrap();
            assert_eq!(blob.definition().offset(), 71);
            assert_eq!(blob.bytes().unwrap(), &[1, 2, 3, 4, 5, 6]);
            assert_eq!(scalars.field("I32").unwrap().bytes().unwrap(), &(-70_000i32).to_le_bytes());
            assert_eq!(scalars.field("Text").unwrap().bytes().unwrap(), &0x0002_0000u64.to_le_bytes());

            let name = scalars.child("Name").unwrap();
            assert_eq!(name.address(), base.offset(77));
            assert_eq!(name.read::<i32>("ComparisonIndex").unwrap(), 9);
            assert_eq!(name.read::<i32>("Number").unwrap(), 2);
        }
    }

    #[test]
    fn test_nested_struct_is_cached() {
        let base = Address::new(0x10000);
        let reader = reader(SnapshotMemory::new(base, 0x100, 8));
        let object = reader.read(base, "UObject").unwrap();

        let first = object.child("Name").unwrap() as *const MaterializedStruct;
        let second = object.child("Name").unwrap() as *const MaterializedStruct;
        assert_eq!(first, second);
    }

    #[test]
    fn test_field_lookup_errors() {
        let base = Address::new(0x10000);
        let reader = reader(SnapshotMemory::new(base, 0x100, 8));
        let object = reader.read(base, "UObject").unwrap();

        assert!(matches!(object.field("Missing"), Err(ViewError::FieldNotFound { .. })));
        assert!(matches!(
            object.field("Outer").unwrap().read_as_struct(),
            Err(ViewError::NotAStruct(_))
        ));
        assert!(matches!(
            object.field("ObjectFlags").unwrap().read_as::<u64>().map(|_| ()),
            Ok(())
        ));
        let name = object.child("Name").unwrap();
        assert!(matches!(
            name.field("Number").unwrap().read_as::<u64>(),
            Err(ViewError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_pointer_to_struct_reads_target() {
        let base = Address::new(0x10000);
        let mut image = SnapshotMemory::new(base, 0x100, 8);
        image.write_u64(base.offset(16), 0x10080).unwrap();
        image.write_u64(base.offset(0x80 + 16), 0x10000).unwrap();
        image.write_i32(base.offset(0x80 + 12), 9).unwrap();
        image.write_bytes(base.offset(0x08), &[1]).unwrap();
        image.write_bytes(base.offset(0x0c), &0.5f32.to_le_bytes()).unwrap();

        let reader = reader(image);
        let holder = reader.read(base.offset(0x08), "Holder").unwrap();
        assert_eq!(holder.read::<u8>("Flag").unwrap(), 1);
        assert_eq!(holder.field("pad").unwrap().bytes().unwrap(), &[0, 0, 0]);
        assert_eq!(holder.read::<f32>("Value").unwrap(), 0.5);

        let pointed = holder
            .field("Target")
            .unwrap()
            .read_as_pointer_to_struct(&reader, "UObject")
            .unwrap();

        assert_eq!(pointed.address(), Address::new(0x10080));
        assert_eq!(pointed.read::<i32>("InternalIndex").unwrap(), 9);
        assert_eq!(pointed.read_ptr("Class").unwrap(), base);
    }

    #[test]
    fn test_unreadable_address_fails() {
        let base = Address::new(0x10000);
        let reader = reader(SnapshotMemory::new(base, 0x10, 8));
        assert!(matches!(reader.read(base, "UObject"), Err(ViewError::Memory(_))));
        assert!(matches!(reader.read(base, "Nope"), Err(ViewError::Schema(_))));
    }

    #[test]
    fn test_narrow_target_is_widened() {
        let base = Address::new(0x1000);
        let mut image = SnapshotMemory::new(base, 0x40, 4);
        image.write_u32(base, 0xaabbccdd).unwrap();
        image.write_i32(base.offset(4), 1).unwrap();
        image.write_i32(base.offset(8), 2).unwrap();
        image.write_u32(base.offset(12), 0x1020).unwrap();
        image.write_i32(base.offset(16), 5).unwrap();
        image.write_i32(base.offset(20), 0).unwrap();
        image.write_u32(base.offset(24), 0x1030).unwrap();

        let reader = reader(image);
        let object = reader.read(base, "UObject").unwrap();

        assert_eq!(object.unneeded_byte_count(), 12);
        assert_eq!(object.foreign_size(), 28);
        assert_eq!(object.bytes().len(), 40);
        assert_eq!(object.read_ptr("VfTable").unwrap(), Address::new(0xaabbccdd));
        assert_eq!(object.read::<i32>("InternalIndex").unwrap(), 2);
        assert_eq!(object.read_ptr("Class").unwrap(), Address::new(0x1020));
        assert_eq!(object.child("Name").unwrap().read::<i32>("ComparisonIndex").unwrap(), 5);
        assert_eq!(object.read_ptr("Outer").unwrap(), Address::new(0x1030));
    }

    #[test]
    fn test_read_into_reuses_scratch() {
        let base = Address::new(0x10000);
        let mut image = SnapshotMemory::new(base, 0x100, 8);
        image.write_i32(base.offset(12), 1).unwrap();
        image.write_i32(base.offset(0x40 + 12), 2).unwrap();
        image.write_i32(base.offset(0x40 + 24), 11).unwrap();

        let reader = reader(image);
        let mut scratch = reader.read(base, "UObject").unwrap();
        assert_eq!(scratch.child("Name").unwrap().read::<i32>("ComparisonIndex").unwrap(), 0);

        reader.read_into(&mut scratch, base.offset(0x40)).unwrap();
        assert_eq!(scratch.address(), base.offset(0x40));
        assert_eq!(scratch.read::<i32>("InternalIndex").unwrap(), 2);
        assert_eq!(scratch.child("Name").unwrap().read::<i32>("ComparisonIndex").unwrap(), 11);
    }
}
