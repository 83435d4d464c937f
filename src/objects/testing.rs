// Mon Jan 19 2026 - Alex

//! Synthetic target images for walker and facade tests.

use crate::config::WalkerConfig;
use crate::memory::{Address, SnapshotMemory};
use crate::objects::StaticNameTable;
use crate::schema::{SchemaDocument, TypeRegistry};
use crate::session::Session;
use std::sync::Arc;

pub(crate) const TEST_SCHEMA: &str = r#"{"structs":[
    {"name":"FName","super":"","vars":[{"ComparisonIndex":"int32"},{"Number":"int32"}]},
    {"name":"UObject","super":"","vars":[
        {"VfTable":"void*"},{"ObjectFlags":"int32"},{"InternalIndex":"int32"},
        {"Class":"UClass*"},{"Name":"FName"},{"Outer":"UObject*"}
    ]},
    {"name":"UField","super":"UObject","vars":[{"Next":"UField*"}]},
    {"name":"UStruct","super":"UField","vars":[
        {"SuperField":"UStruct*"},{"Children":"UField*"},{"PropertySize":"int32"},{"MinAlignment":"int32"}
    ]},
    {"name":"FUObjectItem","super":"","vars":[
        {"Object":"UObject*"},{"Flags":"int32"},{"ClusterIndex":"int32"},{"SerialNumber":"int32"},{"pad":4}
    ]}
]}"#;

pub(crate) const TEST_NAMES: &[&str] = &[
    "None",
    "/Script/CoreUObject",
    "Object",
    "Class",
    "Package",
    "Field",
    "Struct",
    "Function",
    "ScriptStruct",
    "Enum",
    "/Script/Engine",
    "Actor",
    "Pawn",
    "MyPawn",
    "Vector",
    "ReceiveTick",
    "Default__Pawn",
    "Mesh Component",
    "ReceiveBeginPlay",
];

const BASE: u64 = 0x10000;
const OBJECT_SPACING: usize = 0x80;
const CHUNK_SPACING: usize = 0x4000;

/// Lays out UObjects, chunks and chunk tables in a zeroed image.
pub(crate) struct ImageBuilder {
    memory: SnapshotMemory,
    width: usize,
    next_object: Address,
    next_chunk: Address,
}

impl ImageBuilder {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            memory: SnapshotMemory::new(Address::new(BASE), 0x80000, width),
            width,
            next_object: Address::new(BASE + 0x1000),
            next_chunk: Address::new(BASE + 0x40000),
        }
    }

    fn ptr(&mut self, at: Address, value: Address) {
        self.memory.write_ptr(at, value).expect("fixture pointer write");
    }

    fn int(&mut self, at: Address, value: i32) {
        self.memory.write_i32(at, value).expect("fixture int write");
    }

    pub(crate) fn object(&mut self, internal_index: i32, name_index: i32, class: Address, outer: Address) -> Address {
        let w = self.width;
        let address = self.next_object;
        self.next_object = address.offset(OBJECT_SPACING);

        self.int(address.offset(w + 4), internal_index);
        self.ptr(address.offset(w + 8), class);
        self.int(address.offset(2 * w + 8), name_index);
        self.ptr(address.offset(2 * w + 16), outer);
        address
    }

    pub(crate) fn set_class(&mut self, object: Address, class: Address) {
        self.ptr(object.offset(self.width + 8), class);
    }

    pub(crate) fn set_name_number(&mut self, object: Address, number: i32) {
        self.int(object.offset(2 * self.width + 12), number);
    }

    pub(crate) fn set_next(&mut self, field: Address, next: Address) {
        self.ptr(field.offset(3 * self.width + 16), next);
    }

    pub(crate) fn set_super(&mut self, structure: Address, super_struct: Address) {
        self.ptr(structure.offset(4 * self.width + 16), super_struct);
    }

    pub(crate) fn set_children(&mut self, structure: Address, children: Address) {
        self.ptr(structure.offset(5 * self.width + 16), children);
    }

    pub(crate) fn set_property_size(&mut self, structure: Address, size: i32) {
        self.int(structure.offset(6 * self.width + 16), size);
    }

    fn allocate_chunk(&mut self) -> Address {
        let address = self.next_chunk;
        self.next_chunk = address.offset(CHUNK_SPACING);
        address
    }

    /// Bare object pointers, one per slot.
    pub(crate) fn chunk(&mut self, objects: &[Address]) -> Address {
        let address = self.allocate_chunk();
        for (index, object) in objects.iter().enumerate() {
            self.ptr(address.offset(index * self.width), *object);
        }
        address
    }

    /// `FUObjectItem` records in target layout.
    pub(crate) fn item_chunk(&mut self, objects: &[Address]) -> Address {
        let stride = self.width + 16;
        let address = self.allocate_chunk();
        for (index, object) in objects.iter().enumerate() {
            let item = address.offset(index * stride);
            self.ptr(item, *object);
            self.int(item.offset(self.width + 8), index as i32);
        }
        address
    }

    pub(crate) fn chunk_table(&mut self, chunks: &[Address]) -> Address {
        self.chunk(chunks)
    }

    pub(crate) fn finish(self) -> SnapshotMemory {
        self.memory
    }
}

pub(crate) fn test_registry() -> TypeRegistry {
    let registry = TypeRegistry::with_pointer_width(8);
    registry
        .load(SchemaDocument::from_json(TEST_SCHEMA).expect("test schema"), false)
        .expect("test schema loads");
    registry
}

pub(crate) fn session_with(image: ImageBuilder, names: Vec<&str>, walker: WalkerConfig) -> Session {
    let names: StaticNameTable = names.into_iter().collect();
    Session::new(Arc::new(image.finish()), Arc::new(test_registry()), Arc::new(names)).with_walker(walker)
}

pub(crate) fn session_for(image: ImageBuilder) -> Session {
    session_with(image, TEST_NAMES.to_vec(), WalkerConfig::default())
}
