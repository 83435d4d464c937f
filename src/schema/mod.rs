// Mon Jan 19 2026 - Alex

pub mod definition;
pub mod document;
pub mod error;
pub mod field;
pub mod registry;
pub mod serializer;
pub mod type_name;

pub use definition::StructDefinition;
pub use document::{FieldType, SchemaDocument, SchemaEntry};
pub use error::SchemaError;
pub use field::FieldDefinition;
pub use registry::TypeRegistry;
pub use serializer::{SerializableField, SerializableLayout};
pub use type_name::{PrimitiveType, TypeClass};
