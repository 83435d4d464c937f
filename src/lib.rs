// Mon Jan 19 2026 - Alex

pub mod config;
pub mod facade;
pub mod memory;
pub mod objects;
pub mod schema;
pub mod session;
pub mod utils;
pub mod view;

pub use config::{Config, WalkerConfig};
pub use facade::{ObjectKind, ObjectScope, UeClass, UeObject};
pub use memory::{Address, MemoryReader};
pub use objects::{NameTable, ObjectTable, ObjectsError};
pub use schema::{SchemaError, StructDefinition, TypeRegistry};
pub use session::Session;
pub use view::{MaterializedStruct, StructReader, ViewError};
