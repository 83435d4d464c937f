// Mon Jan 19 2026 - Alex

use crate::memory::MemoryError;
use crate::schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Not found `{field}` in struct `{struct_name}`")]
    FieldNotFound { struct_name: String, field: String },
    #[error("`{0}` is not a struct")]
    NotAStruct(String),
    #[error("Read of {len} bytes for `{field}` at offset 0x{offset:x} exceeds struct buffer")]
    OutOfBounds { field: String, offset: usize, len: usize },
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
}
