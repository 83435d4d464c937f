// Mon Jan 19 2026 - Alex

use crate::memory::{Address, MemoryError};
use crate::schema::SchemaError;
use crate::view::ViewError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjectsError {
    #[error("Name table is empty, names must be loaded before walking objects")]
    NamesNotLoaded,
    #[error("Can't detect object table layout at {0}")]
    LayoutUndetected(Address),
    #[error("No object at {0}")]
    ObjectNotFound(Address),
    #[error("Object index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("View error: {0}")]
    View(#[from] ViewError),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
}
