// Mon Jan 19 2026 - Alex

use crate::memory::Address;
use serde::Serialize;
use std::fmt;

/// How entries are laid out inside a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryLayout {
    /// Bare object pointers, one per pointer-sized slot.
    PointerNextToPointer,
    /// `FUObjectItem`-style records whose first field points at the object.
    ItemRecord,
}

impl fmt::Display for EntryLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointerNextToPointer => write!(f, "pointer-next-to-pointer"),
            Self::ItemRecord => write!(f, "item-record"),
        }
    }
}

/// What detection found out about the table at `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectInfo {
    pub address: Address,
    pub is_chunked: bool,
    pub chunks: Vec<Address>,
    pub layout: EntryLayout,
    pub stride: usize,
    pub count: usize,
}

impl ObjectInfo {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}
