// Mon Jan 19 2026 - Alex

use crate::config::WalkerConfig;
use crate::memory::{Address, MemoryReader};
use crate::objects::{EntryLayout, ObjectsError};

/// Result of probing the slots at the table address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkProbe {
    pub is_chunked: bool,
    pub chunks: Vec<Address>,
}

/// Reads up to `probe_slots` pointer slots at `address`, stopping after a
/// null run longer than `probe_null_run`. Ending on a run of at least
/// `probe_null_run` nulls means `address` holds chunk pointers and every
/// non-null slot seen is a chunk base. Otherwise the table is one flat
/// chunk starting at `address`.
pub fn probe_chunks(
    memory: &dyn MemoryReader,
    address: Address,
    config: &WalkerConfig,
) -> Result<ChunkProbe, ObjectsError> {
    let width = memory.pointer_width();
    let mut null_run = 0;
    let mut non_null = Vec::new();

    for slot in 0..config.probe_slots {
        if null_run > config.probe_null_run {
            break;
        }
        let value = memory.read_ptr(address.offset(slot * width))?;
        if value.is_null() {
            null_run += 1;
        } else {
            null_run = 0;
            non_null.push(value);
        }
    }

    if null_run >= config.probe_null_run {
        log::debug!("Chunk pointer table at {} ({} chunks)", address, non_null.len());
        Ok(ChunkProbe {
            is_chunked: true,
            chunks: non_null,
        })
    } else {
        log::debug!("Flat object table at {}", address);
        Ok(ChunkProbe {
            is_chunked: false,
            chunks: vec![address],
        })
    }
}

/// Decides between bare pointers and item records from the first chunk:
/// its first slot must be a readable pointer, and a readable second slot
/// means adjacent object pointers.
pub fn detect_layout(memory: &dyn MemoryReader, first_chunk: Address) -> Result<EntryLayout, ObjectsError> {
    let width = memory.pointer_width();
    let first = memory.read_ptr(first_chunk)?;
    if !memory.is_valid_address(first) {
        return Err(ObjectsError::LayoutUndetected(first_chunk));
    }

    let second = memory.read_ptr(first_chunk.offset(width))?;
    if memory.is_valid_address(second) {
        Ok(EntryLayout::PointerNextToPointer)
    } else {
        Ok(EntryLayout::ItemRecord)
    }
}
