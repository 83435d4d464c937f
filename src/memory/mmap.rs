// Mon Jan 19 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// A raw memory image mapped from disk, placed at `base_address`.
pub struct MmapMemory {
    mmap: Arc<Mmap>,
    base_address: Address,
    pointer_width: usize,
}

impl MmapMemory {
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        base_address: Address,
        pointer_width: usize,
    ) -> Result<Self, MemoryError> {
        if pointer_width != 4 && pointer_width != 8 {
            return Err(MemoryError::UnsupportedPointerWidth(pointer_width));
        }
        let file = File::open(path)?;
        // The image is opened read-only and never written while mapped.
        let mmap = unsafe { Mmap::map(&file) }?;
        Ok(Self {
            mmap: Arc::new(mmap),
            base_address,
            pointer_width,
        })
    }

    pub fn base_address(&self) -> Address {
        self.base_address
    }

    pub fn size(&self) -> usize {
        self.mmap.len()
    }

    fn offset(&self, addr: Address) -> Result<usize, MemoryError> {
        if addr < self.base_address {
            return Err(MemoryError::OutOfBounds(addr.as_u64()));
        }
        let offset = (addr.as_u64() - self.base_address.as_u64()) as usize;
        if offset >= self.mmap.len() {
            return Err(MemoryError::OutOfBounds(addr.as_u64()));
        }
        Ok(offset)
    }
}

impl MemoryReader for MmapMemory {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        let offset = self.offset(addr)?;
        if offset + len > self.mmap.len() {
            return Err(MemoryError::ReadFailed { addr: addr.as_u64(), len });
        }
        Ok(self.mmap[offset..offset + len].to_vec())
    }

    fn is_valid_address(&self, addr: Address) -> bool {
        !addr.is_null() && self.offset(addr).is_ok()
    }

    fn pointer_width(&self) -> usize {
        self.pointer_width
    }
}
