// Mon Jan 19 2026 - Alex

use crate::memory::{Address, MemoryError};

/// Read access to the memory of an attached target process.
///
/// Only `read_bytes`, `is_valid_address` and `pointer_width` are required;
/// the scalar readers decode little-endian values on top of them.
pub trait MemoryReader: Send + Sync {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError>;

    /// Whether `addr` looks like a readable, plausible pointer in the target.
    fn is_valid_address(&self, addr: Address) -> bool;

    /// Pointer width of the target process, 4 or 8.
    fn pointer_width(&self) -> usize;

    fn is_target_64bit(&self) -> bool {
        self.pointer_width() == 8
    }

    fn read_u8(&self, addr: Address) -> Result<u8, MemoryError> {
        let bytes = self.read_bytes(addr, 1)?;
        Ok(bytes[0])
    }

    fn read_u16(&self, addr: Address) -> Result<u16, MemoryError> {
        let bytes = self.read_bytes(addr, 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&self, addr: Address) -> Result<u32, MemoryError> {
        let bytes = self.read_bytes(addr, 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u64(&self, addr: Address) -> Result<u64, MemoryError> {
        let bytes = self.read_bytes(addr, 8)?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    fn read_i32(&self, addr: Address) -> Result<i32, MemoryError> {
        Ok(self.read_u32(addr)? as i32)
    }

    /// Reads one target-width pointer.
    fn read_ptr(&self, addr: Address) -> Result<Address, MemoryError> {
        match self.pointer_width() {
            4 => Ok(Address::new(self.read_u32(addr)? as u64)),
            8 => Ok(Address::new(self.read_u64(addr)?)),
            other => Err(MemoryError::UnsupportedPointerWidth(other)),
        }
    }
}

impl<T: MemoryReader + ?Sized> MemoryReader for std::sync::Arc<T> {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        (**self).read_bytes(addr, len)
    }

    fn is_valid_address(&self, addr: Address) -> bool {
        (**self).is_valid_address(addr)
    }

    fn pointer_width(&self) -> usize {
        (**self).pointer_width()
    }
}
