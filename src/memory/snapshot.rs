// Mon Jan 19 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};

/// An owned little-endian image of target memory starting at `base_address`.
///
/// Every address inside the image counts as valid; the image grows on writes
/// past its end, which is what the fixture builders rely on.
#[derive(Debug, Clone)]
pub struct SnapshotMemory {
    data: Vec<u8>,
    base_address: Address,
    pointer_width: usize,
}

impl SnapshotMemory {
    pub fn new(base_address: Address, size: usize, pointer_width: usize) -> Self {
        Self {
            data: vec![0; size],
            base_address,
            pointer_width,
        }
    }

    pub fn from_bytes(data: Vec<u8>, base_address: Address, pointer_width: usize) -> Self {
        Self {
            data,
            base_address,
            pointer_width,
        }
    }

    pub fn base_address(&self) -> Address {
        self.base_address
    }

    pub fn end_address(&self) -> Address {
        self.base_address.offset(self.data.len())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset_of(&self, addr: Address) -> Result<usize, MemoryError> {
        if addr < self.base_address {
            return Err(MemoryError::OutOfBounds(addr.as_u64()));
        }
        Ok((addr.as_u64() - self.base_address.as_u64()) as usize)
    }

    pub fn write_bytes(&mut self, addr: Address, bytes: &[u8]) -> Result<(), MemoryError> {
        let offset = self.offset_of(addr)?;
        let end = offset + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[offset..end].copy_from_slice(bytes);
        Ok(())
    }

    pub fn write_u32(&mut self, addr: Address, value: u32) -> Result<(), MemoryError> {
        self.write_bytes(addr, &value.to_le_bytes())
    }

    pub fn write_i32(&mut self, addr: Address, value: i32) -> Result<(), MemoryError> {
        self.write_bytes(addr, &value.to_le_bytes())
    }

    pub fn write_u64(&mut self, addr: Address, value: u64) -> Result<(), MemoryError> {
        self.write_bytes(addr, &value.to_le_bytes())
    }

    /// Writes `value` using the image's target pointer width.
    pub fn write_ptr(&mut self, addr: Address, value: Address) -> Result<(), MemoryError> {
        match self.pointer_width {
            4 => self.write_u32(addr, value.as_u64() as u32),
            8 => self.write_u64(addr, value.as_u64()),
            other => Err(MemoryError::UnsupportedPointerWidth(other)),
        }
    }
}

impl MemoryReader for SnapshotMemory {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        let offset = self.offset_of(addr)?;
        if offset + len > self.data.len() {
            return Err(MemoryError::ReadFailed { addr: addr.as_u64(), len });
        }
        Ok(self.data[offset..offset + len].to_vec())
    }

    fn is_valid_address(&self, addr: Address) -> bool {
        !addr.is_null() && addr.is_within_range(self.base_address, self.end_address())
    }

    fn pointer_width(&self) -> usize {
        self.pointer_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_scalars() {
        let mut image = SnapshotMemory::new(Address::new(0x1000), 0x20, 8);
        image.write_u32(Address::new(0x1000), 0xdeadbeef).unwrap();
        image.write_ptr(Address::new(0x1008), Address::new(0x1010)).unwrap();

        assert_eq!(image.read_u32(Address::new(0x1000)).unwrap(), 0xdeadbeef);
        assert_eq!(image.read_ptr(Address::new(0x1008)).unwrap(), Address::new(0x1010));
    }

    #[test]
    fn test_pointer_width_four() {
        let mut image = SnapshotMemory::new(Address::new(0x1000), 0x10, 4);
        image.write_ptr(Address::new(0x1000), Address::new(0x1004)).unwrap();
        image.write_u32(Address::new(0x1004), 0xffff_ffff).unwrap();

        assert_eq!(image.read_ptr(Address::new(0x1000)).unwrap(), Address::new(0x1004));
        assert!(!image.is_target_64bit());
    }

    #[test]
    fn test_grows_on_write_past_end() {
        let mut image = SnapshotMemory::new(Address::new(0x1000), 4, 8);
        image.write_u64(Address::new(0x1010), 7).unwrap();
        assert_eq!(image.len(), 0x18);
        assert_eq!(image.read_u64(Address::new(0x1010)).unwrap(), 7);
    }

    #[test]
    fn test_read_out_of_bounds() {
        let image = SnapshotMemory::new(Address::new(0x1000), 0x10, 8);
        assert!(image.read_bytes(Address::new(0x1008), 0x10).is_err());
        assert!(image.read_bytes(Address::new(0x500), 4).is_err());
    }

    #[test]
    fn test_valid_address_range() {
        let image = SnapshotMemory::new(Address::new(0x1000), 0x10, 8);
        assert!(image.is_valid_address(Address::new(0x1000)));
        assert!(image.is_valid_address(Address::new(0x100f)));
        assert!(!image.is_valid_address(Address::new(0x1010)));
        assert!(!image.is_valid_address(Address::NULL));
    }
}
