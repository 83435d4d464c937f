// Mon Jan 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Read of {len} bytes failed at address 0x{addr:x}")]
    ReadFailed { addr: u64, len: usize },
    #[error("Out of bounds: address 0x{0:x} not in image")]
    OutOfBounds(u64),
    #[error("Unsupported pointer width: {0}")]
    UnsupportedPointerWidth(usize),
    #[error("Target process detached")]
    Detached,
}
