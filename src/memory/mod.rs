// Mon Jan 19 2026 - Alex

pub mod address;
pub mod error;
pub mod mmap;
pub mod snapshot;
pub mod traits;

pub use address::Address;
pub use error::MemoryError;
pub use mmap::MmapMemory;
pub use snapshot::SnapshotMemory;
pub use traits::MemoryReader;
