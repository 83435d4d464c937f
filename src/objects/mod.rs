// Mon Jan 19 2026 - Alex

pub mod detect;
pub mod error;
pub mod info;
pub mod iter;
pub mod names;
pub mod record;
pub mod table;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use detect::{detect_layout, probe_chunks, ChunkProbe};
pub use error::ObjectsError;
pub use info::{EntryLayout, ObjectInfo};
pub use iter::ObjectsIter;
pub use names::{NameTable, StaticNameTable};
pub use record::ObjectRecord;
pub use table::ObjectTable;
pub use validator::ObjectValidator;
