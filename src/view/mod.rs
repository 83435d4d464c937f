// Mon Jan 19 2026 - Alex

pub mod error;
pub mod materialized;
pub mod reader;
pub mod scalar;

pub use error::ViewError;
pub use materialized::{FieldView, MaterializedStruct};
pub use reader::StructReader;
pub use scalar::FieldValue;
