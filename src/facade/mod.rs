// Mon Jan 19 2026 - Alex

pub mod kinds;
pub mod object;
pub mod scope;

pub use kinds::{ObjectKind, UeClass, UeEnum, UeField, UeFunction, UeScriptStruct, UeStruct};
pub use object::UeObject;
pub use scope::ObjectScope;
