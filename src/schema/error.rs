// Mon Jan 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Struct `{name}` names missing super struct `{super_name}`")]
    MissingSuper { name: String, super_name: String },
    #[error("Can't detect size of type `{0}`")]
    UnknownType(String),
    #[error("Struct not found: {0}")]
    StructNotFound(String),
    #[error("Cyclic struct reference: {0}")]
    CyclicReference(String),
    #[error("Duplicate field `{field}` in struct `{name}`")]
    DuplicateField { name: String, field: String },
    #[error("Malformed field entry in struct `{name}`: {reason}")]
    MalformedField { name: String, reason: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
