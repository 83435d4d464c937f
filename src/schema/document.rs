// Mon Jan 19 2026 - Alex

use crate::schema::SchemaError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The JSON schema document: `{"structs": [{"name", "super", "vars"}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub structs: Vec<SchemaEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub name: String,
    #[serde(rename = "super", default)]
    pub super_name: String,
    /// Each element is a single-key object mapping a field name to its type.
    #[serde(default)]
    pub vars: Vec<IndexMap<String, FieldType>>,
}

/// A field's declared type: a type name, or a literal byte count for
/// opaque and padding fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldType {
    Bytes(u64),
    Named(String),
}

impl FieldType {
    pub fn type_name(&self) -> String {
        match self {
            Self::Bytes(count) => count.to_string(),
            Self::Named(name) => name.clone(),
        }
    }
}

impl SchemaDocument {
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn find(&self, name: &str) -> Option<&SchemaEntry> {
        self.structs.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.structs.iter().map(|entry| entry.name.as_str())
    }
}

impl SchemaEntry {
    pub fn super_name(&self) -> Option<&str> {
        if self.super_name.is_empty() {
            None
        } else {
            Some(&self.super_name)
        }
    }

    /// Declared fields in order, rejecting entries that are not single-key objects.
    pub fn fields(&self) -> Result<Vec<(&str, &FieldType)>, SchemaError> {
        self.vars
            .iter()
            .map(|var| {
                if var.len() != 1 {
                    return Err(SchemaError::MalformedField {
                        name: self.name.clone(),
                        reason: format!("expected one key per field entry, found {}", var.len()),
                    });
                }
                let (name, ty) = var.iter().next().ok_or_else(|| SchemaError::MalformedField {
                    name: self.name.clone(),
                    reason: "empty field entry".to_string(),
                })?;
                Ok((name.as_str(), ty))
            })
            .collect()
    }
}
