// Mon Jan 19 2026 - Alex

use crate::schema::StructDefinition;
use serde::{Deserialize, Serialize};

/// A resolved layout in a form downstream code generators can consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableLayout {
    pub name: String,
    #[serde(rename = "super", skip_serializing_if = "Option::is_none")]
    pub super_name: Option<String>,
    pub size: usize,
    pub foreign_size: usize,
    pub fields: Vec<SerializableField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub offset: usize,
    pub size: usize,
    pub is_struct: bool,
}

impl SerializableLayout {
    pub fn for_target(definition: &StructDefinition, native_width: usize, target_width: usize) -> Self {
        Self {
            name: definition.name().to_string(),
            super_name: definition.super_name().map(str::to_string),
            size: definition.size(),
            foreign_size: definition.foreign_size(native_width, target_width),
            fields: definition
                .fields()
                .iter()
                .map(|f| SerializableField {
                    name: f.name().to_string(),
                    type_name: f.type_name().to_string(),
                    offset: f.offset(),
                    size: f.size(),
                    is_struct: f.is_struct_valued(),
                })
                .collect(),
        }
    }
}

impl From<&StructDefinition> for SerializableLayout {
    fn from(definition: &StructDefinition) -> Self {
        Self::for_target(definition, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaDocument, TypeRegistry};

    #[test]
    fn test_export_with_foreign_size() {
        let registry = TypeRegistry::with_pointer_width(8);
        registry
            .load(
                SchemaDocument::from_json(
                    r#"{"structs":[{"name":"FUObjectItem","super":"","vars":[
                        {"Object":"UObject*"},{"Flags":"int32"},{"ClusterIndex":"int32"},{"SerialNumber":"int32"}
                    ]}]}"#,
                )
                .unwrap(),
                false,
            )
            .unwrap();
        let item = registry.get("FUObjectItem").unwrap();
        let layout = SerializableLayout::for_target(&item, 8, 4);

        assert_eq!(layout.size, 20);
        assert_eq!(layout.foreign_size, 16);
        assert_eq!(layout.fields[1].offset, 8);

        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["fields"][0]["type"], "UObject*");
        assert!(json.get("super").is_none());
    }
}
