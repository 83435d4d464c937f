// Mon Jan 19 2026 - Alex

use crate::schema::{
    FieldDefinition, FieldType, SchemaDocument, SchemaEntry, SchemaError, StructDefinition,
    TypeClass,
};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Resolves struct definitions out of a schema document and caches them by name.
///
/// Definitions are cached for the lifetime of the registry. Loading a later
/// document with `override_existing` replaces cached definitions it names and
/// keeps the rest, so an engine-specific file can be layered over a base one.
pub struct TypeRegistry {
    document: RwLock<SchemaDocument>,
    cache: RwLock<IndexMap<String, Arc<StructDefinition>>>,
    pointer_width: usize,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::with_pointer_width(std::mem::size_of::<usize>())
    }

    /// A registry laying out pointers as `pointer_width` bytes instead of the
    /// host's native width.
    pub fn with_pointer_width(pointer_width: usize) -> Self {
        Self {
            document: RwLock::new(SchemaDocument::default()),
            cache: RwLock::new(IndexMap::new()),
            pointer_width,
        }
    }

    pub fn from_document(document: SchemaDocument) -> Self {
        let registry = Self::new();
        registry.set_document(document);
        registry
    }

    pub fn pointer_width(&self) -> usize {
        self.pointer_width
    }

    /// Makes `document` the source for later resolutions without resolving anything.
    pub fn set_document(&self, document: SchemaDocument) {
        *self.document.write() = document;
    }

    /// Makes `document` current and resolves every struct it declares.
    pub fn load(&self, document: SchemaDocument, override_existing: bool) -> Result<usize, SchemaError> {
        let names: Vec<String> = document.names().map(str::to_string).collect();
        self.set_document(document);
        for name in &names {
            self.resolve(name, override_existing)?;
        }
        log::debug!("Loaded {} schema structs ({} cached)", names.len(), self.len());
        Ok(names.len())
    }

    pub fn load_file<P: AsRef<Path>>(&self, path: P, override_existing: bool) -> Result<usize, SchemaError> {
        let document = SchemaDocument::from_file(path.as_ref())?;
        log::info!("Loading schema {}", path.as_ref().display());
        self.load(document, override_existing)
    }

    pub fn resolve(&self, name: &str, override_existing: bool) -> Result<Arc<StructDefinition>, SchemaError> {
        let mut chain = Vec::new();
        self.resolve_with(name, override_existing, &mut chain)
    }

    pub fn size_of(&self, type_name: &str, override_existing: bool) -> Result<usize, SchemaError> {
        let mut chain = Vec::new();
        self.size_with(type_name, override_existing, &mut chain)
    }

    pub fn is_struct_type(&self, type_name: &str) -> bool {
        TypeClass::of(type_name).is_struct()
    }

    pub fn get(&self, name: &str) -> Option<Arc<StructDefinition>> {
        self.cache.read().get(name).cloned()
    }

    /// Cached definitions in first-resolution order.
    pub fn definitions(&self) -> Vec<Arc<StructDefinition>> {
        self.cache.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    fn resolve_with(
        &self,
        name: &str,
        override_existing: bool,
        chain: &mut Vec<String>,
    ) -> Result<Arc<StructDefinition>, SchemaError> {
        if !override_existing {
            if let Some(cached) = self.get(name) {
                return Ok(cached);
            }
        }

        let entry = self.document.read().find(name).cloned();
        let entry = match entry {
            Some(entry) => entry,
            // Not overridden by the current document: keep the earlier definition.
            None => return self.get(name).ok_or_else(|| SchemaError::StructNotFound(name.to_string())),
        };

        if chain.iter().any(|n| n == name) {
            chain.push(name.to_string());
            return Err(SchemaError::CyclicReference(chain.join(" -> ")));
        }

        chain.push(name.to_string());
        let built = self.build_definition(&entry, override_existing, chain);
        chain.pop();

        let definition = Arc::new(built?);
        log::debug!("Resolved struct {} ({} bytes, {} fields)", name, definition.size(), definition.fields().len());
        self.cache.write().insert(name.to_string(), Arc::clone(&definition));
        Ok(definition)
    }

    fn build_definition(
        &self,
        entry: &SchemaEntry,
        override_existing: bool,
        chain: &mut Vec<String>,
    ) -> Result<StructDefinition, SchemaError> {
        let mut definition = StructDefinition::new(entry.name.clone(), entry.super_name().map(str::to_string));

        if let Some(super_name) = entry.super_name() {
            let parent = self
                .resolve_with(super_name, override_existing, chain)
                .map_err(|e| match e {
                    SchemaError::StructNotFound(_) => SchemaError::MissingSuper {
                        name: entry.name.clone(),
                        super_name: super_name.to_string(),
                    },
                    other => other,
                })?;
            for field in parent.fields() {
                definition.push_field(field.clone())?;
            }
        }

        for (field_name, field_type) in entry.fields()? {
            let offset = definition.size();
            let field = match field_type {
                FieldType::Bytes(count) => FieldDefinition::new(
                    field_name.to_string(),
                    field_type.type_name(),
                    offset,
                    *count as usize,
                    TypeClass::Bytes(*count as usize),
                    None,
                ),
                FieldType::Named(type_name) => {
                    let class = TypeClass::of(type_name);
                    let (size, nested) = match class.fixed_size(self.pointer_width) {
                        Some(size) => (size, None),
                        None => {
                            let nested = self.resolve_field_struct(type_name, override_existing, chain)?;
                            (nested.size(), Some(nested))
                        }
                    };
                    FieldDefinition::new(field_name.to_string(), type_name.clone(), offset, size, class, nested)
                }
            };
            definition.push_field(field)?;
        }

        Ok(definition)
    }

    fn resolve_field_struct(
        &self,
        type_name: &str,
        override_existing: bool,
        chain: &mut Vec<String>,
    ) -> Result<Arc<StructDefinition>, SchemaError> {
        self.resolve_with(type_name, override_existing, chain)
            .map_err(|e| match e {
                SchemaError::StructNotFound(_) => SchemaError::UnknownType(type_name.to_string()),
                other => other,
            })
    }

    fn size_with(
        &self,
        type_name: &str,
        override_existing: bool,
        chain: &mut Vec<String>,
    ) -> Result<usize, SchemaError> {
        match TypeClass::of(type_name).fixed_size(self.pointer_width) {
            Some(size) => Ok(size),
            None => Ok(self.resolve_field_struct(type_name, override_existing, chain)?.size()),
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
