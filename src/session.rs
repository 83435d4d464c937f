// Mon Jan 19 2026 - Alex

use crate::config::WalkerConfig;
use crate::memory::MemoryReader;
use crate::objects::NameTable;
use crate::schema::TypeRegistry;
use crate::view::StructReader;
use std::sync::Arc;

/// Everything a walk needs: target memory, resolved schema and names.
#[derive(Clone)]
pub struct Session {
    reader: StructReader,
    names: Arc<dyn NameTable>,
    walker: WalkerConfig,
}

impl Session {
    pub fn new(memory: Arc<dyn MemoryReader>, registry: Arc<TypeRegistry>, names: Arc<dyn NameTable>) -> Self {
        Self {
            reader: StructReader::new(memory, registry),
            names,
            walker: WalkerConfig::default(),
        }
    }

    pub fn with_walker(mut self, walker: WalkerConfig) -> Self {
        self.walker = walker;
        self
    }

    pub fn reader(&self) -> &StructReader {
        &self.reader
    }

    pub fn memory(&self) -> &dyn MemoryReader {
        self.reader.memory().as_ref()
    }

    pub fn registry(&self) -> &TypeRegistry {
        self.reader.registry()
    }

    pub fn names(&self) -> &dyn NameTable {
        self.names.as_ref()
    }

    pub fn walker(&self) -> &WalkerConfig {
        &self.walker
    }
}
