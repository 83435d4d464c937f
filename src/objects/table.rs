// Mon Jan 19 2026 - Alex

use crate::memory::Address;
use crate::objects::detect::{detect_layout, probe_chunks};
use crate::objects::record::FIELD_ITEM_OBJECT;
use crate::objects::{EntryLayout, ObjectInfo, ObjectRecord, ObjectValidator, ObjectsError, ObjectsIter};
use crate::session::Session;
use crate::utils::{scoped_timer, ProgressLogger};
use crate::view::{MaterializedStruct, StructReader, ViewError};
use indexmap::IndexMap;

static EMPTY_RECORD: ObjectRecord = ObjectRecord::EMPTY;

type RecordMap = IndexMap<Address, ObjectRecord, ahash::RandomState>;

/// Objects accepted from a walk of the global object table, keyed by
/// address in the order they were found.
pub struct ObjectTable {
    info: Option<ObjectInfo>,
    objects: RecordMap,
}

/// Reused buffers for the entries being walked.
#[derive(Default)]
struct Scratch {
    object: Option<MaterializedStruct>,
    item: Option<MaterializedStruct>,
}

impl ObjectTable {
    pub fn new() -> Self {
        Self {
            info: None,
            objects: IndexMap::with_hasher(ahash::RandomState::new()),
        }
    }

    /// Walks the table at `address` into a fresh store.
    pub fn build(session: &Session, address: Address) -> Result<Self, ObjectsError> {
        let mut table = Self::new();
        table.initialize(session, address, false)?;
        Ok(table)
    }

    /// Detects the table layout at `address` and collects every accepted
    /// object. Does nothing if already initialized unless `force_reinit`.
    /// On failure the store is left empty.
    pub fn initialize(&mut self, session: &Session, address: Address, force_reinit: bool) -> Result<(), ObjectsError> {
        if self.info.is_some() && !force_reinit {
            return Ok(());
        }
        if session.names().count() == 0 {
            return Err(ObjectsError::NamesNotLoaded);
        }

        self.clear();
        let result = self.fetch(session, address);
        match result {
            Ok(info) => {
                self.info = Some(info);
                Ok(())
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    fn fetch(&mut self, session: &Session, address: Address) -> Result<ObjectInfo, ObjectsError> {
        let _timer = scoped_timer("object table walk");
        let memory = session.memory();

        let probe = probe_chunks(memory, address, session.walker())?;
        let first_chunk = probe
            .chunks
            .first()
            .copied()
            .ok_or(ObjectsError::LayoutUndetected(address))?;
        let layout = detect_layout(memory, first_chunk)?;
        let stride = match layout {
            EntryLayout::PointerNextToPointer => memory.pointer_width(),
            EntryLayout::ItemRecord => {
                let reader = session.reader();
                let item = session.registry().resolve(&session.walker().item_struct, false)?;
                item.foreign_size(reader.native_width(), reader.target_width())
            }
        };

        log::info!(
            "Object table at {}: {} layout, {} chunk(s), stride {}",
            address,
            layout,
            probe.chunks.len(),
            stride
        );

        let mut scratch = Scratch::default();
        let mut progress = ProgressLogger::new("object chunks", probe.chunks.len());
        let mut count = 0;
        for (index, chunk) in probe.chunks.iter().enumerate() {
            let accepted = self.walk_chunk(session, *chunk, layout, stride, &mut scratch)?;
            log::debug!("Chunk {} at {}: {} objects", index, chunk, accepted);
            count += accepted;
            progress.inc();
        }

        log::info!("Collected {} objects", count);
        Ok(ObjectInfo {
            address,
            is_chunked: probe.is_chunked,
            chunks: probe.chunks,
            layout,
            stride,
            count,
        })
    }

    /// Walks one chunk until more than `max_consecutive_skips` slots in a
    /// row were skipped. A non-null slot resets the run; a rejected or
    /// unreadable object then counts as one skip.
    fn walk_chunk(
        &mut self,
        session: &Session,
        chunk: Address,
        layout: EntryLayout,
        stride: usize,
        scratch: &mut Scratch,
    ) -> Result<usize, ObjectsError> {
        let walker = session.walker();
        let reader = session.reader();
        let mut skipped = 0;
        let mut accepted = 0;
        let mut slot = 0;

        while skipped <= walker.max_consecutive_skips {
            let entry = chunk.offset(slot * stride);
            slot += 1;

            let object = match layout {
                EntryLayout::PointerNextToPointer => session.memory().read_ptr(entry)?,
                EntryLayout::ItemRecord => {
                    fill(&mut scratch.item, reader, entry, &walker.item_struct)?.read_ptr(FIELD_ITEM_OBJECT)?
                }
            };
            if object.is_null() {
                skipped += 1;
                continue;
            }
            skipped = 0;
            if self.contains(object) {
                log::trace!("Slot {} -> {}: already collected", entry, object);
                skipped += 1;
                continue;
            }

            let record = match fill(&mut scratch.object, reader, object, &walker.object_struct) {
                Ok(materialized) => ObjectRecord::from_struct(materialized)?,
                Err(ViewError::Memory(e)) => {
                    log::trace!("Slot {} -> {}: unreadable ({})", entry, object, e);
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let valid = ObjectValidator::new(self, session.names(), walker.max_index_gap).is_valid(&record, false)?;
            if valid {
                self.insert(record);
                accepted += 1;
            } else {
                skipped += 1;
            }
        }

        Ok(accepted)
    }

    pub(crate) fn insert(&mut self, record: ObjectRecord) {
        self.objects.insert(record.address, record);
    }

    pub fn clear(&mut self) {
        self.info = None;
        self.objects.clear();
    }

    pub fn info(&self) -> Option<&ObjectInfo> {
        self.info.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.info.is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, address: Address) -> bool {
        self.objects.contains_key(&address)
    }

    pub fn get(&self, address: Address) -> Option<&ObjectRecord> {
        self.objects.get(&address)
    }

    pub fn by_address(&self, address: Address) -> Result<&ObjectRecord, ObjectsError> {
        self.get(address).ok_or(ObjectsError::ObjectNotFound(address))
    }

    /// Like [`Self::by_address`], but a miss yields the empty record.
    pub fn by_address_or_empty(&self, address: Address) -> &ObjectRecord {
        self.get(address).unwrap_or(&EMPTY_RECORD)
    }

    /// Position in collection order, not the object's internal index.
    pub fn by_index(&self, index: usize) -> Result<&ObjectRecord, ObjectsError> {
        self.objects
            .get_index(index)
            .map(|(_, record)| record)
            .ok_or(ObjectsError::IndexOutOfRange {
                index,
                count: self.objects.len(),
            })
    }

    pub fn last(&self) -> Option<&ObjectRecord> {
        self.objects.last().map(|(_, record)| record)
    }

    pub fn iter(&self) -> ObjectsIter<'_> {
        ObjectsIter::new(self)
    }
}

impl Default for ObjectTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ObjectTable {
    type Item = &'a ObjectRecord;
    type IntoIter = ObjectsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn fill<'s>(
    slot: &'s mut Option<MaterializedStruct>,
    reader: &StructReader,
    address: Address,
    struct_name: &str,
) -> Result<&'s MaterializedStruct, ViewError> {
    let filled = match slot.take() {
        Some(mut existing) => {
            reader.read_into(&mut existing, address)?;
            existing
        }
        None => reader.read(address, struct_name)?,
    };
    Ok(slot.insert(filled))
}
