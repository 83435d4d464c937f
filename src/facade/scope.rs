// Mon Jan 19 2026 - Alex

use crate::facade::{UeClass, UeObject};
use crate::memory::Address;
use crate::objects::ObjectTable;
use crate::session::Session;

/// A built object table together with the session it was read through.
#[derive(Clone, Copy)]
pub struct ObjectScope<'a> {
    session: &'a Session,
    table: &'a ObjectTable,
}

impl<'a> ObjectScope<'a> {
    pub fn new(session: &'a Session, table: &'a ObjectTable) -> Self {
        Self { session, table }
    }

    pub fn session(&self) -> &'a Session {
        self.session
    }

    pub fn table(&self) -> &'a ObjectTable {
        self.table
    }

    /// The facade for `address`; invalid when the table doesn't hold it.
    pub fn object(self, address: Address) -> UeObject<'a> {
        UeObject::new(self, self.table.by_address_or_empty(address))
    }

    pub fn empty(self) -> UeObject<'a> {
        self.object(Address::NULL)
    }

    pub fn objects(self) -> impl Iterator<Item = UeObject<'a>> + 'a {
        self.table.iter().map(move |record| UeObject::new(self, record))
    }

    /// Linear scan by full name; the empty facade when nothing matches.
    pub fn find_by_full_name(self, full_name: &str) -> UeObject<'a> {
        self.objects()
            .find(|object| object.full_name() == full_name)
            .unwrap_or_else(|| self.empty())
    }

    /// Looks a class up by full name, e.g. `"Class Engine.Actor"`.
    pub fn find_class(self, full_name: &str) -> UeClass<'a> {
        self.find_by_full_name(full_name).cast()
    }
}
