// Mon Jan 19 2026 - Alex

use crate::facade::{ObjectKind, ObjectScope, UeClass, UeStruct};
use crate::memory::Address;
use crate::objects::ObjectRecord;
use crate::view::{MaterializedStruct, ViewError};
use itertools::Itertools;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Bound on outer and super chains; a longer chain is treated as broken.
pub const MAX_CHAIN_DEPTH: usize = 256;

const ACTOR_CLASS: &str = "Class Engine.Actor";

/// Typed view of one UObject held in an [`ObjectScope`].
///
/// Names are computed on first use and cached for the lifetime of the
/// facade. Equality and hashing only consider the object's address.
#[derive(Clone)]
pub struct UeObject<'a> {
    scope: ObjectScope<'a>,
    record: &'a ObjectRecord,
    name: OnceCell<String>,
    full_name: OnceCell<String>,
    cpp_name: OnceCell<String>,
}

impl<'a> UeObject<'a> {
    pub(crate) fn new(scope: ObjectScope<'a>, record: &'a ObjectRecord) -> Self {
        Self {
            scope,
            record,
            name: OnceCell::new(),
            full_name: OnceCell::new(),
            cpp_name: OnceCell::new(),
        }
    }

    pub fn scope(&self) -> ObjectScope<'a> {
        self.scope
    }

    pub fn record(&self) -> &'a ObjectRecord {
        self.record
    }

    pub fn address(&self) -> Address {
        self.record.address
    }

    pub fn index(&self) -> i32 {
        self.record.internal_index
    }

    pub fn is_valid(&self) -> bool {
        self.record.is_valid()
    }

    /// The object's name with the engine's number suffix applied.
    pub fn name(&self) -> &str {
        self.name.get_or_init(|| {
            let raw = usize::try_from(self.record.name_index)
                .ok()
                .and_then(|index| self.scope.session().names().name(index))
                .unwrap_or("");
            display_name(raw, self.record.name_number)
        })
    }

    /// `"<ClassName> <Outermost>.<...>.<Name>"`, or empty without a class.
    pub fn full_name(&self) -> &str {
        self.full_name.get_or_init(|| {
            let class = self.class();
            if !class.is_valid() {
                return String::new();
            }

            let mut outers = Vec::new();
            let mut outer = self.outer();
            while outer.is_valid() && outers.len() < MAX_CHAIN_DEPTH {
                let next = outer.outer();
                outers.push(outer);
                outer = next;
            }

            let path = outers
                .iter()
                .rev()
                .map(|outer| outer.name())
                .chain(std::iter::once(self.name()))
                .join(".");
            format!("{} {}", class.name(), path)
        })
    }

    /// The name as a C++ type identifier: `A` for actor classes, `U` for
    /// other classes, `F` for anything else.
    pub fn name_cpp(&self) -> Result<&str, ViewError> {
        self.cpp_name
            .get_or_try_init(|| -> Result<String, ViewError> {
                let prefix = if self.is_a::<UeClass>()? {
                    if self.cast::<UeStruct>().derives_from(ACTOR_CLASS)? {
                        'A'
                    } else {
                        'U'
                    }
                } else {
                    'F'
                };
                Ok(format!("{}{}", prefix, sanitize_identifier(self.name())))
            })
            .map(String::as_str)
    }

    pub fn outer(&self) -> UeObject<'a> {
        self.scope.object(self.record.outer)
    }

    pub fn class(&self) -> UeClass<'a> {
        self.scope.object(self.record.class).cast()
    }

    /// The outermost object in the outer chain, or this object itself.
    pub fn package(&self) -> UeObject<'a> {
        let mut package = self.clone();
        for _ in 0..MAX_CHAIN_DEPTH {
            let outer = package.outer();
            if !outer.is_valid() {
                break;
            }
            package = outer;
        }
        package
    }

    /// Reinterprets this object as another facade kind without checking.
    pub fn cast<T: ObjectKind<'a>>(&self) -> T {
        T::from_object(self.clone())
    }

    pub fn is_a<T: ObjectKind<'a>>(&self) -> Result<bool, ViewError> {
        self.is_a_named(T::TYPE_NAME)
    }

    /// Walks this object's class and its super chain looking for a class
    /// with full name `type_name`.
    pub fn is_a_named(&self, type_name: &str) -> Result<bool, ViewError> {
        self.class().cast::<UeStruct>().derives_from(type_name)
    }

    /// Reads this object as `struct_name` from the target.
    pub fn materialize(&self, struct_name: &str) -> Result<MaterializedStruct, ViewError> {
        self.scope.session().reader().read(self.address(), struct_name)
    }
}

impl<'a> ObjectKind<'a> for UeObject<'a> {
    const TYPE_NAME: &'static str = "Class CoreUObject.Object";

    fn from_object(object: UeObject<'a>) -> Self {
        object
    }

    fn object(&self) -> &UeObject<'a> {
        self
    }
}

impl PartialEq for UeObject<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for UeObject<'_> {}

impl Hash for UeObject<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl fmt::Debug for UeObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UeObject")
            .field("address", &self.address())
            .field("name", &self.name())
            .finish()
    }
}

impl fmt::Display for UeObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

fn display_name(raw: &str, number: i32) -> String {
    let base = match raw.rfind('/') {
        Some(position) => &raw[position + 1..],
        None => raw,
    };
    if number > 0 {
        format!("{}_{}", base, number - 1)
    } else {
        base.to_string()
    }
}

fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Actor", 0), "Actor");
        assert_eq!(display_name("Default__Pawn", 3), "Default__Pawn_2");
        assert_eq!(display_name("/Script/CoreUObject", 0), "CoreUObject");
        assert_eq!(display_name("", 0), "");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("Mesh Component"), "Mesh_Component");
        assert_eq!(sanitize_identifier("Pawn-1.Tick"), "Pawn_1_Tick");
        assert_eq!(sanitize_identifier("Vector"), "Vector");
    }
}
