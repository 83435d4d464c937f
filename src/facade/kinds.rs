// Mon Jan 19 2026 - Alex

use crate::facade::object::MAX_CHAIN_DEPTH;
use crate::facade::UeObject;
use crate::memory::Address;
use crate::view::ViewError;
use std::ops::Deref;

pub const FIELD_STRUCT: &str = "UField";
pub const STRUCT_STRUCT: &str = "UStruct";

/// A facade over a UObject of a particular engine class.
pub trait ObjectKind<'a>: Sized {
    /// Full name of the engine class this facade stands for.
    const TYPE_NAME: &'static str;

    fn from_object(object: UeObject<'a>) -> Self;
    fn object(&self) -> &UeObject<'a>;
}

macro_rules! object_kind {
    ($(#[$meta:meta])* $name:ident : $parent:ident = $type_name:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name<'a>($parent<'a>);

        impl<'a> ObjectKind<'a> for $name<'a> {
            const TYPE_NAME: &'static str = $type_name;

            fn from_object(object: UeObject<'a>) -> Self {
                Self($parent::from_object(object))
            }

            fn object(&self) -> &UeObject<'a> {
                self.0.object()
            }
        }

        impl<'a> Deref for $name<'a> {
            type Target = $parent<'a>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

object_kind!(UeField: UeObject = "Class CoreUObject.Field");
object_kind!(UeStruct: UeField = "Class CoreUObject.Struct");
object_kind!(UeClass: UeStruct = "Class CoreUObject.Class");
object_kind!(UeFunction: UeStruct = "Class CoreUObject.Function");
object_kind!(UeScriptStruct: UeStruct = "Class CoreUObject.ScriptStruct");
object_kind!(UeEnum: UeField = "Class CoreUObject.Enum");

impl<'a> UeField<'a> {
    /// The next field in the owning struct's child list.
    pub fn next(&self) -> Result<UeField<'a>, ViewError> {
        if !self.is_valid() {
            return Ok(self.scope().empty().cast());
        }
        let field = self.materialize(FIELD_STRUCT)?;
        Ok(self.scope().object(field.read_ptr("Next")?).cast())
    }
}

impl<'a> UeStruct<'a> {
    pub fn super_struct(&self) -> Result<UeStruct<'a>, ViewError> {
        let address = self.read_struct_ptr("SuperField")?;
        Ok(self.scope().object(address).cast())
    }

    pub fn children(&self) -> Result<UeField<'a>, ViewError> {
        let address = self.read_struct_ptr("Children")?;
        Ok(self.scope().object(address).cast())
    }

    pub fn property_size(&self) -> Result<i32, ViewError> {
        if !self.is_valid() {
            return Ok(0);
        }
        self.materialize(STRUCT_STRUCT)?.read::<i32>("PropertySize")
    }

    /// True if this struct or any struct in its super chain has full name
    /// `type_name`.
    pub fn derives_from(&self, type_name: &str) -> Result<bool, ViewError> {
        let mut current = self.clone();
        for _ in 0..MAX_CHAIN_DEPTH {
            if !current.is_valid() {
                return Ok(false);
            }
            if current.full_name() == type_name {
                return Ok(true);
            }
            current = current.super_struct()?;
        }
        Ok(false)
    }

    fn read_struct_ptr(&self, field: &str) -> Result<Address, ViewError> {
        if !self.is_valid() {
            return Ok(Address::NULL);
        }
        self.materialize(STRUCT_STRUCT)?.read_ptr(field)
    }
}

impl<'a> UeClass<'a> {
    /// The class this one derives from, as a class facade.
    pub fn super_class(&self) -> Result<UeClass<'a>, ViewError> {
        Ok(self.super_struct()?.cast())
    }
}
