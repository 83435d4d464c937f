// Mon Jan 19 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Dword,
    Dword64,
    UIntPtr,
}

impl PrimitiveType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let ty = match keyword {
            "int8" => Self::I8,
            "int16" => Self::I16,
            "int" | "int32" => Self::I32,
            "int64" => Self::I64,
            "uint8" => Self::U8,
            "uint16" => Self::U16,
            "uint" | "uint32" => Self::U32,
            "uint64" => Self::U64,
            "float" => Self::F32,
            "double" => Self::F64,
            "bool" => Self::Bool,
            "DWORD" => Self::Dword,
            "DWORD64" => Self::Dword64,
            "uintptr" => Self::UIntPtr,
            _ => return None,
        };
        Some(ty)
    }

    pub fn size(self, pointer_width: usize) -> usize {
        match self {
            Self::I8 | Self::U8 | Self::Bool => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 | Self::Dword => 4,
            Self::I64 | Self::U64 | Self::F64 | Self::Dword64 => 8,
            Self::UIntPtr => pointer_width,
        }
    }
}

/// How a schema type name is laid out in target memory.
///
/// Classification is by exclusion: anything that is not a primitive keyword,
/// a `*`-suffixed pointer, `string` or a bare numeral names a struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Primitive(PrimitiveType),
    Pointer,
    String,
    Bytes(usize),
    Struct,
}

impl TypeClass {
    pub fn of(type_name: &str) -> Self {
        if let Some(primitive) = PrimitiveType::from_keyword(type_name) {
            return Self::Primitive(primitive);
        }
        if type_name.ends_with('*') {
            return Self::Pointer;
        }
        if type_name == "string" {
            return Self::String;
        }
        if let Some(count) = parse_numeral(type_name) {
            return Self::Bytes(count);
        }
        Self::Struct
    }

    /// Size without consulting the registry, `None` for struct references.
    pub fn fixed_size(self, pointer_width: usize) -> Option<usize> {
        match self {
            Self::Primitive(primitive) => Some(primitive.size(pointer_width)),
            Self::Pointer | Self::String => Some(pointer_width),
            Self::Bytes(count) => Some(count),
            Self::Struct => None,
        }
    }

    /// Stored as a target pointer, so it shrinks on narrower targets.
    pub fn is_pointer_valued(self) -> bool {
        matches!(
            self,
            Self::Pointer | Self::String | Self::Primitive(PrimitiveType::UIntPtr)
        )
    }

    pub fn is_struct(self) -> bool {
        matches!(self, Self::Struct)
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => write!(f, "{:?}", ty),
            Self::Pointer => write!(f, "pointer"),
            Self::String => write!(f, "string"),
            Self::Bytes(count) => write!(f, "bytes[{}]", count),
            Self::Struct => write!(f, "struct"),
        }
    }
}

fn parse_numeral(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
