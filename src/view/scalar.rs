// Mon Jan 19 2026 - Alex

use crate::memory::Address;

/// A fixed-size little-endian value that can be decoded from a field's bytes.
pub trait FieldValue: Sized {
    const SIZE: usize;

    /// `bytes` holds at least `SIZE` bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_field_value {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_field_value!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl FieldValue for bool {
    const SIZE: usize = 1;

    fn from_le_slice(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

impl FieldValue for Address {
    const SIZE: usize = 8;

    fn from_le_slice(bytes: &[u8]) -> Self {
        Address::new(u64::from_le_slice(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_little_endian() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(u32::from_le_slice(&bytes), 0x12345678);
        assert_eq!(i32::from_le_slice(&bytes[4..]), -1);
        assert_eq!(u16::from_le_slice(&bytes), 0x5678);
        assert_eq!(Address::from_le_slice(&bytes), Address::new(0xffffffff12345678));
        assert!(bool::from_le_slice(&bytes));
    }

    #[test]
    fn test_decode_float() {
        let bytes = 1.5f32.to_le_bytes();
        assert_eq!(f32::from_le_slice(&bytes), 1.5);
    }
}
