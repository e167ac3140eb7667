use std::marker::PhantomData;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::codec::Codec;

/// Byte order used to store a fixed-width value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// The host's order. Matches values written by other native tools on the
    /// same machine but is not portable across architectures.
    Native,
    Little,
    Big,
}

/// Type-level byte order selector.
pub trait Endianness {
    const ORDER: ByteOrder;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEndian;

#[derive(Debug, Clone, Copy, Default)]
pub struct LittleEndian;

#[derive(Debug, Clone, Copy, Default)]
pub struct BigEndian;

impl Endianness for NativeEndian {
    const ORDER: ByteOrder = ByteOrder::Native;
}

impl Endianness for LittleEndian {
    const ORDER: ByteOrder = ByteOrder::Little;
}

impl Endianness for BigEndian {
    const ORDER: ByteOrder = ByteOrder::Big;
}

/// A fixed-width number that can be read from and written to a byte buffer.
pub trait Number: Copy {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Read one value. The caller guarantees `src.remaining() >= WIDTH`.
    fn get<B: Buf>(src: &mut B, order: ByteOrder) -> Self;

    /// Append exactly `WIDTH` bytes.
    fn put<B: BufMut>(self, dst: &mut B, order: ByteOrder);
}

macro_rules! number {
    ($ty:ty, $get:ident, $get_le:ident, $get_ne:ident, $put:ident, $put_le:ident, $put_ne:ident) => {
        impl Number for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            fn get<B: Buf>(src: &mut B, order: ByteOrder) -> Self {
                match order {
                    ByteOrder::Native => src.$get_ne(),
                    ByteOrder::Little => src.$get_le(),
                    ByteOrder::Big => src.$get(),
                }
            }

            fn put<B: BufMut>(self, dst: &mut B, order: ByteOrder) {
                match order {
                    ByteOrder::Native => dst.$put_ne(self),
                    ByteOrder::Little => dst.$put_le(self),
                    ByteOrder::Big => dst.$put(self),
                }
            }
        }
    };
}

// Single bytes have no order.
number!(u8, get_u8, get_u8, get_u8, put_u8, put_u8, put_u8);
number!(i8, get_i8, get_i8, get_i8, put_i8, put_i8, put_i8);
number!(u16, get_u16, get_u16_le, get_u16_ne, put_u16, put_u16_le, put_u16_ne);
number!(i16, get_i16, get_i16_le, get_i16_ne, put_i16, put_i16_le, put_i16_ne);
number!(u32, get_u32, get_u32_le, get_u32_ne, put_u32, put_u32_le, put_u32_ne);
number!(i32, get_i32, get_i32_le, get_i32_ne, put_i32, put_i32_le, put_i32_ne);
number!(u64, get_u64, get_u64_le, get_u64_ne, put_u64, put_u64_le, put_u64_ne);
number!(i64, get_i64, get_i64_le, get_i64_ne, put_i64, put_i64_le, put_i64_ne);
number!(f32, get_f32, get_f32_le, get_f32_ne, put_f32, put_f32_le, put_f32_ne);
number!(f64, get_f64, get_f64_le, get_f64_ne, put_f64, put_f64_le, put_f64_ne);

// Pointer-sized integers take the width of the host, via the fixed-width
// integer of the same width and signedness.
macro_rules! pointer_sized {
    ($ty:ty, $via:ty) => {
        impl Number for $ty {
            const WIDTH: usize = <$via as Number>::WIDTH;

            fn get<B: Buf>(src: &mut B, order: ByteOrder) -> Self {
                <$via as Number>::get(src, order) as $ty
            }

            fn put<B: BufMut>(self, dst: &mut B, order: ByteOrder) {
                (self as $via).put(dst, order)
            }
        }
    };
}

#[cfg(target_pointer_width = "64")]
pointer_sized!(usize, u64);
#[cfg(target_pointer_width = "64")]
pointer_sized!(isize, i64);
#[cfg(target_pointer_width = "32")]
pointer_sized!(usize, u32);
#[cfg(target_pointer_width = "32")]
pointer_sized!(isize, i32);

/// Fixed-width numeric codec.
///
/// Decoding reads the leading `N::WIDTH` bytes in byte order `O` and ignores
/// any trailing bytes; a shorter buffer decodes to `None`. Encoding writes
/// exactly `N::WIDTH` bytes. The default order is the host's, which is the
/// format other native tools use for raw numeric attributes.
pub struct Numeric<N, O = NativeEndian>(PhantomData<fn() -> (N, O)>);

impl<N: Number, O: Endianness> Codec for Numeric<N, O> {
    type Value = N;

    fn decode(bytes: &[u8]) -> Option<N> {
        if bytes.len() < N::WIDTH {
            return None;
        }
        let mut src = bytes;
        Some(N::get(&mut src, O::ORDER))
    }

    fn encode(value: &N) -> Option<Bytes> {
        let mut dst = BytesMut::with_capacity(N::WIDTH);
        value.put(&mut dst, O::ORDER);
        Some(dst.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<N: Number + PartialEq + std::fmt::Debug, O: Endianness>(values: &[N]) {
        for &v in values {
            let encoded = Numeric::<N, O>::encode(&v).unwrap();
            assert_eq!(encoded.len(), N::WIDTH);
            assert_eq!(Numeric::<N, O>::decode(&encoded), Some(v));
        }
    }

    #[test]
    fn integer_roundtrip_native() {
        roundtrip::<u8, NativeEndian>(&[0, 1, u8::MAX]);
        roundtrip::<i8, NativeEndian>(&[i8::MIN, -1, 0, i8::MAX]);
        roundtrip::<u16, NativeEndian>(&[0, 0x1234, u16::MAX]);
        roundtrip::<i16, NativeEndian>(&[i16::MIN, -2, i16::MAX]);
        roundtrip::<u32, NativeEndian>(&[0, 0xdead_beef, u32::MAX]);
        roundtrip::<i32, NativeEndian>(&[i32::MIN, -42, i32::MAX]);
        roundtrip::<u64, NativeEndian>(&[0, 0x0123_4567_89ab_cdef, u64::MAX]);
        roundtrip::<i64, NativeEndian>(&[i64::MIN, -7, i64::MAX]);
        roundtrip::<usize, NativeEndian>(&[0, 12345, usize::MAX]);
        roundtrip::<isize, NativeEndian>(&[isize::MIN, -1, isize::MAX]);
    }

    #[test]
    fn float_roundtrip_native() {
        roundtrip::<f32, NativeEndian>(&[0.0, -1.5, f32::MAX, f32::MIN_POSITIVE]);
        roundtrip::<f64, NativeEndian>(&[0.0, std::f64::consts::PI, f64::MIN, f64::INFINITY]);
    }

    #[test]
    fn nan_keeps_bits() {
        let encoded = Numeric::<f64>::encode(&f64::NAN).unwrap();
        let decoded = Numeric::<f64>::decode(&encoded).unwrap();
        assert_eq!(decoded.to_bits(), f64::NAN.to_bits());
    }

    #[test]
    fn explicit_orders_are_fixed() {
        let le = Numeric::<u32, LittleEndian>::encode(&0x0102_0304).unwrap();
        assert_eq!(le.as_ref(), &[0x04, 0x03, 0x02, 0x01]);

        let be = Numeric::<u32, BigEndian>::encode(&0x0102_0304).unwrap();
        assert_eq!(be.as_ref(), &[0x01, 0x02, 0x03, 0x04]);

        let native = Numeric::<u32>::encode(&0x0102_0304).unwrap();
        assert_eq!(native.as_ref(), &0x0102_0304u32.to_ne_bytes());
    }

    #[test]
    fn short_buffer_is_none() {
        assert_eq!(Numeric::<u32>::decode(&[1, 2, 3]), None);
        assert_eq!(Numeric::<u64, BigEndian>::decode(&[0; 7]), None);
        assert_eq!(Numeric::<u8>::decode(&[]), None);
        assert_eq!(Numeric::<f32>::decode(&[0; 2]), None);
    }

    #[test]
    fn pointer_sized_matches_host_width() {
        assert_eq!(<usize as Number>::WIDTH, std::mem::size_of::<usize>());
        assert_eq!(<isize as Number>::WIDTH, std::mem::size_of::<isize>());

        let encoded = Numeric::<isize, BigEndian>::encode(&-2).unwrap();
        assert_eq!(encoded.as_ref(), &(-2isize).to_be_bytes());
        assert_eq!(Numeric::<isize, BigEndian>::decode(&encoded), Some(-2));
    }

    #[test]
    fn trailing_bytes_ignored() {
        let decoded = Numeric::<u16, BigEndian>::decode(&[0xab, 0xcd, 0xee, 0xff]);
        assert_eq!(decoded, Some(0xabcd));
    }
}
