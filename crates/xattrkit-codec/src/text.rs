use std::marker::PhantomData;

use bytes::{Bytes, BytesMut};

use crate::codec::Codec;
use crate::numeric::{BigEndian, Endianness, LittleEndian, Number};

/// A text encoding usable with [`Text`].
pub trait TextEncoding {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Validate and decode; `None` on any invalid sequence.
    fn decode(bytes: &[u8]) -> Option<String>;

    fn encode(text: &str) -> Bytes;
}

/// String codec for encoding `E`.
pub struct Text<E>(PhantomData<fn() -> E>);

impl<E: TextEncoding> Codec for Text<E> {
    type Value = String;

    fn decode(bytes: &[u8]) -> Option<String> {
        E::decode(bytes)
    }

    fn encode(value: &String) -> Option<Bytes> {
        Some(E::encode(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl TextEncoding for Utf8 {
    const NAME: &'static str = "utf-8";

    fn decode(bytes: &[u8]) -> Option<String> {
        std::str::from_utf8(bytes).ok().map(str::to_owned)
    }

    fn encode(text: &str) -> Bytes {
        Bytes::copy_from_slice(text.as_bytes())
    }
}

/// UTF-16 in byte order `O`. The order is fixed by the type, so no
/// byte-order mark is written and a leading U+FEFF decodes as text.
pub struct Utf16<O>(PhantomData<fn() -> O>);

pub type Utf16Le = Utf16<LittleEndian>;
pub type Utf16Be = Utf16<BigEndian>;

impl<O: Endianness> TextEncoding for Utf16<O> {
    const NAME: &'static str = "utf-16";

    fn decode(mut bytes: &[u8]) -> Option<String> {
        if bytes.len() % 2 != 0 {
            return None;
        }
        let mut units = Vec::with_capacity(bytes.len() / 2);
        while !bytes.is_empty() {
            units.push(u16::get(&mut bytes, O::ORDER));
        }
        char::decode_utf16(units)
            .collect::<Result<String, _>>()
            .ok()
    }

    fn encode(text: &str) -> Bytes {
        let mut dst = BytesMut::with_capacity(text.len() * 2);
        for unit in text.encode_utf16() {
            unit.put(&mut dst, O::ORDER);
        }
        dst.freeze()
    }
}

/// UTF-32 in byte order `O`. Like [`Utf16`], U+FEFF is ordinary text.
pub struct Utf32<O>(PhantomData<fn() -> O>);

pub type Utf32Le = Utf32<LittleEndian>;
pub type Utf32Be = Utf32<BigEndian>;

impl<O: Endianness> TextEncoding for Utf32<O> {
    const NAME: &'static str = "utf-32";

    fn decode(mut bytes: &[u8]) -> Option<String> {
        if bytes.len() % 4 != 0 {
            return None;
        }
        let mut text = String::with_capacity(bytes.len() / 4);
        while !bytes.is_empty() {
            let scalar = u32::get(&mut bytes, O::ORDER);
            text.push(char::from_u32(scalar)?);
        }
        Some(text)
    }

    fn encode(text: &str) -> Bytes {
        let mut dst = BytesMut::with_capacity(text.len() * 4);
        for ch in text.chars() {
            u32::from(ch).put(&mut dst, O::ORDER);
        }
        dst.freeze()
    }
}
