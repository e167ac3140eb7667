//! Value codecs for extended attributes.
//!
//! An attribute stores an untyped byte string. A [`Codec`] gives it a type:
//! - [`Raw`] passes bytes through unchanged
//! - [`Numeric`] stores fixed-width integers and floats in a chosen byte order
//! - [`Text`] stores strings as UTF-8, UTF-16 or UTF-32
//!
//! Codecs never fail loudly: a value that cannot be decoded or encoded
//! yields `None` and the caller decides what that means.

pub mod codec;
pub mod numeric;
pub mod text;

pub use codec::{Codec, Raw};
pub use numeric::{BigEndian, ByteOrder, Endianness, LittleEndian, NativeEndian, Number, Numeric};
pub use text::{Text, TextEncoding, Utf16, Utf16Be, Utf16Le, Utf32, Utf32Be, Utf32Le, Utf8};
