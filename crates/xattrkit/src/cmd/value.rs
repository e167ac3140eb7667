use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use xattrkit_codec::{
    Codec, Number, Numeric, Raw, Text, TextEncoding, Utf16Be, Utf16Le, Utf32Be, Utf32Le, Utf8,
};
use xattrkit_os::{Result, XattrOptions};
use xattrkit_store::{SetOutcome, Xattr};

/// Codec selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CodecKind {
    /// Raw bytes, shown and given as hex.
    Bytes,
    Utf8,
    Utf16le,
    Utf16be,
    Utf32le,
    Utf32be,
    U8,
    U16,
    U32,
    U64,
    Usize,
    I8,
    I16,
    I32,
    I64,
    Isize,
    F32,
    F64,
}

/// A codec whose values can be typed in and printed as text.
pub trait CliCodec: Codec {
    fn render(value: &Self::Value) -> String;
    fn parse(input: &str) -> std::result::Result<Self::Value, String>;
}

impl CliCodec for Raw {
    fn render(value: &Vec<u8>) -> String {
        hex::encode(value)
    }

    fn parse(input: &str) -> std::result::Result<Vec<u8>, String> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        hex::decode(digits).map_err(|err| format!("invalid hex value {input:?}: {err}"))
    }
}

impl<E: TextEncoding> CliCodec for Text<E> {
    fn render(value: &String) -> String {
        value.clone()
    }

    fn parse(input: &str) -> std::result::Result<String, String> {
        Ok(input.to_string())
    }
}

impl<N> CliCodec for Numeric<N>
where
    N: Number + Display + FromStr,
    N::Err: Display,
{
    fn render(value: &N) -> String {
        value.to_string()
    }

    fn parse(input: &str) -> std::result::Result<N, String> {
        input
            .trim()
            .parse()
            .map_err(|err| format!("invalid number {input:?}: {err}"))
    }
}

/// Call a generic function with the codec named by a [`CodecKind`].
macro_rules! with_codec {
    ($kind:expr, $func:ident($($arg:expr),* $(,)?)) => {
        match $kind {
            CodecKind::Bytes => $func::<Raw>($($arg),*),
            CodecKind::Utf8 => $func::<Text<Utf8>>($($arg),*),
            CodecKind::Utf16le => $func::<Text<Utf16Le>>($($arg),*),
            CodecKind::Utf16be => $func::<Text<Utf16Be>>($($arg),*),
            CodecKind::Utf32le => $func::<Text<Utf32Le>>($($arg),*),
            CodecKind::Utf32be => $func::<Text<Utf32Be>>($($arg),*),
            CodecKind::U8 => $func::<Numeric<u8>>($($arg),*),
            CodecKind::U16 => $func::<Numeric<u16>>($($arg),*),
            CodecKind::U32 => $func::<Numeric<u32>>($($arg),*),
            CodecKind::U64 => $func::<Numeric<u64>>($($arg),*),
            CodecKind::Usize => $func::<Numeric<usize>>($($arg),*),
            CodecKind::I8 => $func::<Numeric<i8>>($($arg),*),
            CodecKind::I16 => $func::<Numeric<i16>>($($arg),*),
            CodecKind::I32 => $func::<Numeric<i32>>($($arg),*),
            CodecKind::I64 => $func::<Numeric<i64>>($($arg),*),
            CodecKind::Isize => $func::<Numeric<isize>>($($arg),*),
            CodecKind::F32 => $func::<Numeric<f32>>($($arg),*),
            CodecKind::F64 => $func::<Numeric<f64>>($($arg),*),
        }
    };
}

/// Read `key` and render it; `Ok(None)` for an empty or undecodable value.
pub fn read(kind: CodecKind, path: &Path, key: &str, options: XattrOptions) -> Result<Option<String>> {
    fn read_as<C: CliCodec>(path: &Path, key: &str, options: XattrOptions) -> Result<Option<String>> {
        Ok(Xattr::<C>::get(key, path, options)?.map(|v| C::render(&v)))
    }
    with_codec!(kind, read_as(path, key, options))
}

/// Parse `input` with the codec and write it. The outer error is a parse
/// failure, the inner one an OS failure.
pub fn write(
    kind: CodecKind,
    path: &Path,
    key: &str,
    input: &str,
    options: XattrOptions,
) -> std::result::Result<Result<SetOutcome>, String> {
    fn write_as<C: CliCodec>(
        path: &Path,
        key: &str,
        input: &str,
        options: XattrOptions,
    ) -> std::result::Result<Result<SetOutcome>, String> {
        let value = C::parse(input)?;
        Ok(Xattr::<C>::set(key, &value, path, options))
    }
    with_codec!(kind, write_as(path, key, input, options))
}

/// Every attribute that decodes with the codec, rendered and sorted by name.
pub fn dump(kind: CodecKind, path: &Path, options: XattrOptions) -> Result<BTreeMap<String, String>> {
    fn dump_as<C: CliCodec>(path: &Path, options: XattrOptions) -> Result<BTreeMap<String, String>> {
        Ok(Xattr::<C>::attributes(path, options)?
            .iter()
            .map(|(k, v)| (k.clone(), C::render(v)))
            .collect())
    }
    with_codec!(kind, dump_as(path, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let bytes = Raw::parse("00ff10").unwrap();
        assert_eq!(bytes, vec![0x00, 0xff, 0x10]);
        assert_eq!(Raw::render(&bytes), "00ff10");
        assert_eq!(Raw::parse("0xAB").unwrap(), vec![0xab]);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Raw::parse("abc").is_err());
        assert!(Raw::parse("zz").is_err());
        assert!(Raw::parse("é0").is_err());
        assert!(Raw::parse("0x").unwrap().is_empty());
    }

    #[test]
    fn numbers_parse_per_width() {
        assert_eq!(Numeric::<u8>::parse("255").unwrap(), 255);
        assert!(Numeric::<u8>::parse("256").is_err());
        assert_eq!(Numeric::<i64>::parse(" -9 ").unwrap(), -9);
        assert_eq!(Numeric::<f32>::parse("1.5").unwrap(), 1.5);
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(Text::<Utf16Le>::parse(" a b ").unwrap(), " a b ");
    }
}
