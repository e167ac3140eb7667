use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::debug;
use xattrkit_codec::Codec;
use xattrkit_os::{sys, Result, Target, XattrError, XattrOptions};

/// What a [`Xattr::set`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SetOutcome {
    /// The encoded value was handed to the OS and stored.
    Written,
    /// The codec could not encode the value. No OS call was made.
    Skipped,
}

impl SetOutcome {
    pub fn is_written(self) -> bool {
        self == SetOutcome::Written
    }
}

/// Typed access to the extended attributes of a file, through codec `C`.
///
/// `Xattr` is never constructed; every operation is an associated function
/// that goes straight to the OS. Targets are anything convertible into a
/// [`Target`]: paths (`&Path`, `&PathBuf`, `&str`) or borrowed descriptors
/// (`&File`, `BorrowedFd`). Options are narrowed to what each call accepts,
/// so passing e.g. [`XattrOptions::CREATE`] to [`get`](Xattr::get) is a no-op.
///
/// ```no_run
/// use xattrkit_codec::{Numeric, Text, Utf8};
/// use xattrkit_os::XattrOptions;
/// use xattrkit_store::Xattr;
///
/// # fn main() -> xattrkit_os::Result<()> {
/// let opts = XattrOptions::empty();
/// let _ = Xattr::<Text<Utf8>>::set("user.origin", &"camera".to_string(), "photo.jpg", opts)?;
/// let count = Xattr::<Numeric<u32>>::get("user.views", "photo.jpg", opts)?;
/// # let _ = count;
/// # Ok(())
/// # }
/// ```
pub struct Xattr<C>(PhantomData<fn() -> C>);

impl<C: Codec> Xattr<C> {
    /// Read and decode the attribute `key`.
    ///
    /// Returns `Ok(None)` when the stored value is empty or does not decode
    /// as `C::Value`. A missing attribute is `Err(XattrError::NoAttribute)`.
    ///
    /// The value is sized first and then copied in a second call; if it grows
    /// in between, the second call fails with [`XattrError::Range`] and that
    /// error is returned as is.
    pub fn get<'a>(
        key: &str,
        target: impl Into<Target<'a>>,
        options: XattrOptions,
    ) -> Result<Option<C::Value>> {
        let target = target.into();
        let options = options.for_get();
        let bytes = read_sized(|buf| sys::get(target, key, buf, options))?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(C::decode(&bytes))
    }

    /// Encode `value` and store it under `key`.
    ///
    /// [`XattrOptions::CREATE`] and [`XattrOptions::REPLACE`] make the write
    /// exclusive; with neither, the attribute is created or overwritten.
    pub fn set<'a>(
        key: &str,
        value: &C::Value,
        target: impl Into<Target<'a>>,
        options: XattrOptions,
    ) -> Result<SetOutcome> {
        let target = target.into();
        let Some(encoded) = C::encode(value) else {
            debug!(key, target = target.flavor(), "value not encodable; skipping write");
            return Ok(SetOutcome::Skipped);
        };
        sys::set(target, key, &encoded, options.for_set())?;
        Ok(SetOutcome::Written)
    }

    /// Delete the attribute `key`. Deleting a missing attribute is
    /// `Err(XattrError::NoAttribute)`.
    pub fn remove<'a>(
        key: &str,
        target: impl Into<Target<'a>>,
        options: XattrOptions,
    ) -> Result<()> {
        sys::remove(target.into(), key, options.for_remove())
    }

    /// Whether `key` exists, regardless of whether its value decodes.
    pub fn contains<'a>(
        key: &str,
        target: impl Into<Target<'a>>,
        options: XattrOptions,
    ) -> Result<bool> {
        match sys::get(target.into(), key, None, options.for_get()) {
            Ok(_) => Ok(true),
            Err(XattrError::NoAttribute) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Names of all attributes on the target, in the order the OS lists them.
    pub fn keys<'a>(target: impl Into<Target<'a>>, options: XattrOptions) -> Result<Vec<String>> {
        keys(target.into(), options)
    }

    /// Every attribute decoded through `C`.
    ///
    /// Attributes whose value is empty or does not decode are left out. The
    /// first OS error on any key fails the whole call.
    pub fn attributes<'a>(
        target: impl Into<Target<'a>>,
        options: XattrOptions,
    ) -> Result<HashMap<String, C::Value>> {
        let target = target.into();
        let mut out = HashMap::new();
        for key in keys(target, options)? {
            if let Some(value) = Self::get(&key, target, options)? {
                out.insert(key, value);
            }
        }
        Ok(out)
    }
}

fn keys(target: Target<'_>, options: XattrOptions) -> Result<Vec<String>> {
    let options = options.for_list();
    let names = read_sized(|buf| sys::list(target, buf, options))?;
    Ok(split_names(&names))
}

/// Query the size, allocate exactly that much and fill it.
fn read_sized(mut call: impl FnMut(Option<&mut [u8]>) -> Result<usize>) -> Result<Vec<u8>> {
    let size = call(None)?;
    if size == 0 {
        return Ok(Vec::new());
    }
    let mut buf = vec![0u8; size];
    let len = call(Some(&mut buf[..]))?;
    buf.truncate(len);
    Ok(buf)
}

/// Split a NUL-terminated name list. Empty segments are dropped, and so are
/// names that are not UTF-8 since they cannot be addressed by key.
fn split_names(list: &[u8]) -> Vec<String> {
    list.split(|b| *b == 0)
        .filter(|name| !name.is_empty())
        .filter_map(|name| match std::str::from_utf8(name) {
            Ok(name) => Some(name.to_owned()),
            Err(_) => {
                debug!(name = %String::from_utf8_lossy(name), "skipping non-UTF-8 attribute name");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_trailing_empty() {
        assert_eq!(split_names(b"user.a\0user.b\0"), vec!["user.a", "user.b"]);
    }

    #[test]
    fn split_handles_empty_and_unterminated() {
        assert!(split_names(b"").is_empty());
        assert!(split_names(b"\0\0").is_empty());
        assert_eq!(split_names(b"user.only"), vec!["user.only"]);
    }

    #[test]
    fn split_skips_invalid_utf8() {
        assert_eq!(split_names(b"user.\xff\0user.ok\0"), vec!["user.ok"]);
    }

    #[test]
    fn read_sized_zero_skips_fill() {
        let mut calls = 0;
        let out = read_sized(|buf| {
            calls += 1;
            assert!(buf.is_none());
            Ok(0)
        })
        .unwrap();
        assert!(out.is_empty());
        assert_eq!(calls, 1);
    }

    #[test]
    fn read_sized_truncates_to_fill_length() {
        let out = read_sized(|buf| match buf {
            None => Ok(8),
            Some(buf) => {
                assert_eq!(buf.len(), 8);
                buf[..3].copy_from_slice(b"abc");
                Ok(3)
            }
        })
        .unwrap();
        assert_eq!(out, b"abc");
    }

    #[test]
    fn read_sized_propagates_range() {
        let err = read_sized(|buf| match buf {
            None => Ok(4),
            Some(_) => Err(XattrError::Range),
        })
        .unwrap_err();
        assert_eq!(err, XattrError::Range);
    }
}
