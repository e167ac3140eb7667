//! Typed, codec-driven access to filesystem extended attributes.
//!
//! xattrkit stores and retrieves strongly-typed values (raw bytes, fixed-width
//! numbers, strings in several Unicode encodings) under named attributes on a
//! path or open file, with every OS failure reported as a typed error.
//!
//! # Crate Structure
//!
//! - [`os`]: Native primitives, option flags, errno mapping and limits
//! - [`codec`]: Value codecs between typed values and attribute bytes
//! - [`store`]: Typed get/set/remove/list/dump over a chosen codec
//!
//! The most used items are also re-exported at the top level.

/// Re-export OS layer types.
pub mod os {
    pub use xattrkit_os::*;
}

/// Re-export codec types.
pub mod codec {
    pub use xattrkit_codec::*;
}

/// Re-export store types.
pub mod store {
    pub use xattrkit_store::*;
}

pub use xattrkit_codec::{Codec, Numeric, Raw, Text, Utf16Be, Utf16Le, Utf32Be, Utf32Le, Utf8};
pub use xattrkit_os::{Result, Target, XattrError, XattrOptions};
pub use xattrkit_store::{SetOutcome, Xattr};
