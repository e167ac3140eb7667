//! Typed extended attribute access.
//!
//! This is the layer most callers use. Pick a codec, then get, set, remove,
//! list or dump attributes on a path or an open file:
//!
//! ```no_run
//! use std::fs::File;
//!
//! use xattrkit_codec::{Raw, Text, Utf16Le};
//! use xattrkit_os::XattrOptions;
//! use xattrkit_store::Xattr;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("notes.txt")?;
//! let title = Xattr::<Text<Utf16Le>>::get("user.title", &file, XattrOptions::empty())?;
//! let all = Xattr::<Raw>::attributes(&file, XattrOptions::NO_FOLLOW)?;
//! # let _ = (title, all);
//! # Ok(())
//! # }
//! ```

pub mod store;

pub use store::{SetOutcome, Xattr};
pub use xattrkit_os::{Result, XattrError};
