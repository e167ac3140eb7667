//! Extended attribute primitives for Unix.
//!
//! This is the lowest layer of xattrkit: the native get/set/remove/list
//! calls in their path and descriptor flavors, the option flags each call
//! accepts, and the two-way mapping between errno and [`XattrError`].
//! Values are raw bytes here; typed access lives in `xattrkit-store`.

#[cfg(not(any(target_os = "linux", target_os = "android", target_vendor = "apple")))]
compile_error!("xattrkit supports Linux, Android and Apple platforms only");

pub mod error;
pub mod limits;
pub mod options;
pub mod sys;
pub mod target;

pub use error::{Result, XattrError};
pub use limits::{NAME_MAX, PATH_MAX, XATTR_NAME_MAX, XATTR_SIZE_MAX};
pub use options::{CallKind, XattrOptions};
pub use target::Target;
