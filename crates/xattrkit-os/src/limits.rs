//! Platform limits for attribute names, values and paths.

/// Maximum attribute name length in bytes, namespace prefix included.
#[cfg(target_vendor = "apple")]
pub const XATTR_NAME_MAX: usize = 127;
#[cfg(not(target_vendor = "apple"))]
pub const XATTR_NAME_MAX: usize = 255;

/// Largest value the Linux VFS accepts for one attribute.
///
/// Darwin has no fixed cap (resource forks may be much larger); this is only
/// a hint there.
pub const XATTR_SIZE_MAX: usize = 65536;

/// Maximum length of a single path component.
pub const NAME_MAX: usize = 255;

/// Maximum length of a full path.
pub const PATH_MAX: usize = libc::PATH_MAX as usize;
