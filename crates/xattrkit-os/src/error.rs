use std::ffi::CStr;

/// "No such attribute": `ENOATTR` on Darwin, `ENODATA` on Linux.
#[cfg(target_vendor = "apple")]
const ENOATTR: i32 = libc::ENOATTR;
#[cfg(not(target_vendor = "apple"))]
const ENOATTR: i32 = libc::ENODATA;

/// Errors reported by the extended attribute primitives.
///
/// One variant per errno the attribute calls are documented to return, plus
/// [`XattrError::Unknown`] carrying any other raw code unchanged. The mapping
/// is two-way: [`XattrError::from_code`] and [`XattrError::code`] are inverse
/// for every named variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum XattrError {
    /// The attribute does not exist.
    #[error("attribute not found")]
    NoAttribute,

    /// The filesystem does not support extended attributes, or they are disabled.
    #[error("extended attributes not supported")]
    NotSupported,

    /// The buffer was too small for the value or name list.
    #[error("result out of range")]
    Range,

    /// The operation is not permitted on this object or namespace.
    #[error("operation not permitted")]
    Permission,

    /// Invalid argument (bad flags, invalid name or an embedded NUL).
    #[error("invalid argument")]
    Invalid,

    /// The target is a directory and the namespace does not allow it.
    #[error("is a directory")]
    IsDirectory,

    /// A path component is not a directory.
    #[error("not a directory")]
    NotADirectory,

    /// The attribute name or a path component is too long.
    #[error("name too long")]
    NameTooLong,

    /// Search or read/write permission was denied.
    #[error("permission denied")]
    AccessDenied,

    /// Too many symbolic links were encountered resolving the path.
    #[error("too many levels of symbolic links")]
    SymlinkLoop,

    /// A pointer argument was invalid.
    #[error("bad address")]
    BadAddress,

    /// An I/O error occurred reading or writing the attribute store.
    #[error("input/output error")]
    Io,

    /// The attribute already exists and create-only was requested.
    #[error("attribute already exists")]
    AlreadyExists,

    /// The value exceeds what the filesystem allows for one attribute.
    #[error("attribute value too big")]
    ValueTooBig,

    /// Not enough space left to store the attribute.
    #[error("no space left on device")]
    NoSpace,

    /// The filesystem is mounted read-only.
    #[error("read-only filesystem")]
    ReadOnlyFilesystem,

    /// Any errno not listed above.
    #[error("unknown error (os error {0})")]
    Unknown(i32),
}

impl XattrError {
    /// Map a raw errno to its variant. Unlisted codes become [`XattrError::Unknown`].
    pub fn from_code(code: i32) -> Self {
        match code {
            ENOATTR => Self::NoAttribute,
            libc::ENOTSUP => Self::NotSupported,
            libc::ERANGE => Self::Range,
            libc::EPERM => Self::Permission,
            libc::EINVAL => Self::Invalid,
            libc::EISDIR => Self::IsDirectory,
            libc::ENOTDIR => Self::NotADirectory,
            libc::ENAMETOOLONG => Self::NameTooLong,
            libc::EACCES => Self::AccessDenied,
            libc::ELOOP => Self::SymlinkLoop,
            libc::EFAULT => Self::BadAddress,
            libc::EIO => Self::Io,
            libc::EEXIST => Self::AlreadyExists,
            libc::E2BIG => Self::ValueTooBig,
            libc::ENOSPC => Self::NoSpace,
            libc::EROFS => Self::ReadOnlyFilesystem,
            other => Self::Unknown(other),
        }
    }

    /// The raw errno this error corresponds to.
    pub fn code(&self) -> i32 {
        match *self {
            Self::NoAttribute => ENOATTR,
            Self::NotSupported => libc::ENOTSUP,
            Self::Range => libc::ERANGE,
            Self::Permission => libc::EPERM,
            Self::Invalid => libc::EINVAL,
            Self::IsDirectory => libc::EISDIR,
            Self::NotADirectory => libc::ENOTDIR,
            Self::NameTooLong => libc::ENAMETOOLONG,
            Self::AccessDenied => libc::EACCES,
            Self::SymlinkLoop => libc::ELOOP,
            Self::BadAddress => libc::EFAULT,
            Self::Io => libc::EIO,
            Self::AlreadyExists => libc::EEXIST,
            Self::ValueTooBig => libc::E2BIG,
            Self::NoSpace => libc::ENOSPC,
            Self::ReadOnlyFilesystem => libc::EROFS,
            Self::Unknown(code) => code,
        }
    }

    /// The platform's description of [`code`](Self::code), if it has one.
    pub fn message(&self) -> Option<String> {
        let mut buf = [0 as libc::c_char; 256];
        // SAFETY: `buf` is writable for `buf.len()` bytes; the XSI `strerror_r`
        // NUL-terminates within that length whenever it returns 0.
        let rc = unsafe { libc::strerror_r(self.code(), buf.as_mut_ptr(), buf.len()) };
        if rc != 0 {
            return None;
        }
        // SAFETY: see above, the buffer holds a NUL-terminated string.
        let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
        let text = text.to_string_lossy();
        if text.is_empty() {
            None
        } else {
            Some(text.into_owned())
        }
    }

    /// Capture `errno` after a failed primitive.
    pub fn last_os_error() -> Self {
        std::io::Error::last_os_error().into()
    }
}

impl From<XattrError> for std::io::Error {
    fn from(err: XattrError) -> Self {
        std::io::Error::from_raw_os_error(err.code())
    }
}

impl From<std::io::Error> for XattrError {
    fn from(err: std::io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) => Self::from_code(code),
            None => Self::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, XattrError>;
