//! The eight native attribute primitives: get, set, remove and list, each in
//! a path flavor and a descriptor flavor.
//!
//! Every function here narrows its options to the subset legal for its call
//! kind, issues exactly one system call and reports failure as
//! [`XattrError`]. Nothing is retried.

use std::ffi::CString;
use std::os::fd::AsRawFd;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tracing::trace;

use crate::error::{Result, XattrError};
use crate::limits::XATTR_NAME_MAX;
use crate::options::{CallKind, XattrOptions};
use crate::target::Target;

/// Size of the value stored under `name`, or copy it into `buf`.
///
/// With `buf = None` the call only reports the current size. With a buffer,
/// the value is copied and its length returned; `Range` means the buffer is
/// too small (the value grew since it was sized).
pub fn get(
    target: Target<'_>,
    name: &str,
    buf: Option<&mut [u8]>,
    options: XattrOptions,
) -> Result<usize> {
    let options = narrow(CallKind::Get, target, options);
    let name = c_name(name)?;
    let (ptr, len) = raw_parts(buf);
    trace!(call = CallKind::Get.name(), target = target.flavor(), ?name, ?options, len);

    let rc = match target {
        Target::Path(path) => {
            let path = c_path(path)?;
            // SAFETY: `path` and `name` are NUL-terminated and outlive the call;
            // `ptr` is either null with `len == 0` or valid for `len` bytes.
            unsafe { native::get_path(&path, &name, ptr, len, options) }
        }
        Target::Fd(fd) => {
            let fd = fd.as_raw_fd();
            // SAFETY: as above; `fd` is borrowed for the lifetime of `target`.
            unsafe { native::get_fd(fd, &name, ptr, len, options) }
        }
    };
    check_len(rc)
}

/// Store `value` under `name`.
pub fn set(target: Target<'_>, name: &str, value: &[u8], options: XattrOptions) -> Result<()> {
    let options = narrow(CallKind::Set, target, options);
    let name = c_name(name)?;
    trace!(call = CallKind::Set.name(), target = target.flavor(), ?name, ?options, len = value.len());

    let rc = match target {
        Target::Path(path) => {
            let path = c_path(path)?;
            // SAFETY: `value` is a live slice valid for `value.len()` bytes.
            unsafe { native::set_path(&path, &name, value, options) }
        }
        Target::Fd(fd) => {
            let fd = fd.as_raw_fd();
            // SAFETY: as above.
            unsafe { native::set_fd(fd, &name, value, options) }
        }
    };
    check_status(rc)
}

/// Delete the attribute `name`.
pub fn remove(target: Target<'_>, name: &str, options: XattrOptions) -> Result<()> {
    let options = narrow(CallKind::Remove, target, options);
    let name = c_name(name)?;
    trace!(call = CallKind::Remove.name(), target = target.flavor(), ?name, ?options);

    let rc = match target {
        Target::Path(path) => {
            let path = c_path(path)?;
            // SAFETY: both strings are NUL-terminated and outlive the call.
            unsafe { native::remove_path(&path, &name, options) }
        }
        Target::Fd(fd) => {
            let fd = fd.as_raw_fd();
            // SAFETY: as above.
            unsafe { native::remove_fd(fd, &name, options) }
        }
    };
    check_status(rc)
}

/// Size of the NUL-separated name list, or copy it into `buf`.
pub fn list(target: Target<'_>, buf: Option<&mut [u8]>, options: XattrOptions) -> Result<usize> {
    let options = narrow(CallKind::List, target, options);
    let (ptr, len) = raw_parts(buf);
    trace!(call = CallKind::List.name(), target = target.flavor(), ?options, len);

    let rc = match target {
        Target::Path(path) => {
            let path = c_path(path)?;
            // SAFETY: `ptr` is either null with `len == 0` or valid for `len` bytes.
            unsafe { native::list_path(&path, ptr, len, options) }
        }
        Target::Fd(fd) => {
            let fd = fd.as_raw_fd();
            // SAFETY: as above.
            unsafe { native::list_fd(fd, ptr, len, options) }
        }
    };
    check_len(rc)
}

/// Narrow `options` for `kind`. Symlink suppression means nothing for an
/// open descriptor (Darwin rejects it with `EINVAL`), so it is dropped there.
fn narrow(kind: CallKind, target: Target<'_>, options: XattrOptions) -> XattrOptions {
    let options = options.narrow(kind);
    match target {
        Target::Path(_) => options,
        Target::Fd(_) => options.difference(XattrOptions::NO_FOLLOW),
    }
}

fn c_name(name: &str) -> Result<CString> {
    if name.len() > XATTR_NAME_MAX {
        return Err(XattrError::NameTooLong);
    }
    CString::new(name).map_err(|_| XattrError::Invalid)
}

fn c_path(path: &Path) -> Result<CString> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| XattrError::Invalid)
}

fn raw_parts(buf: Option<&mut [u8]>) -> (*mut libc::c_void, usize) {
    match buf {
        Some(buf) => (buf.as_mut_ptr().cast(), buf.len()),
        None => (std::ptr::null_mut(), 0),
    }
}

fn check_len(rc: libc::ssize_t) -> Result<usize> {
    if rc < 0 {
        Err(XattrError::last_os_error())
    } else {
        Ok(rc as usize)
    }
}

fn check_status(rc: libc::c_int) -> Result<()> {
    if rc < 0 {
        Err(XattrError::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
mod native {
    use std::ffi::CStr;

    use libc::{c_int, c_void, ssize_t};

    use crate::options::XattrOptions;

    pub(super) unsafe fn get_path(
        path: &CStr,
        name: &CStr,
        ptr: *mut c_void,
        len: usize,
        options: XattrOptions,
    ) -> ssize_t {
        if options.contains(XattrOptions::NO_FOLLOW) {
            libc::lgetxattr(path.as_ptr(), name.as_ptr(), ptr, len)
        } else {
            libc::getxattr(path.as_ptr(), name.as_ptr(), ptr, len)
        }
    }

    pub(super) unsafe fn get_fd(
        fd: c_int,
        name: &CStr,
        ptr: *mut c_void,
        len: usize,
        _options: XattrOptions,
    ) -> ssize_t {
        libc::fgetxattr(fd, name.as_ptr(), ptr, len)
    }

    pub(super) unsafe fn set_path(
        path: &CStr,
        name: &CStr,
        value: &[u8],
        options: XattrOptions,
    ) -> c_int {
        let flags = options.to_native();
        let value_ptr = value.as_ptr().cast::<c_void>();
        if options.contains(XattrOptions::NO_FOLLOW) {
            libc::lsetxattr(path.as_ptr(), name.as_ptr(), value_ptr, value.len(), flags)
        } else {
            libc::setxattr(path.as_ptr(), name.as_ptr(), value_ptr, value.len(), flags)
        }
    }

    pub(super) unsafe fn set_fd(
        fd: c_int,
        name: &CStr,
        value: &[u8],
        options: XattrOptions,
    ) -> c_int {
        libc::fsetxattr(
            fd,
            name.as_ptr(),
            value.as_ptr().cast::<c_void>(),
            value.len(),
            options.to_native(),
        )
    }

    pub(super) unsafe fn remove_path(path: &CStr, name: &CStr, options: XattrOptions) -> c_int {
        if options.contains(XattrOptions::NO_FOLLOW) {
            libc::lremovexattr(path.as_ptr(), name.as_ptr())
        } else {
            libc::removexattr(path.as_ptr(), name.as_ptr())
        }
    }

    pub(super) unsafe fn remove_fd(fd: c_int, name: &CStr, _options: XattrOptions) -> c_int {
        libc::fremovexattr(fd, name.as_ptr())
    }

    pub(super) unsafe fn list_path(
        path: &CStr,
        ptr: *mut c_void,
        len: usize,
        options: XattrOptions,
    ) -> ssize_t {
        if options.contains(XattrOptions::NO_FOLLOW) {
            libc::llistxattr(path.as_ptr(), ptr.cast(), len)
        } else {
            libc::listxattr(path.as_ptr(), ptr.cast(), len)
        }
    }

    pub(super) unsafe fn list_fd(
        fd: c_int,
        ptr: *mut c_void,
        len: usize,
        _options: XattrOptions,
    ) -> ssize_t {
        libc::flistxattr(fd, ptr.cast(), len)
    }
}

#[cfg(target_vendor = "apple")]
mod native {
    use std::ffi::CStr;

    use libc::{c_int, c_void, ssize_t};

    use crate::options::XattrOptions;

    // Only resource forks use a non-zero position.
    const POSITION: u32 = 0;

    pub(super) unsafe fn get_path(
        path: &CStr,
        name: &CStr,
        ptr: *mut c_void,
        len: usize,
        options: XattrOptions,
    ) -> ssize_t {
        libc::getxattr(
            path.as_ptr(),
            name.as_ptr(),
            ptr,
            len,
            POSITION,
            options.to_native(),
        )
    }

    pub(super) unsafe fn get_fd(
        fd: c_int,
        name: &CStr,
        ptr: *mut c_void,
        len: usize,
        options: XattrOptions,
    ) -> ssize_t {
        libc::fgetxattr(fd, name.as_ptr(), ptr, len, POSITION, options.to_native())
    }

    pub(super) unsafe fn set_path(
        path: &CStr,
        name: &CStr,
        value: &[u8],
        options: XattrOptions,
    ) -> c_int {
        libc::setxattr(
            path.as_ptr(),
            name.as_ptr(),
            value.as_ptr().cast::<c_void>(),
            value.len(),
            POSITION,
            options.to_native(),
        )
    }

    pub(super) unsafe fn set_fd(
        fd: c_int,
        name: &CStr,
        value: &[u8],
        options: XattrOptions,
    ) -> c_int {
        libc::fsetxattr(
            fd,
            name.as_ptr(),
            value.as_ptr().cast::<c_void>(),
            value.len(),
            POSITION,
            options.to_native(),
        )
    }

    pub(super) unsafe fn remove_path(path: &CStr, name: &CStr, options: XattrOptions) -> c_int {
        libc::removexattr(path.as_ptr(), name.as_ptr(), options.to_native())
    }

    pub(super) unsafe fn remove_fd(fd: c_int, name: &CStr, options: XattrOptions) -> c_int {
        libc::fremovexattr(fd, name.as_ptr(), options.to_native())
    }

    pub(super) unsafe fn list_path(
        path: &CStr,
        ptr: *mut c_void,
        len: usize,
        options: XattrOptions,
    ) -> ssize_t {
        libc::listxattr(path.as_ptr(), ptr.cast(), len, options.to_native())
    }

    pub(super) unsafe fn list_fd(
        fd: c_int,
        ptr: *mut c_void,
        len: usize,
        options: XattrOptions,
    ) -> ssize_t {
        libc::flistxattr(fd, ptr.cast(), len, options.to_native())
    }
}
