use std::fs::File;
use std::os::fd::{AsFd, BorrowedFd};
use std::path::{Path, PathBuf};

/// The filesystem object an attribute call addresses.
///
/// A `Target` never owns what it points at: a path is borrowed, and a
/// descriptor is a [`BorrowedFd`] so the caller keeps it open for as long
/// as the target is in use.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Resolve by path on every call.
    Path(&'a Path),
    /// An already-open descriptor.
    Fd(BorrowedFd<'a>),
}

impl<'a> Target<'a> {
    pub fn path(path: &'a (impl AsRef<Path> + ?Sized)) -> Self {
        Target::Path(path.as_ref())
    }

    pub fn fd(fd: &'a impl AsFd) -> Self {
        Target::Fd(fd.as_fd())
    }

    /// Short name of the target flavor, for diagnostics.
    pub fn flavor(&self) -> &'static str {
        match self {
            Target::Path(_) => "path",
            Target::Fd(_) => "fd",
        }
    }
}

impl<'a> From<&'a Path> for Target<'a> {
    fn from(path: &'a Path) -> Self {
        Target::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for Target<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Target::Path(path.as_path())
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(path: &'a str) -> Self {
        Target::Path(Path::new(path))
    }
}

impl<'a> From<BorrowedFd<'a>> for Target<'a> {
    fn from(fd: BorrowedFd<'a>) -> Self {
        Target::Fd(fd)
    }
}

impl<'a> From<&'a File> for Target<'a> {
    fn from(file: &'a File) -> Self {
        Target::Fd(file.as_fd())
    }
}

#[cfg(test)]
mod tests {
    use std::os::fd::AsRawFd;

    use super::*;

    #[test]
    fn path_conversions() {
        let owned = PathBuf::from("/tmp/a");
        assert!(matches!(Target::from(&owned), Target::Path(p) if p == Path::new("/tmp/a")));
        assert!(matches!(Target::from("/tmp/b"), Target::Path(p) if p == Path::new("/tmp/b")));
        assert_eq!(Target::path("/tmp/c").flavor(), "path");
    }

    #[test]
    fn file_conversion_borrows_descriptor() {
        let file = File::open("/").expect("root should be openable");
        let target = Target::from(&file);
        assert_eq!(target.flavor(), "fd");
        match target {
            Target::Fd(fd) => assert_eq!(fd.as_raw_fd(), file.as_raw_fd()),
            Target::Path(_) => panic!("expected a descriptor target"),
        }
    }
}
