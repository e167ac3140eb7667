use bitflags::bitflags;

bitflags! {
    /// Per-call modifiers for the attribute primitives.
    ///
    /// Each call kind accepts only a subset; the `for_*` methods narrow a set
    /// to that subset and everything else is dropped without error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct XattrOptions: u32 {
        /// Operate on a symbolic link itself instead of its target.
        const NO_FOLLOW        = 0x0001;
        /// Expose the attributes a compressed file uses internally (Darwin).
        const SHOW_COMPRESSION = 0x0002;
        /// Fail with `AlreadyExists` if the attribute is already present.
        const CREATE           = 0x0004;
        /// Fail with `NoAttribute` if the attribute is not present.
        const REPLACE          = 0x0008;
    }
}

/// The four primitive call kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Get,
    Set,
    Remove,
    List,
}

impl CallKind {
    /// Flags this call kind understands.
    pub const fn legal(self) -> XattrOptions {
        match self {
            CallKind::Get | CallKind::Remove | CallKind::List => {
                XattrOptions::NO_FOLLOW.union(XattrOptions::SHOW_COMPRESSION)
            }
            CallKind::Set => XattrOptions::NO_FOLLOW
                .union(XattrOptions::CREATE)
                .union(XattrOptions::REPLACE),
        }
    }

    /// Lowercase name of the call, as used in log events.
    pub fn name(self) -> &'static str {
        match self {
            CallKind::Get => "get",
            CallKind::Set => "set",
            CallKind::Remove => "remove",
            CallKind::List => "list",
        }
    }
}

impl XattrOptions {
    /// Narrow to the flags legal for `kind`.
    pub const fn narrow(self, kind: CallKind) -> Self {
        self.intersection(kind.legal())
    }

    /// Narrow to the flags legal for a get call.
    pub const fn for_get(self) -> Self {
        self.narrow(CallKind::Get)
    }

    /// Narrow to the flags legal for a set call.
    pub const fn for_set(self) -> Self {
        self.narrow(CallKind::Set)
    }

    /// Narrow to the flags legal for a remove call.
    pub const fn for_remove(self) -> Self {
        self.narrow(CallKind::Remove)
    }

    /// Narrow to the flags legal for a list call.
    pub const fn for_list(self) -> Self {
        self.narrow(CallKind::List)
    }

    /// Translate to the `options` argument of the native call.
    ///
    /// On Linux symlink handling is expressed by choosing the `l*` primitive
    /// and compression visibility has no equivalent, so only the create and
    /// replace bits reach the kernel.
    pub(crate) fn to_native(self) -> libc::c_int {
        let mut native = 0;
        #[cfg(target_vendor = "apple")]
        {
            if self.contains(Self::NO_FOLLOW) {
                native |= libc::XATTR_NOFOLLOW;
            }
            if self.contains(Self::SHOW_COMPRESSION) {
                native |= libc::XATTR_SHOWCOMPRESSION;
            }
        }
        if self.contains(Self::CREATE) {
            native |= libc::XATTR_CREATE;
        }
        if self.contains(Self::REPLACE) {
            native |= libc::XATTR_REPLACE;
        }
        native
    }
}
