use std::fmt;

use xattrkit_os::XattrError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const NOT_FOUND: i32 = 2;
pub const HEALTH_CHECK_FAILED: i32 = 30;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const UNSUPPORTED: i32 = 69;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn xattr_error(context: &str, err: XattrError) -> CliError {
    let code = match err {
        XattrError::NoAttribute => NOT_FOUND,
        XattrError::Permission | XattrError::AccessDenied | XattrError::ReadOnlyFilesystem => {
            PERMISSION_DENIED
        }
        XattrError::NotSupported => UNSUPPORTED,
        XattrError::AlreadyExists
        | XattrError::ValueTooBig
        | XattrError::NameTooLong
        | XattrError::Invalid => DATA_INVALID,
        XattrError::Unknown(_) if is_missing_file(err) => NOT_FOUND,
        XattrError::Range | XattrError::NoSpace | XattrError::Io => FAILURE,
        _ => INTERNAL,
    };
    let detail = err.message().unwrap_or_else(|| err.to_string());
    CliError::new(code, format!("{context}: {detail}"))
}

/// A missing file reads the same as a missing attribute to a shell script.
fn is_missing_file(err: XattrError) -> bool {
    std::io::Error::from(err).kind() == std::io::ErrorKind::NotFound
}
