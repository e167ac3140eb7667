use clap::{Args, Subcommand};
use std::path::PathBuf;

use xattrkit_os::XattrOptions;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod doctor;
pub mod dump;
pub mod get;
pub mod list;
pub mod remove;
pub mod set;
pub mod value;
pub mod version;

use value::CodecKind;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one attribute.
    Get(GetArgs),
    /// Write one attribute.
    Set(SetArgs),
    /// Delete one attribute.
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// List attribute names.
    List(ListArgs),
    /// Print every attribute decoded with one codec.
    Dump(DumpArgs),
    /// Check whether the local filesystem supports user attributes.
    Doctor(DoctorArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Get(args) => get::run(args, format),
        Command::Set(args) => set::run(args),
        Command::Remove(args) => remove::run(args),
        Command::List(args) => list::run(args, format),
        Command::Dump(args) => dump::run(args, format),
        Command::Doctor(args) => doctor::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Flags shared by the read-side commands.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct ReadFlags {
    /// Act on a symbolic link itself rather than its target.
    #[arg(long)]
    pub no_follow: bool,
    /// Include attributes used internally by compressed files (macOS).
    #[arg(long)]
    pub show_compression: bool,
}

impl ReadFlags {
    pub fn options(self) -> XattrOptions {
        let mut options = XattrOptions::empty();
        options.set(XattrOptions::NO_FOLLOW, self.no_follow);
        options.set(XattrOptions::SHOW_COMPRESSION, self.show_compression);
        options
    }
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// File to read from.
    pub path: PathBuf,
    /// Attribute name (e.g. user.comment).
    pub key: String,
    /// How to decode the value.
    #[arg(long, short = 'c', value_enum, default_value = "utf8")]
    pub codec: CodecKind,
    #[command(flatten)]
    pub flags: ReadFlags,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// File to write to.
    pub path: PathBuf,
    /// Attribute name (e.g. user.comment).
    pub key: String,
    /// Value to store, interpreted by --codec (hex for bytes).
    pub value: String,
    /// How to encode the value.
    #[arg(long, short = 'c', value_enum, default_value = "utf8")]
    pub codec: CodecKind,
    /// Fail if the attribute already exists.
    #[arg(long)]
    pub create: bool,
    /// Fail if the attribute does not exist yet.
    #[arg(long)]
    pub replace: bool,
    /// Act on a symbolic link itself rather than its target.
    #[arg(long)]
    pub no_follow: bool,
}

impl SetArgs {
    pub fn options(&self) -> XattrOptions {
        let mut options = XattrOptions::empty();
        options.set(XattrOptions::NO_FOLLOW, self.no_follow);
        options.set(XattrOptions::CREATE, self.create);
        options.set(XattrOptions::REPLACE, self.replace);
        options
    }
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// File to remove from.
    pub path: PathBuf,
    /// Attribute name.
    pub key: String,
    #[command(flatten)]
    pub flags: ReadFlags,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// File to list.
    pub path: PathBuf,
    #[command(flatten)]
    pub flags: ReadFlags,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// File to dump.
    pub path: PathBuf,
    /// How to decode every value. Values that do not decode are left out.
    #[arg(long, short = 'c', value_enum, default_value = "utf8")]
    pub codec: CodecKind,
    #[command(flatten)]
    pub flags: ReadFlags,
}

#[derive(Args, Debug, Default)]
pub struct DoctorArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Name of a codec as accepted by `--codec`.
pub fn codec_name(kind: CodecKind) -> String {
    use clap::ValueEnum;

    kind.to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| format!("{kind:?}"))
}
