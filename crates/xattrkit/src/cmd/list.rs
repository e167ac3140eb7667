use xattrkit_codec::Raw;
use xattrkit_store::Xattr;

use crate::cmd::ListArgs;
use crate::exit::{xattr_error, CliResult, SUCCESS};
use crate::output::{print_keys, OutputFormat};

pub fn run(args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    let mut keys = Xattr::<Raw>::keys(&args.path, args.flags.options())
        .map_err(|err| xattr_error(&format!("list {}", args.path.display()), err))?;
    keys.sort();

    print_keys(&args.path.display().to_string(), &keys, format);
    Ok(SUCCESS)
}
