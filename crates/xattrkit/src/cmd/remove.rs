use tracing::info;
use xattrkit_codec::Raw;
use xattrkit_store::Xattr;

use crate::cmd::RemoveArgs;
use crate::exit::{xattr_error, CliResult, SUCCESS};

pub fn run(args: RemoveArgs) -> CliResult<i32> {
    Xattr::<Raw>::remove(&args.key, &args.path, args.flags.options())
        .map_err(|err| xattr_error(&format!("remove {}", args.key), err))?;
    info!(path = %args.path.display(), key = %args.key, "attribute removed");
    Ok(SUCCESS)
}
