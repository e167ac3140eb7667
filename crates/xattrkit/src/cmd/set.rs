use tracing::info;
use xattrkit_store::SetOutcome;

use crate::cmd::{codec_name, value, SetArgs};
use crate::exit::{xattr_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};

pub fn run(args: SetArgs) -> CliResult<i32> {
    let outcome = value::write(
        args.codec,
        &args.path,
        &args.key,
        &args.value,
        args.options(),
    )
    .map_err(|err| CliError::new(USAGE, err))?
    .map_err(|err| xattr_error(&format!("set {}", args.key), err))?;

    match outcome {
        SetOutcome::Written => {
            info!(path = %args.path.display(), key = %args.key, "attribute written");
            Ok(SUCCESS)
        }
        SetOutcome::Skipped => Err(CliError::new(
            DATA_INVALID,
            format!(
                "set {}: value cannot be encoded as {}",
                args.key,
                codec_name(args.codec)
            ),
        )),
    }
}
