use crate::cmd::{codec_name, value, GetArgs};
use crate::exit::{xattr_error, CliResult, SUCCESS};
use crate::output::{print_value, OutputFormat};

pub fn run(args: GetArgs, format: OutputFormat) -> CliResult<i32> {
    let rendered = value::read(args.codec, &args.path, &args.key, args.flags.options())
        .map_err(|err| xattr_error(&format!("get {}", args.key), err))?;

    print_value(
        &args.path.display().to_string(),
        &args.key,
        &codec_name(args.codec),
        rendered.as_deref(),
        format,
    );
    Ok(SUCCESS)
}
