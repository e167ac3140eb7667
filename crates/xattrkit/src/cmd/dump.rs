use crate::cmd::{codec_name, value, DumpArgs};
use crate::exit::{xattr_error, CliResult, SUCCESS};
use crate::output::{print_dump, OutputFormat};

pub fn run(args: DumpArgs, format: OutputFormat) -> CliResult<i32> {
    let attributes = value::dump(args.codec, &args.path, args.flags.options())
        .map_err(|err| xattr_error(&format!("dump {}", args.path.display()), err))?;

    print_dump(
        &args.path.display().to_string(),
        &codec_name(args.codec),
        &attributes,
        format,
    );
    Ok(SUCCESS)
}
