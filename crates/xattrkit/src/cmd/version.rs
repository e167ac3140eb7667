use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("xattrkit {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: xattrkit");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target: {}", env!("XATTRKIT_BUILD_TARGET"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!("xattr_name_max: {}", xattrkit_os::XATTR_NAME_MAX);
    println!("path_max: {}", xattrkit_os::PATH_MAX);

    Ok(SUCCESS)
}
