use std::path::{Path, PathBuf};

use serde::Serialize;
use xattrkit_codec::Raw;
use xattrkit_os::{XattrError, XattrOptions, PATH_MAX, XATTR_NAME_MAX};
use xattrkit_store::Xattr;

use crate::cmd::DoctorArgs;
use crate::exit::{CliResult, HEALTH_CHECK_FAILED, SUCCESS};
use crate::output::{print_json, OutputFormat};

const PROBE_KEY: &str = "user.xattrkit.doctor";

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Pass,
    Fail,
    Warn,
    Info,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    detail: String,
}

#[derive(Debug, Serialize)]
struct DoctorOutput {
    checks: Vec<CheckResult>,
    overall: &'static str,
}

pub fn run(_args: DoctorArgs, format: OutputFormat) -> CliResult<i32> {
    let mut checks = vec![platform_check(), limits_check()];

    match probe_file() {
        Ok(probe) => {
            checks.push(CheckResult {
                name: "temp_dir_writable".to_string(),
                status: CheckStatus::Pass,
                detail: format!("created {}", probe.display()),
            });
            checks.push(xattr_support_check(&probe));
            let _ = std::fs::remove_file(&probe);
        }
        Err(err) => checks.push(CheckResult {
            name: "temp_dir_writable".to_string(),
            status: CheckStatus::Fail,
            detail: err.to_string(),
        }),
    }

    let has_fail = checks.iter().any(|c| matches!(c.status, CheckStatus::Fail));
    let output = DoctorOutput {
        checks,
        overall: if has_fail { "fail" } else { "pass" },
    };

    print_doctor(&output, format);

    if has_fail {
        Ok(HEALTH_CHECK_FAILED)
    } else {
        Ok(SUCCESS)
    }
}

fn print_doctor(output: &DoctorOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(output),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("xattrkit doctor\n");
            for c in &output.checks {
                println!(
                    "  [{:>4}] {:<20} {}",
                    status_text(c.status),
                    c.name,
                    c.detail
                );
            }
            if output.overall == "pass" {
                println!("\n  Result: all checks passed");
            } else {
                println!("\n  Result: one or more checks failed");
            }
        }
        OutputFormat::Raw => {
            println!("{}", output.overall);
        }
    }
}

fn status_text(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "PASS",
        CheckStatus::Fail => "FAIL",
        CheckStatus::Warn => "WARN",
        CheckStatus::Info => "INFO",
    }
}

fn platform_check() -> CheckResult {
    let api = if cfg!(target_vendor = "apple") {
        "Darwin getxattr family"
    } else {
        "Linux getxattr family"
    };
    CheckResult {
        name: "platform".to_string(),
        status: CheckStatus::Pass,
        detail: format!("{} ({api})", std::env::consts::OS),
    }
}

fn limits_check() -> CheckResult {
    CheckResult {
        name: "limits".to_string(),
        status: CheckStatus::Info,
        detail: format!("name max {XATTR_NAME_MAX} bytes, path max {PATH_MAX} bytes"),
    }
}

fn probe_file() -> std::io::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("xattrkit-doctor-{}", std::process::id()));
    std::fs::write(&path, b"probe")?;
    Ok(path)
}

fn xattr_support_check(path: &Path) -> CheckResult {
    let status = match roundtrip(path) {
        Ok(true) => (CheckStatus::Pass, "set/get/remove round-trip ok".to_string()),
        Ok(false) => (
            CheckStatus::Fail,
            "value read back differs from value written".to_string(),
        ),
        Err(XattrError::NotSupported | XattrError::Permission) => (
            CheckStatus::Warn,
            format!(
                "filesystem of {} does not support user attributes",
                path.display()
            ),
        ),
        Err(err) => (CheckStatus::Fail, err.to_string()),
    };
    CheckResult {
        name: "xattr_support".to_string(),
        status: status.0,
        detail: status.1,
    }
}

fn roundtrip(path: &Path) -> xattrkit_os::Result<bool> {
    let value = b"doctor".to_vec();
    let opts = XattrOptions::empty();
    let _ = Xattr::<Raw>::set(PROBE_KEY, &value, path, opts)?;
    let read = Xattr::<Raw>::get(PROBE_KEY, path, opts)?;
    Xattr::<Raw>::remove(PROBE_KEY, path, opts)?;
    Ok(read.as_ref() == Some(&value))
}
