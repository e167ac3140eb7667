#![cfg(all(unix, feature = "cli"))]

use std::path::PathBuf;
use std::process::{Command, Output};

use xattrkit::{Raw, Xattr, XattrError, XattrOptions};

fn unique_file(tag: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!(
        "xattrkit-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    let file = dir.join("subject");
    std::fs::write(&file, b"contents").expect("subject file should be writable");
    file
}

fn supports_xattrs(path: &PathBuf) -> bool {
    let probe = b"1".to_vec();
    match Xattr::<Raw>::set("user.xattrkit.probe", &probe, path, XattrOptions::empty()) {
        Ok(_) => {
            let _ = Xattr::<Raw>::remove("user.xattrkit.probe", path, XattrOptions::empty());
            true
        }
        Err(XattrError::NotSupported | XattrError::Permission) => {
            eprintln!("skipping: {} has no user xattr support", path.display());
            false
        }
        Err(err) => panic!("probe failed: {err}"),
    }
}

fn xattrkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xattrkit"))
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("xattrkit should run")
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn set_get_list_dump_remove() {
    let file = unique_file("flow");
    if !supports_xattrs(&file) {
        return;
    }
    let path = file.to_str().expect("temp path should be UTF-8");

    let out = xattrkit(&["set", path, "user.count", "42", "--codec", "u32"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let out = xattrkit(&["set", path, "user.note", "héllo"]);
    assert!(out.status.success());

    let out = xattrkit(&["--format", "json", "get", path, "user.count", "--codec", "u32"]);
    assert!(out.status.success());
    let payload = json(&out);
    assert_eq!(payload["value"], "42");
    assert_eq!(payload["codec"], "u32");

    let out = xattrkit(&["--format", "json", "list", path]);
    let keys = json(&out)["keys"].clone();
    let keys: Vec<String> = serde_json::from_value(keys).expect("keys should be strings");
    assert!(keys.contains(&"user.count".to_string()));
    assert!(keys.contains(&"user.note".to_string()));

    let out = xattrkit(&["--format", "json", "dump", path]);
    assert!(out.status.success());
    assert_eq!(json(&out)["attributes"]["user.note"], "héllo");

    let out = xattrkit(&["remove", path, "user.note"]);
    assert!(out.status.success());
    let out = xattrkit(&["get", path, "user.note"]);
    assert_eq!(out.status.code(), Some(2));

    let _ = std::fs::remove_dir_all(file.parent().expect("file has a parent"));
}

#[test]
fn create_conflict_exits_data_invalid() {
    let file = unique_file("create");
    if !supports_xattrs(&file) {
        return;
    }
    let path = file.to_str().expect("temp path should be UTF-8");

    assert!(xattrkit(&["set", path, "user.once", "a", "--create"]).status.success());
    let out = xattrkit(&["set", path, "user.once", "b", "--create"]);
    assert_eq!(out.status.code(), Some(60));

    let _ = std::fs::remove_dir_all(file.parent().expect("file has a parent"));
}

#[test]
fn bad_value_for_codec_is_usage_error() {
    let file = unique_file("usage");
    let path = file.to_str().expect("temp path should be UTF-8");

    let out = xattrkit(&["set", path, "user.n", "not-a-number", "--codec", "i32"]);
    assert_eq!(out.status.code(), Some(64));

    let _ = std::fs::remove_dir_all(file.parent().expect("file has a parent"));
}

#[test]
fn missing_file_is_not_found() {
    let out = xattrkit(&["get", "/nonexistent/xattrkit/file", "user.k"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn doctor_reports_json() {
    let out = xattrkit(&["--format", "json", "doctor"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stdout));
    assert_eq!(json(&out)["overall"], "pass");
}

#[test]
fn version_reports_package_version() {
    let out = xattrkit(&["version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
