use std::fs::File;
use std::path::PathBuf;

use xattrkit_os::{sys, Target, XattrError, XattrOptions};

fn unique_file(tag: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!(
        "xattrkit-os-{tag}-{}-{}",
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

/// Returns false (and says why) when the filesystem has no user attributes.
fn supports_xattrs(path: &PathBuf) -> bool {
    match sys::set(Target::path(path), "user.xattrkit.probe", b"1", XattrOptions::empty()) {
        Ok(()) => {
            let _ = sys::remove(Target::path(path), "user.xattrkit.probe", XattrOptions::empty());
            true
        }
        Err(XattrError::NotSupported | XattrError::Permission) => {
            eprintln!("skipping: {} has no user xattr support", path.display());
            false
        }
        Err(err) => panic!("probe failed: {err}"),
    }
}

fn cleanup(path: &PathBuf) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn size_then_fill() {
    let path = unique_file("size-fill");
    if !supports_xattrs(&path) {
        return cleanup(&path);
    }
    let target = Target::path(&path);

    sys::set(target, "user.greeting", b"hello", XattrOptions::empty()).unwrap();
    let size = sys::get(target, "user.greeting", None, XattrOptions::empty()).unwrap();
    assert_eq!(size, 5);

    let mut buf = vec![0u8; size];
    let n = sys::get(target, "user.greeting", Some(&mut buf[..]), XattrOptions::empty()).unwrap();
    assert_eq!(&buf[..n], b"hello");

    cleanup(&path);
}

#[test]
fn undersized_buffer_is_range_error() {
    let path = unique_file("range");
    if !supports_xattrs(&path) {
        return cleanup(&path);
    }
    let target = Target::path(&path);

    sys::set(target, "user.long", b"0123456789", XattrOptions::empty()).unwrap();
    let mut buf = [0u8; 4];
    let err = sys::get(target, "user.long", Some(&mut buf[..]), XattrOptions::empty()).unwrap_err();
    assert_eq!(err, XattrError::Range);

    cleanup(&path);
}

#[test]
fn descriptor_flavor_sees_path_writes() {
    let path = unique_file("fd");
    if !supports_xattrs(&path) {
        return cleanup(&path);
    }
    sys::set(Target::path(&path), "user.shared", b"abc", XattrOptions::empty()).unwrap();

    let file = File::open(&path).unwrap();
    let target = Target::from(&file);
    let mut buf = [0u8; 3];
    let n = sys::get(target, "user.shared", Some(&mut buf[..]), XattrOptions::NO_FOLLOW).unwrap();
    assert_eq!(&buf[..n], b"abc");

    sys::remove(target, "user.shared", XattrOptions::empty()).unwrap();
    let err = sys::get(Target::path(&path), "user.shared", None, XattrOptions::empty()).unwrap_err();
    assert_eq!(err, XattrError::NoAttribute);

    cleanup(&path);
}

#[test]
fn create_and_replace_exclusivity() {
    let path = unique_file("exclusive");
    if !supports_xattrs(&path) {
        return cleanup(&path);
    }
    let target = Target::path(&path);

    let err = sys::set(target, "user.k", b"v", XattrOptions::REPLACE).unwrap_err();
    assert_eq!(err, XattrError::NoAttribute);

    sys::set(target, "user.k", b"v", XattrOptions::CREATE).unwrap();
    let err = sys::set(target, "user.k", b"w", XattrOptions::CREATE).unwrap_err();
    assert_eq!(err, XattrError::AlreadyExists);

    sys::set(target, "user.k", b"w", XattrOptions::REPLACE).unwrap();

    cleanup(&path);
}

#[test]
fn list_is_nul_separated() {
    let path = unique_file("list");
    if !supports_xattrs(&path) {
        return cleanup(&path);
    }
    let target = Target::path(&path);

    sys::set(target, "user.one", b"1", XattrOptions::empty()).unwrap();
    let size = sys::list(target, None, XattrOptions::empty()).unwrap();
    let mut buf = vec![0u8; size];
    let n = sys::list(target, Some(&mut buf[..]), XattrOptions::empty()).unwrap();
    buf.truncate(n);

    assert!(buf.ends_with(b"\0"));
    assert!(buf
        .split(|b| *b == 0)
        .any(|name| name == b"user.one"));

    cleanup(&path);
}

#[test]
fn remove_missing_is_no_attribute() {
    let path = unique_file("remove-missing");
    if !supports_xattrs(&path) {
        return cleanup(&path);
    }
    let err = sys::remove(Target::path(&path), "user.absent", XattrOptions::empty()).unwrap_err();
    assert_eq!(err, XattrError::NoAttribute);

    cleanup(&path);
}
