//! Integration tests running the compiled binary.
//!
//! Most cases end before any external tool is needed. The full run uses a
//! stand-in `mc` script placed first on `PATH`, so no object store is needed.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn archiver_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dicom-archiver"))
}

#[test]
fn test_malformed_accession_path_exits_one() {
    let prefix = TempDir::new().unwrap();
    let prefix = prefix.path().to_string_lossy().into_owned();
    let output = archiver_bin()
        .args(["minio/dicom", prefix.as_str(), "2024/1/15/ABC1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid format for acc_dir_relative: '2024/1/15/ABC1'"),
        "stderr was: {}",
        stderr
    );
    // Nothing was echoed or probed
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_path_with_debug_runs_nothing() {
    let output = archiver_bin()
        .args(["minio/dicom", "/mnt/pacs", "not-a-date", "--debug", "--overwrite"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("stat"), "stdout was: {}", stdout);
}

#[test]
fn test_out_of_range_compression_level_is_usage_error() {
    let output = archiver_bin()
        .args([
            "minio/dicom",
            "/mnt/pacs",
            "2024/01/15/ABC1",
            "--compression_level",
            "12",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    let output = archiver_bin().arg("minio/dicom").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

/// Stand-in object-store client: every object is missing, uploads are swallowed
#[cfg(unix)]
const FAKE_MC: &str = r#"#!/bin/sh
case "$1" in
  stat)
    echo 'mc: <ERROR> Object does not exist' >&2
    printf '{"status":"error"}\n'
    exit 1
    ;;
  pipe)
    cat > /dev/null
    exit 0
    ;;
esac
exit 3
"#;

#[cfg(unix)]
fn install_fake_mc(bin_dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let script = bin_dir.join("mc");
    fs::write(&script, FAKE_MC).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
fn archive_tools_available() -> bool {
    Path::new("/usr/bin/gzip").exists()
        && Command::new("tar")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
}

#[cfg(unix)]
#[test]
fn test_debug_run_echoes_commands_and_probe_json() {
    if !archive_tools_available() {
        eprintln!("tar or gzip not available, skipping");
        return;
    }

    let bin_dir = TempDir::new().unwrap();
    install_fake_mc(bin_dir.path());
    let path = format!(
        "{}:{}",
        bin_dir.path().display(),
        std::env::var("PATH").unwrap_or_default()
    );

    let prefix = TempDir::new().unwrap();
    let accession = prefix.path().join("2024/01/15/ABC1");
    fs::create_dir_all(&accession).unwrap();
    fs::write(accession.join("CT.1.dcm"), b"DICM ct").unwrap();
    fs::write(accession.join("MR.2.dcm"), b"DICM mr").unwrap();
    let prefix = prefix.path().to_string_lossy().into_owned();

    let output = archiver_bin()
        .env("PATH", path)
        .args([
            "minio/dicom",
            prefix.as_str(),
            "2024/01/15/ABC1",
            "--overwrite",
            "--debug",
        ])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "stderr was: {}", stderr);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "mc stat --json minio/dicom/2024/01/15/ABC1.tar.gz");
    assert_eq!(lines[1], r#"{"status":"error"}"#);
    assert!(lines.iter().any(|l| l.starts_with("tar -cO ")));
    assert!(lines.iter().any(|l| l.starts_with("mc pipe --quiet --attr Content-MD5=")
        && l.contains(";Total-Count=2;Modalities=CT,MR ")
        && l.ends_with(" minio/dicom/2024/01/15/ABC1.tar.gz")));

    // A missing object is expected; the client's complaint stays hidden
    assert!(!stderr.contains("Object does not exist"), "stderr was: {}", stderr);
}

#[cfg(unix)]
#[test]
fn test_first_upload_without_overwrite_reports_mismatch_only() {
    if !archive_tools_available() {
        eprintln!("tar or gzip not available, skipping");
        return;
    }

    let bin_dir = TempDir::new().unwrap();
    install_fake_mc(bin_dir.path());
    let path = format!(
        "{}:{}",
        bin_dir.path().display(),
        std::env::var("PATH").unwrap_or_default()
    );

    let prefix = TempDir::new().unwrap();
    let accession = prefix.path().join("2024/01/15/ABC1");
    fs::create_dir_all(&accession).unwrap();
    fs::write(accession.join("CT.1.dcm"), b"DICM ct").unwrap();
    let prefix = prefix.path().to_string_lossy().into_owned();

    let output = archiver_bin()
        .env("PATH", path)
        .args(["minio/dicom", prefix.as_str(), "2024/01/15/ABC1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("did not match existing None"), "stderr was: {}", stderr);
    assert!(!stderr.contains("Object does not exist"), "stderr was: {}", stderr);
}
