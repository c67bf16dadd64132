use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

mod common;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_run_help() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["run", "--help"]);
    cmd.assert().success();
}

#[test]
fn test_size_help() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["size", "--help"]);
    cmd.assert().success();
}

#[test]
fn test_size_help_lists_format_names() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["size", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("jp2"))
        .stdout(predicate::str::contains("jpeg2000"));
}

#[test]
fn test_missing_subcommand() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.assert().failure();
}

#[test]
fn test_size_single_image() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["size", "bmp", "256", "256"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BMP (256, 256)px\t81 920 bytes"));
}

#[test]
fn test_size_accepts_format_aliases() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["size", "J", "256", "256"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("JPEG (256, 256)px\t16 383 bytes"));
}

#[test]
fn test_size_unknown_format() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["size", "png", "10", "10"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid image format: png"));
}

#[test]
fn test_size_invalid_dimension() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["size", "bmp", "wide", "10"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid image dimension"));
}

#[test]
fn test_run_nonexistent_script() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["run", "nonexistent-commands.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_run_script_prints_report() {
    let temp_dir = common::create_temp_directory();
    let script = common::create_command_script(
        temp_dir.path(),
        "catalog.txt",
        &["# two bitmaps", "BMP 1024 768", "BMP 100 100", "G 2", "Q"],
    );

    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.arg("run").arg(&script);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\t[1]\tBMP       \t(1024, 768)px\t1 032 192 bytes\n"))
        .stdout(predicate::str::contains("\tStack:\n\t  [2]\tBMP"))
        .stdout(predicate::str::contains("1 images, compressed to 7 213 bytes"))
        .stdout(predicate::str::contains("Total Size: 1 039 405 bytes"));
}

#[test]
fn test_run_script_normalizes_negative_dimensions() {
    let temp_dir = common::create_temp_directory();
    let script = common::create_command_script(temp_dir.path(), "negative.txt", &["BMP -100 100"]);

    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.arg("run").arg(&script);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(100, 100)px\t10 000 bytes"));
}

#[test]
fn test_run_script_reports_rejected_lines_and_continues() {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let script = temp_dir.child("mixed.txt");
    script.write_str("TIFF 10 10\nJPEG 100 100\nG 1, 5\nQ\n").unwrap();

    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.arg("run").arg(script.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rejected").not())
        .stdout(predicate::str::contains("No image stacks"))
        .stdout(predicate::str::contains("Total Size: 2 000 bytes"))
        .stderr(predicate::str::contains("[TIFF 10 10] rejected"))
        .stderr(predicate::str::contains("Image id not found: 5"))
        .stderr(predicate::str::contains("2 line(s)"));
}

#[test]
fn test_quiet_run_prints_only_the_report() {
    let temp_dir = common::create_temp_directory();
    let script = common::create_command_script(
        temp_dir.path(),
        "quiet.txt",
        &["TIFF 1 1", "BMP 1 1", "Q"],
    );

    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.arg("--quiet").arg("run").arg(&script);
    cmd.assert()
        .success()
        .stdout(
            "\t[1]\tBMP       \t(1, 1)px\t1 bytes\n\n\tNo image stacks\n\n\tTotal Size: 1 bytes\n\n",
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_quiet_interactive_keeps_rejections_off_stdout() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["--quiet", "interactive"]);
    cmd.write_stdin("TIFF 1 1\nBMP 1 1\nQ\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("\t[1]\tBMP"))
        .stdout(predicate::str::contains("rejected").not())
        .stderr(predicate::str::contains("rejected").not());
}

#[test]
fn test_run_script_restacking_dissolves_empty_stack() {
    let temp_dir = common::create_temp_directory();
    let script = common::create_command_script(
        temp_dir.path(),
        "restack.txt",
        &["BMP 100 100", "G 1", "G 1", "Q"],
    );

    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.arg("run").arg(&script);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Stack:").count(1))
        .stdout(predicate::str::contains("No images outside stacks"));
}

#[test]
fn test_interactive_session() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.arg("interactive");
    cmd.write_stdin("BMP 100 100\nG 1\nQ\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Add image/group: "))
        .stdout(predicate::str::contains("1 images, compressed to 7 213 bytes"))
        .stdout(predicate::str::contains("Total Size: 7 213 bytes"));
}

#[test]
fn test_interactive_quiet_prints_only_report() {
    let mut cmd = Command::cargo_bin("storage-estimator").unwrap();
    cmd.args(["--quiet", "interactive"]);
    cmd.write_stdin("JP2 100 100\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Add image/group").not())
        .stdout(predicate::str::contains("Finish with Q").not())
        .stdout(predicate::str::contains("Total Size: 1 801 bytes"));
}
