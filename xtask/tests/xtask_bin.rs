use std::process::Command;

fn xtask(arg: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg(arg)
        .output()
        .expect("run xtask")
}

#[test]
fn xtask_help_runs() {
    let output = xtask("help");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
    assert!(stderr.contains("emit-schemas"));
    assert!(!stderr.contains("validate-schemas"));
}

#[test]
fn conform_needs_no_committed_schemas() {
    let output = xtask("conform");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("golden reports conform"));
}

#[test]
fn print_schema_ids_lists_report_schema() {
    let output = xtask("print-schema-ids");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "metalint.report.v1");
}

#[test]
fn explain_coverage_passes() {
    let output = xtask("explain-coverage");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn unknown_command_fails() {
    assert!(!xtask("frobnicate").status.success());
}
