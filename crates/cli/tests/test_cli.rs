use std::path::Path;
use std::process::{Command, Output};

const CI_VARS: &[&str] = &[
    "APPVEYOR",
    "TRAVIS",
    "JENKINS_URL",
    "GITHUB_ACTIONS",
    "RUNNER_OS",
];

fn junit_badge(cwd: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_junit-badge"));
    cmd.current_dir(cwd)
        .args(args)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    for var in CI_VARS {
        cmd.env_remove(var);
    }
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn converts_report() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("report.xml"),
        r#"<testsuites tests="10" failures="0" disabled="1"/>"#,
    )
    .unwrap();

    let output = junit_badge(
        tmp.path(),
        &["report.xml"],
        &[("GITHUB_ACTIONS", "true"), ("RUNNER_OS", "Linux")],
    );
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));

    let contents = std::fs::read_to_string(tmp.path().join("badge.json")).unwrap();
    assert_eq!(
        contents,
        "{\n  \"schemaVersion\": 1,\n  \"namedLogo\": \"Linux\",\n  \"logoColor\": \"white\",\n  \"label\": \"tests\",\n  \"color\": \"#4c1\",\n  \"message\": \"9 passed\"\n}\n"
    );

    let out = stdout(&output);
    assert!(out.contains("Found 10 tests: 9 success, 0 failures and 1 disabled tests."));
    assert!(out.contains("Creating badge: Linux, green, 9 passed"));
    assert!(out.contains("Saved badge as "));
}

#[test]
fn missing_argument_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let output = junit_badge(tmp.path(), &[], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Missing input file"));
    assert!(!tmp.path().join("badge.json").exists());
}

#[test]
fn too_many_arguments_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let output = junit_badge(tmp.path(), &["a.xml", "b.xml"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!tmp.path().join("badge.json").exists());
}

#[test]
fn nonexistent_file_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let output = junit_badge(tmp.path(), &["nope.xml"], &[]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("File not found: "), "{out}");
    assert!(out.contains("nope.xml"), "{out}");
    assert!(!tmp.path().join("badge.json").exists());
}

#[test]
fn malformed_xml_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("report.xml"), "<testsuites tests=\"1\"").unwrap();

    let output = junit_badge(tmp.path(), &["report.xml"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Failed parsing file at line=1"));
    assert!(!tmp.path().join("badge.json").exists());
}

#[test]
fn undefined_entity_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("report.xml"),
        "<testsuites tests=\"1\" failures=\"0\" disabled=\"0\"><testcase name=\"&bogus;\"/></testsuites>",
    )
    .unwrap();

    let output = junit_badge(tmp.path(), &["report.xml"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Failed parsing file at line=1"));
    assert!(!tmp.path().join("badge.json").exists());
}

#[test]
fn missing_counts_exit_1() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("report.xml"), r#"<testsuites tests="1"/>"#).unwrap();

    let output = junit_badge(tmp.path(), &["report.xml"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Failed to find count of tests"));
}

#[test]
fn help_exits_0() {
    let tmp = tempfile::tempdir().unwrap();
    let output = junit_badge(tmp.path(), &["--help"], &[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("shields.io"));
}
