use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const CS_SOURCE: &str = include_str!("fixtures/AssemblyInfo.cs");
const JS_SOURCE: &str = include_str!("fixtures/AssemblyInfo.js");

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("assembly-source").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("ASSEMBLY_SOURCE_LOG");
    cmd
}

#[test]
fn test_get_prints_raw_string() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.cs");
    fs::write(&file, CS_SOURCE).unwrap();

    cmd()
        .arg("get")
        .arg(&file)
        .arg("AssemblyVersion")
        .assert()
        .success()
        .stdout("1.0.0\n");

    cmd()
        .arg("get")
        .arg(&file)
        .arg("ComVisible")
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_get_missing_attribute_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.cs");
    fs::write(&file, CS_SOURCE).unwrap();

    cmd()
        .arg("get")
        .arg(&file)
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Attribute not found: nope"));
}

#[test]
fn test_set_in_place_touches_only_the_attribute() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.cs");
    fs::write(&file, CS_SOURCE).unwrap();

    cmd()
        .arg("set")
        .arg(&file)
        .arg("AssemblyVersion=2.0.0")
        .arg("--in-place")
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&file).unwrap();
    let expected = CS_SOURCE.replace(
        "    [assembly:AssemblyVersion( \"1.0.0\" )]",
        "    [assembly: AssemblyVersion(\"2.0.0\")]",
    );
    assert_eq!(written, expected);
}

#[test]
fn test_set_prints_to_stdout_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.cs");
    fs::write(&file, "[assembly: ComVisible(true)]\n").unwrap();

    cmd()
        .arg("set")
        .arg(&file)
        .arg("ComVisible=false")
        .arg("Build=7")
        .assert()
        .success()
        .stdout("[assembly: ComVisible(false)]\n[assembly: Build(7)]");

    // The file itself is untouched.
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "[assembly: ComVisible(true)]\n"
    );
}

#[test]
fn test_set_generates_missing_jscript_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.js");

    cmd()
        .arg("set")
        .arg(&file)
        .arg("AssemblyTitle=GeneratedProduct")
        .arg("ComVisible=true")
        .arg("-i")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "import System.Reflection;\n[assembly: AssemblyTitleAttribute(\"GeneratedProduct\")]\n[assembly: ComVisibleAttribute(true)]"
    );
}

#[test]
fn test_set_without_preamble() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.js");

    cmd()
        .arg("set")
        .arg(&file)
        .arg("AssemblyTitle=x")
        .arg("--no-preamble")
        .assert()
        .success()
        .stdout("[assembly: AssemblyTitleAttribute(\"x\")]");
}

#[test]
fn test_set_rejects_malformed_assignment() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.cs");

    cmd()
        .arg("set")
        .arg(&file)
        .arg("AssemblyTitle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected KEY=VALUE"));
}

#[test]
fn test_set_rejects_object_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.cs");
    fs::write(&file, CS_SOURCE).unwrap();

    cmd()
        .arg("set")
        .arg(&file)
        .arg("AssemblyTitle={}")
        .arg("--in-place")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported type: object"));

    assert_eq!(fs::read_to_string(&file).unwrap(), CS_SOURCE);
}

#[test]
fn test_list_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.js");
    fs::write(&file, JS_SOURCE).unwrap();

    let output = cmd().arg("list").arg(&file).arg("--json").output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["AssemblyTitle"], "Test\"Product");
    assert_eq!(parsed["ComVisible"], false);
    assert!(parsed["AllowPartiallyTrustedCallers"].is_null());
}

#[test]
fn test_list_plain() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.cs");
    fs::write(&file, CS_SOURCE).unwrap();

    cmd()
        .arg("ls")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("InternalsVisibleTo"))
        .stdout(predicate::str::contains("\"FooBar\""));
}

#[test]
fn test_language_flag_overrides_extension() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.txt");
    fs::write(&file, "[assembly: Marker]\n").unwrap();

    // As C#, a bare marker is plain text.
    cmd()
        .arg("get")
        .arg(&file)
        .arg("Marker")
        .assert()
        .failure();

    cmd()
        .arg("--language")
        .arg("jscript")
        .arg("get")
        .arg(&file)
        .arg("Marker")
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_config_file_selects_language() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("AssemblyInfo.txt");
    let config = temp_dir.path().join("assembly.json");
    fs::write(&file, "[assembly: assemblyTitle('x')]\n").unwrap();
    fs::write(&config, r#"{ "language": "jscript" }"#).unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("get")
        .arg(&file)
        .arg("AssemblyTitle")
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn test_missing_file_for_get_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("get")
        .arg(temp_dir.path().join("missing.cs"))
        .arg("AssemblyTitle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
