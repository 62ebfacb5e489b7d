use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const DEMO: &str = "\
import app

timer = Timer()
self.clock = Clock()
a = b = Timer()
first, second = Timer(), Clock()
print(timer)
";

#[test]
fn test_single_target() -> Result<()> {
    let test = CliTest::with_file("demo.py", DEMO)?;

    assert_cmd_snapshot!(test.command().args(["demo.py", "3"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    demo.py:3: timer (single-target)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_attribute_target() -> Result<()> {
    let test = CliTest::with_file("demo.py", DEMO)?;

    assert_cmd_snapshot!(test.command().args(["demo.py", "4"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    demo.py:4: clock (single-target)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_chained_assignment_fails() -> Result<()> {
    let test = CliTest::with_file("demo.py", DEMO)?;

    assert_cmd_snapshot!(test.command().args(["demo.py", "5"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    demo.py:5: error: cannot assign a unique name: multiple targets share one value

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_tuple_unpacking_resolves_textually() -> Result<()> {
    let test = CliTest::with_file("demo.py", DEMO)?;

    assert_cmd_snapshot!(test.command().args(["demo.py", "6"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    demo.py:6: first, second (tuple-unpacking)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_non_assignment_line() -> Result<()> {
    let test = CliTest::with_file("demo.py", DEMO)?;

    assert_cmd_snapshot!(test.command().args(["demo.py", "7"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    demo.py:7: warning: no assignment target

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("demo.py", DEMO)?;

    assert_cmd_snapshot!(test.command().args(["demo.py", "3", "--format", "json"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "file": "demo.py",
      "line": 3,
      "name": "timer",
      "shape": "single-target",
      "error": null
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_json_format_error_field() -> Result<()> {
    let test = CliTest::with_file("demo.py", DEMO)?;

    assert_cmd_snapshot!(test.command().args(["demo.py", "5", "--format", "json"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    {
      "file": "demo.py",
      "line": 5,
      "name": null,
      "shape": "multi-target",
      "error": "cannot assign a unique name: multiple targets share one value"
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["missing.py", "1"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("Failed to read source file"),
        "unexpected stderr: {stderr}"
    );

    Ok(())
}

#[test]
fn test_line_out_of_range_is_an_error() -> Result<()> {
    let test = CliTest::with_file("demo.py", "x = 1\n")?;

    assert_cmd_snapshot!(test.command().args(["demo.py", "42"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: demo.py has no line 42
    ");

    Ok(())
}
