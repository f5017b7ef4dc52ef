use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(test.command().arg("init"))?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .turkscanrc.json\n");

    let content = test.read_file(".turkscanrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["minifiedMarker"], ".min.");
    assert_eq!(parsed["extensions"].as_array().map(Vec::len), Some(6));
    assert_eq!(parsed["excludeDirs"].as_array().map(Vec::len), Some(6));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".turkscanrc.json", "{}")?;

    let output = test.run(test.command().arg("init"))?;
    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "Error: .turkscanrc.json already exists\n");
    assert_eq!(test.read_file(".turkscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_then_scan_uses_defaults() -> Result<()> {
    let test = CliTest::with_file("language/tr.js", "// çeviri\n")?;
    test.write_file("app.js", "// çeviri\n")?;

    test.run(test.command().arg("init"))?;
    let output = test.run(&mut test.command())?;
    assert_eq!(output.stdout, "./app.js:1: // çeviri\n");

    Ok(())
}
