use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, HINDI_PO, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .pomorc.json\n");

    let content = test.read_file(".pomorc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in ["localeRoot", "messagesDir", "domain", "header"] {
        assert!(parsed.get(field).is_some(), "Config should have '{}' field", field);
    }

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".pomorc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .pomorc.json already exists\n");
    assert_eq!(test.read_file(".pomorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("locale/hi/LC_MESSAGES/django.po", HINDI_PO)?;

    let output = test.compile_command().output()?;
    assert!(
        output.status.success(),
        "Compile should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("locale/hi/LC_MESSAGES/django.mo").exists());

    Ok(())
}
