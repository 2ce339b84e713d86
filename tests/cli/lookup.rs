use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, HINDI_PO, stderr, stdout};

fn compiled_project() -> Result<CliTest> {
    let test = CliTest::with_file("locale/hi/LC_MESSAGES/django.po", HINDI_PO)?;
    let output = test.compile_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    Ok(test)
}

#[test]
fn test_lookup_found() -> Result<()> {
    let test = compiled_project()?;

    let output = test.command().args(["lookup", "hi", "welcome"]).output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "स्वागत\n");

    let output = test
        .command()
        .args(["lookup", "hi", "Book an appointment"])
        .output()?;
    assert_eq!(stdout(&output), "अपॉइंटमेंट बुक करें\n");

    Ok(())
}

#[test]
fn test_lookup_missing_key() -> Result<()> {
    let test = compiled_project()?;

    let output = test.command().args(["lookup", "hi", "goodbye"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "error: no translation for \"goodbye\" in \"hi\"\n"
    );

    // The metadata entry is not a translation.
    let output = test.command().args(["lookup", "hi", ""]).output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_lookup_unknown_language() -> Result<()> {
    let test = compiled_project()?;

    let output = test.command().args(["lookup", "ta", "welcome"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "error: no compiled catalog for language \"ta\"\n"
    );

    Ok(())
}

#[test]
fn test_lookup_corrupt_catalog() -> Result<()> {
    let test = CliTest::with_file("locale/hi/LC_MESSAGES/django.mo", "not a catalog")?;

    let output = test.command().args(["lookup", "hi", "welcome"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load catalog"));

    Ok(())
}
