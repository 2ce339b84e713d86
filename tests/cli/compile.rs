use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, HINDI_PO, stderr, stdout};

#[test]
fn test_compile_without_arguments() -> Result<()> {
    let test = CliTest::with_file("locale/hi/LC_MESSAGES/django.po", HINDI_PO)?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    insta::assert_snapshot!(stdout(&output), @r"
    Compiling locale/hi/LC_MESSAGES/django.po...
    ✓ Created locale/hi/LC_MESSAGES/django.mo with 2 translations

    Compiled 1 translation file(s).
    ");

    let bytes = test.read_bytes("locale/hi/LC_MESSAGES/django.mo")?;
    assert_eq!(&bytes[..4], &[0xde, 0x12, 0x04, 0x95]);

    Ok(())
}

#[test]
fn test_compile_partial_failure() -> Result<()> {
    let test = CliTest::with_file("locale/hi/LC_MESSAGES/django.po", HINDI_PO)?;
    test.write_file(
        "locale/en/LC_MESSAGES/django.po",
        "msgid \"welcome\"\nmsgstr \"Welcome\n",
    )?;

    let output = test.compile_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains(
        "✘ Error compiling locale/en/LC_MESSAGES/django.po: unterminated string at line 2, column 8"
    ));
    assert!(stdout.contains("2 | msgstr \"Welcome"));
    assert!(stdout.contains("✓ Created locale/hi/LC_MESSAGES/django.mo with 2 translations"));
    assert!(stdout.ends_with("Compiled 1 translation file(s).\n"));

    assert!(!test.root().join("locale/en/LC_MESSAGES/django.mo").exists());
    assert!(test.root().join("locale/hi/LC_MESSAGES/django.mo").exists());

    Ok(())
}

#[test]
fn test_compile_strict_fails_on_error() -> Result<()> {
    let test = CliTest::with_file("locale/en/LC_MESSAGES/django.po", "garbage\n")?;

    let output = test.compile_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Compiled 0 translation file(s)."));

    Ok(())
}

#[test]
fn test_compile_missing_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: No locale directory found: locale\n");
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_compile_skips_languages_without_source() -> Result<()> {
    let test = CliTest::with_file("locale/hi/LC_MESSAGES/django.po", HINDI_PO)?;
    test.write_file("locale/ta/LC_MESSAGES/.keep", "")?;

    let output = test.compile_command().output()?;
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(!stdout.contains("locale/ta"));
    assert!(stdout.contains("Compiled 1 translation file(s)."));

    Ok(())
}

#[test]
fn test_compile_with_config() -> Result<()> {
    let test = CliTest::with_file(
        ".pomorc.json",
        r#"{
            "localeRoot": "translations",
            "domain": "djangojs",
            "ignores": ["en*"]
        }"#,
    )?;
    test.write_file("translations/hi/LC_MESSAGES/djangojs.po", HINDI_PO)?;
    test.write_file("translations/en/LC_MESSAGES/djangojs.po", HINDI_PO)?;

    let output = test.compile_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("translations/hi/LC_MESSAGES/djangojs.mo").exists());
    assert!(!test.root().join("translations/en/LC_MESSAGES/djangojs.mo").exists());

    Ok(())
}

#[test]
fn test_compile_flags_override_config() -> Result<()> {
    let test = CliTest::with_file("custom/hi/LC_MESSAGES/django.po", HINDI_PO)?;

    let output = test
        .compile_command()
        .args(["--locale-root", "custom"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("custom/hi/LC_MESSAGES/django.mo").exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(
        ".pomorc.json",
        r#"{ "languages": [{ "code": "Hindi", "name": "Hindi" }] }"#,
    )?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid language code: \"Hindi\""));

    Ok(())
}

#[test]
fn test_recompile_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file("locale/hi/LC_MESSAGES/django.po", HINDI_PO)?;

    test.compile_command().output()?;
    let first = test.read_bytes("locale/hi/LC_MESSAGES/django.mo")?;
    test.compile_command().output()?;
    let second = test.read_bytes("locale/hi/LC_MESSAGES/django.mo")?;
    assert_eq!(first, second);

    Ok(())
}
