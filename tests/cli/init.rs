use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, run, stderr};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["sourceRoot", "output", "cache", "ignoredDirs", "sourcePatterns"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["cache"], Value::Bool(true));
    assert_eq!(parsed["baseLocale"], Value::String("en".to_string()));

    // 2-space indentation
    assert!(content.contains("\n  \""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created ./.i18nrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".i18nrc.json").exists());
    let content = test.read_file(".i18nrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    ✘ error: .i18nrc.json already exists
    ");

    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    test.write_file("src/app.ts", "t('greeting')")?;
    test.write_file("locales/en.json", r#"{"greeting":"Hello"}"#)?;
    test.write_file("locales/fr.json", r#"{"greeting":"Bonjour"}"#)?;

    let mut cmd = test.command();
    cmd.args(["unused", "--locale-path", "locales/en.json"]);
    let output = run(cmd)?;
    assert!(
        output.status.success(),
        "unused should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("unused_keys.yml").exists());

    let output = run(test.untranslated_command())?;
    assert!(
        output.status.success(),
        "untranslated should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("missing_translations.yml").exists());

    Ok(())
}
