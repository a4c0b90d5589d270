use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr, stdout, strings};

fn missing_for(report: &serde_yaml::Value, key: &str) -> Option<Vec<String>> {
    report["untranslated"]["results"]
        .as_sequence()?
        .iter()
        .find(|entry| entry["key"].as_str() == Some(key))
        .map(|entry| strings(&entry["missing"]))
}

#[test]
fn test_reports_missing_and_identical_values() -> Result<()> {
    let test = CliTest::with_file(
        "locales/en.json",
        r#"{"title":"Title","menu":{"open":"Open","close":"Close"}}"#,
    )?;
    test.write_file(
        "locales/fr.json",
        r#"{"title":"Titre","menu":{"open":"Open"}}"#,
    )?;
    test.write_file(
        "locales/de.json",
        r#"{"title":"Titel","menu":{"open":"Öffnen","close":"Schließen"}}"#,
    )?;

    let output = run(test.untranslated_command())?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let report = test.read_yaml("missing_translations.yml")?;
    assert_eq!(report["untranslated"]["total"].as_u64(), Some(2));
    assert_eq!(missing_for(&report, "menu.open"), Some(vec!["fr".to_string()]));
    assert_eq!(missing_for(&report, "menu.close"), Some(vec!["fr".to_string()]));
    assert_eq!(missing_for(&report, "title"), None);

    assert!(stdout(&output).contains("2 untranslated keys across 3 locales"));
    Ok(())
}

#[test]
fn test_fully_translated() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{"hello":"Hello"}"#)?;
    test.write_file("locales/fr.json", r#"{"hello":"Bonjour"}"#)?;

    let output = run(test.untranslated_command())?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Checked 2 locales - no untranslated keys found"));
    Ok(())
}

#[test]
fn test_custom_base_locale_and_paths() -> Result<()> {
    let test = CliTest::with_file("i18n/fr.json", r#"{"a":"A","b":"Bé"}"#)?;
    test.write_file("i18n/en.json", r#"{"a":"Ay"}"#)?;

    assert_cmd_snapshot!(
        test.untranslated_command()
            .args(["--path", "i18n", "--base-locale", "fr", "--output", "out.yml"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✘ 1 untranslated key across 2 locales
    Report: out.yml

    ----- stderr -----
    ✓ Extracted 2 locales
    ✓ Found 1 untranslated keys
    ✓ Report is ready: out.yml
    "
    );

    let report = test.read_yaml("out.yml")?;
    assert_eq!(missing_for(&report, "b"), Some(vec!["en".to_string()]));
    assert_eq!(missing_for(&report, "a"), None);
    Ok(())
}

#[test]
fn test_strict_fails_on_findings() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{"a":"A"}"#)?;
    test.write_file("locales/fr.json", "{}")?;

    let mut cmd = test.untranslated_command();
    cmd.arg("--strict");
    let output = run(cmd)?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_missing_base_locale_is_fatal() -> Result<()> {
    let test = CliTest::with_file("locales/fr.json", r#"{"a":"A"}"#)?;

    let output = run(test.untranslated_command())?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Base locale 'en' not found"));
    Ok(())
}

#[test]
fn test_invalid_base_locale_code_is_fatal() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{"a":"A"}"#)?;

    let mut cmd = test.untranslated_command();
    cmd.args(["--base-locale", "english"]);
    let output = run(cmd)?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("two-letter"));
    Ok(())
}

#[test]
fn test_empty_locales_dir_is_fatal_with_hint() -> Result<()> {
    let test = CliTest::with_file("locales/readme.txt", "nothing")?;

    let output = run(test.untranslated_command())?;
    assert_eq!(output.status.code(), Some(2));

    let err = stderr(&output);
    assert!(err.contains("No locale files found"));
    assert!(err.contains("Did you specify the directory holding the <locale>.json catalogs"));
    Ok(())
}
