use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

const ONE_UNUSED: &str = r#"
import { StyleSheet, View } from 'react-native';

export const App = () => <View style={styles.used} />;

const styles = StyleSheet.create({
  used: { flex: 1 },
  unused: { flex: 2 },
});
"#;

#[test]
fn test_clean_dry_run_previews_deletions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.tsx", ONE_UNUSED)?;

    let output = test.command("clean").output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("warning: \"styles.unused\""));
    assert!(stdout.contains("Would delete 1 line(s) for 1 unused style(s) in 1 file(s)."));
    assert!(stdout.contains("Run with --apply to delete these lines."));

    // Dry-run must not touch the file
    let content = test.read_file("src/App.tsx")?;
    assert!(content.contains("unused: { flex: 2 },"));
    Ok(())
}

#[test]
fn test_clean_apply_deletes_lines() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.tsx", ONE_UNUSED)?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    let output = cmd.output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("delete 1 lines^_^!"));

    let content = test.read_file("src/App.tsx")?;
    assert!(!content.contains("unused:"));
    assert!(content.contains("used: { flex: 1 },"));
    Ok(())
}

#[test]
fn test_clean_apply_reports_zero_when_everything_used() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/App.tsx",
        r#"
export const App = () => <View style={styles.box} />;
const styles = StyleSheet.create({
  box: { flex: 1 },
});
"#,
    )?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    let output = cmd.output()?;

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("delete 0 lines^_^!"));
    Ok(())
}

#[test]
fn test_clean_apply_removes_multi_line_values_entirely() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/App.tsx",
        r#"
export const App = () => <View />;
const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'white',
  },
});
"#,
    )?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    let output = cmd.output()?;

    assert!(stdout_of(&output).contains("delete 4 lines^_^!"));

    let content = test.read_file("src/App.tsx")?;
    assert!(!content.contains("container"));
    assert!(!content.contains("backgroundColor"));
    assert!(content.contains("const styles = StyleSheet.create({\n});"));
    Ok(())
}

#[test]
fn test_clean_apply_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.tsx", ONE_UNUSED)?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    cmd.output()?;
    let after_first = test.read_file("src/App.tsx")?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    let output = cmd.output()?;

    assert!(stdout_of(&output).contains("delete 0 lines^_^!"));
    assert_eq!(test.read_file("src/App.tsx")?, after_first);
    Ok(())
}

#[test]
fn test_clean_without_stylesheet_deletes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/util.ts",
        "export function add(a: number, b: number) { return a + b; }\n",
    )?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    let output = cmd.output()?;

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("delete 0 lines^_^!"));
    Ok(())
}

#[test]
fn test_clean_textual_usage_keeps_key_alive() -> Result<()> {
    // The usage check is a plain substring search: a mention inside an
    // unrelated string literal counts as a use.
    let test = CliTest::new()?;
    test.write_file(
        "src/App.tsx",
        r#"
const note = "styles.box is referenced here only in prose";
const styles = StyleSheet.create({
  box: { flex: 1 },
});
"#,
    )?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    let output = cmd.output()?;

    assert!(stdout_of(&output).contains("delete 0 lines^_^!"));
    assert!(test.read_file("src/App.tsx")?.contains("box: { flex: 1 },"));
    Ok(())
}

#[test]
fn test_clean_only_last_stylesheet_declaration_counts() -> Result<()> {
    // When several StyleSheet.create declarations exist, the last one wins;
    // entries of earlier tables are left alone even when unreferenced.
    let test = CliTest::new()?;
    test.write_file(
        "src/App.tsx",
        r#"
const first = StyleSheet.create({
  stale: { flex: 1 },
});
const second = StyleSheet.create({
  dead: { flex: 2 },
});
"#,
    )?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    let output = cmd.output()?;

    assert!(stdout_of(&output).contains("delete 1 lines^_^!"));

    let content = test.read_file("src/App.tsx")?;
    assert!(content.contains("stale: { flex: 1 },"));
    assert!(!content.contains("dead:"));
    Ok(())
}

#[test]
fn test_clean_apply_skips_unparsable_file() -> Result<()> {
    let test = CliTest::new()?;
    let broken = "const styles = StyleSheet.create({\n";
    test.write_file("src/broken.tsx", broken)?;
    test.write_file("src/App.tsx", ONE_UNUSED)?;

    let mut cmd = test.command("clean");
    cmd.arg("--apply");
    let output = cmd.output()?;
    let stdout = stdout_of(&output);
    let stderr = stderr_of(&output);

    // The parse error is surfaced, the broken file is untouched, and the
    // healthy file is still cleaned.
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("delete 1 lines^_^!"));
    assert!(stderr.contains("could not be parsed"));
    assert_eq!(test.read_file("src/broken.tsx")?, broken);
    assert!(!test.read_file("src/App.tsx")?.contains("unused:"));
    Ok(())
}

#[test]
fn test_clean_dry_run_success_message_when_nothing_to_do() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/App.tsx",
        r#"
export const App = () => <View style={styles.box} />;
const styles = StyleSheet.create({
  box: { flex: 1 },
});
"#,
    )?;

    let output = test.command("clean").output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("no unused styles found"));
    assert!(!stdout.contains("Would delete"));
    Ok(())
}
