use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

const MIXED_USAGE: &str = r#"
import { StyleSheet, View, Text } from 'react-native';

export function App() {
  return <View style={styles.container}><Text>hi</Text></View>;
}

const styles = StyleSheet.create({
  container: { flex: 1 },
  title: { fontSize: 20 },
});
"#;

#[test]
fn test_check_reports_unused_styles() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.tsx", MIXED_USAGE)?;

    let output = test.command("check").output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "warnings alone exit 0: {}", stdout);
    assert!(stdout.contains("warning: \"styles.title\""));
    assert!(stdout.contains("unused-style"));
    assert!(stdout.contains("src/App.tsx:10:3"));
    assert!(stdout.contains("1 problems (0 errors, 1 warning)"));
    assert!(!stdout.contains("styles.container"));
    Ok(())
}

#[test]
fn test_check_clean_file_reports_success() -> Result<()> {
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

    let output = test.command("check").output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("Checked 1 source file - no unused styles found"));
    Ok(())
}

#[test]
fn test_check_no_stylesheet_is_not_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/util.ts",
        "export function add(a: number, b: number) { return a + b; }\n",
    )?;

    let output = test.command("check").output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("no unused styles found"));
    Ok(())
}

#[test]
fn test_check_parse_error_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.tsx", "const styles = StyleSheet.create({\n")?;

    let output = test.command("check").output()?;
    let stdout = stdout_of(&output);
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("parse-error"));
    assert!(stderr.contains("1 file(s) could not be parsed"));
    Ok(())
}

#[test]
fn test_check_explicit_file_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("screens/Home.tsx", MIXED_USAGE)?;
    test.write_file("screens/Other.tsx", MIXED_USAGE)?;

    let mut cmd = test.command("check");
    cmd.arg("screens/Home.tsx");
    let output = cmd.output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Home.tsx"));
    assert!(!stdout.contains("Other.tsx"));
    Ok(())
}

#[test]
fn test_check_respects_config_includes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".destylerc.json",
        r#"{ "includes": ["mobile"] }"#,
    )?;
    test.write_file("mobile/App.tsx", MIXED_USAGE)?;
    test.write_file("web/App.tsx", MIXED_USAGE)?;

    let output = test.command("check").output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("mobile/App.tsx"));
    assert!(!stdout.contains("web/App.tsx"));
    Ok(())
}

#[test]
fn test_check_expands_glob_includes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".destylerc.json",
        r#"{ "includes": ["packages/*/src"] }"#,
    )?;
    test.write_file("packages/mobile/src/App.tsx", MIXED_USAGE)?;
    test.write_file("packages/shared/lib/App.tsx", MIXED_USAGE)?;

    let output = test.command("check").output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("packages/mobile/src/App.tsx"));
    assert!(!stdout.contains("packages/shared/lib/App.tsx"));
    Ok(())
}

#[test]
fn test_check_ignores_test_files_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.test.tsx", MIXED_USAGE)?;

    let output = test.command("check").output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("Checked 0 source files"));
    Ok(())
}

#[test]
fn test_check_invalid_config_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".destylerc.json", "{ nope }")?;
    test.write_file("src/App.tsx", MIXED_USAGE)?;

    let output = test.command("check").output()?;
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error:"));
    Ok(())
}
