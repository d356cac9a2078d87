use crate::common::command::{run_ldiff_command, workspace_dir_for_diff_hunks};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::one_line(
    "1",
    "@@ -3,5 +3,2 @@\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n@@ -15,3 +12,5 @@\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n"
)]
#[case::no_context(
    "0",
    "@@ -4,3 +3,0 @@\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n@@ -16,1 +13,3 @@\n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n"
)]
fn show_diff_with_custom_context(
    workspace_dir_for_diff_hunks: TempDir,
    #[case] context: &str,
    #[case] expected_hunks: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;

    let actual_output = run_ldiff_command(workspace_dir.path(), &["-U", context, "a.rs", "b.rs"])
        .assert()
        .code(1);
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;
    let hunks = stdout.lines().skip(2).map(|l| format!("{l}\n")).collect::<String>();

    pretty_assertions::assert_eq!(hunks, expected_hunks);

    Ok(())
}

#[rstest]
fn wide_context_merges_everything_into_one_hunk(
    workspace_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;

    let actual_output = run_ldiff_command(workspace_dir.path(), &["--unified", "10", "a.rs", "b.rs"])
        .assert()
        .code(1);
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;
    let headers = stdout
        .lines()
        .filter(|line| line.starts_with("@@"))
        .collect::<Vec<_>>();

    pretty_assertions::assert_eq!(headers, vec!["@@ -1,19 +1,18 @@"]);

    Ok(())
}

#[rstest]
fn non_numeric_context_is_rejected(
    workspace_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;

    run_ldiff_command(workspace_dir.path(), &["-U", "many", "a.rs", "b.rs"])
        .assert()
        .code(2)
        .stdout("");

    Ok(())
}

#[rstest]
fn context_wider_than_any_file_shows_everything(
    workspace_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;
    let context = usize::MAX.to_string();

    let actual_output = run_ldiff_command(workspace_dir.path(), &["-U", &context, "a.rs", "b.rs"])
        .assert()
        .code(1);
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;
    let headers = stdout
        .lines()
        .filter(|line| line.starts_with("@@"))
        .collect::<Vec<_>>();

    pretty_assertions::assert_eq!(headers, vec!["@@ -1,19 +1,18 @@"]);

    Ok(())
}
