use crate::common::command::{run_ldiff_command, workspace_dir_for_diff_hunks};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteBin, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::too_many_lines(&["--max-lines", "5", "a.rs", "b.rs"], "a.rs: file has 19 lines, more than the 5 line limit")]
#[case::too_many_bytes(&["--max-bytes", "10", "a.rs", "b.rs"], "larger than the 10 byte limit")]
fn oversized_inputs_are_refused(
    workspace_dir_for_diff_hunks: TempDir,
    #[case] args: &[&str],
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_ldiff_command(workspace_dir_for_diff_hunks.path(), args)
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(message));

    Ok(())
}

#[rstest]
fn limits_at_the_input_size_are_accepted(
    workspace_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_ldiff_command(
        workspace_dir_for_diff_hunks.path(),
        &["--max-lines", "19", "a.rs", "b.rs"],
    )
    .assert()
    .code(1);

    Ok(())
}

#[rstest]
fn binary_inputs_are_refused(
    workspace_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_for_diff_hunks;
    workspace_dir
        .child("blob.bin")
        .write_binary(&[0x7f, b'E', b'L', b'F', 0x00, 0x01])?;

    run_ldiff_command(workspace_dir.path(), &["a.rs", "blob.bin"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blob.bin: binary file, refusing to diff"));

    Ok(())
}
