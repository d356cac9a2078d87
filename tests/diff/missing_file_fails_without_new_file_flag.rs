use crate::common::command::{run_ldiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::old_side_missing(&["gone.txt", "here.txt"])]
#[case::new_side_missing(&["here.txt", "gone.txt"])]
fn missing_file_fails_without_new_file_flag(
    workspace_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("here.txt"),
        "present\n".to_string(),
    ));

    run_ldiff_command(workspace_dir.path(), args)
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with("ldiff: gone.txt: No such file"));

    Ok(())
}

#[rstest]
fn directory_operand_is_refused(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("nested").join("here.txt"),
        "present\n".to_string(),
    ));

    run_ldiff_command(workspace_dir.path(), &["-N", "nested", "nested/here.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nested: Is a directory"));

    Ok(())
}
