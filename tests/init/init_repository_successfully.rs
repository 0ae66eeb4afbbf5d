use crate::common::{repository_dir, repository_path, run_mygit_command, write_roles};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_mygit_command(repository_dir.path(), &["init", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty MyGit repository in .+\n$",
        )?);

    let repository_path = repository_path(repository_dir.path());
    assert!(repository_path.join("objects").is_dir());
    assert!(repository_path.join("refs").join("heads").is_dir());
    assert_eq!(
        std::fs::read_to_string(repository_path.join("HEAD"))?,
        "ref: refs/heads/main\n"
    );
    // the branch file only appears with the first commit
    assert!(!repository_path.join("refs").join("heads").join("main").exists());

    Ok(())
}

#[rstest]
fn init_leaves_existing_head_untouched(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head_path = repository_path(repository_dir.path()).join("HEAD");
    std::fs::write(&head_path, "ref: refs/heads/feature")?;

    run_mygit_command(repository_dir.path(), &["init", "alice"])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&head_path)?, "ref: refs/heads/feature");

    Ok(())
}

#[rstest]
fn init_requires_the_admin_role(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_roles(repository_dir.path(), r#"{"dave": "developer"}"#);

    run_mygit_command(repository_dir.path(), &["init", "dave"])
        .assert()
        .failure()
        .code(1)
        .stdout("access denied: user 'dave' is not allowed to run 'init'\n");

    assert!(!repository_path(repository_dir.path()).join("HEAD").exists());

    Ok(())
}

#[test]
fn missing_username_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    run_mygit_command(dir.path(), &["init"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}
