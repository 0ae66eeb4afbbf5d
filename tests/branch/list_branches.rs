use crate::common::{committed_repository_dir, repository_path, run_mygit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_branches_marks_the_current_one(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    for name in ["feature", "develop"] {
        run_mygit_command(dir, &["create-branch", "alice", name])
            .assert()
            .success();
    }

    run_mygit_command(dir, &["branch", "dave"])
        .assert()
        .success()
        .stdout("Available branches:\n  develop\n  feature\n* main\n");

    run_mygit_command(dir, &["checkout", "alice", "feature"])
        .assert()
        .success();

    run_mygit_command(dir, &["branch", "alice"])
        .assert()
        .success()
        .stdout("Available branches:\n  develop\n* feature\n  main\n");

    Ok(())
}

#[rstest]
fn list_branches_skips_refs_with_invalid_names(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let heads_path = repository_path(dir).join("refs").join("heads");
    std::fs::copy(heads_path.join("main"), heads_path.join("release.lock"))?;

    run_mygit_command(dir, &["branch", "alice"])
        .assert()
        .success()
        .stdout("Available branches:\n* main\n");

    Ok(())
}
