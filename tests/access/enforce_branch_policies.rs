use crate::common::{
    committed_repository_dir, read_ref, repository_path, run_mygit_command,
    write_branch_permissions,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const POLICIES: &str = r#"{
    "alice": { "global": { "canCreateBranch": false }, "branchAccess": { "main": "view" } },
    "dave": { "branchAccess": { "main": "edit" } }
}"#;

#[rstest]
fn branch_policies_restrict_admins_too(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    write_branch_permissions(dir, POLICIES);
    let head = read_ref(dir, "main");

    run_mygit_command(dir, &["create-branch", "alice", "feature"])
        .assert()
        .failure()
        .code(1)
        .stdout("access denied: user 'alice' is not allowed to create branches\n");

    std::fs::write(dir.join("a.txt"), "changed\n")?;
    run_mygit_command(dir, &["add", "alice", "a.txt"])
        .assert()
        .success();
    run_mygit_command(dir, &["commit", "alice", "Alice", "blocked"])
        .assert()
        .failure()
        .code(1)
        .stdout("access denied: user 'alice' is not allowed to edit branch 'main'\n");

    assert_eq!(read_ref(dir, "main"), head);
    assert!(repository_path(dir).join("index").exists());

    run_mygit_command(dir, &["commit", "dave", "Dave", "allowed"])
        .assert()
        .success();

    Ok(())
}

#[rstest]
fn checkout_requires_view_access(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_mygit_command(dir, &["create-branch", "alice", "feature"])
        .assert()
        .success();
    write_branch_permissions(dir, POLICIES);

    run_mygit_command(dir, &["checkout", "alice", "feature"])
        .assert()
        .failure()
        .code(1)
        .stdout("access denied: user 'alice' is not allowed to view branch 'feature'\n");

    Ok(())
}

#[rstest]
#[case(&[], true)]
#[case(&["--branch-policy-fallback", "deny"], false)]
fn missing_policy_file_uses_the_configured_fallback(
    committed_repository_dir: TempDir,
    #[case] flags: &[&str],
    #[case] allowed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let mut args = flags.to_vec();
    args.extend(["create-branch", "alice", "feature"]);

    let assert = run_mygit_command(dir, &args).assert();

    assert_eq!(assert.get_output().status.success(), allowed);
    assert_eq!(dir.join(".mygit/refs/heads/feature").exists(), allowed);

    Ok(())
}

#[rstest]
fn fallback_can_come_from_the_environment(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    std::fs::write(dir.join("a.txt"), "changed\n")?;
    run_mygit_command(dir, &["add", "alice", "a.txt"])
        .assert()
        .success();

    run_mygit_command(dir, &["commit", "alice", "Alice", "blocked"])
        .env("MYGIT_BRANCH_POLICY_FALLBACK", "deny")
        .assert()
        .failure()
        .code(1);

    Ok(())
}
