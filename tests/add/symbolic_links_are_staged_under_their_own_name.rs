#![cfg(unix)]

use crate::common::{HELLO_BLOB, init_repository_dir, repository_path, run_mygit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn symbolic_links_are_staged_under_their_own_name(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("a.txt"), "hello\n")?;
    std::os::unix::fs::symlink("a.txt", dir.join("link.txt"))?;

    run_mygit_command(dir, &["status", "alice"])
        .assert()
        .success()
        .stdout("=== MyGit Status ===\nUntracked: a.txt\nUntracked: link.txt\n");

    run_mygit_command(dir, &["add", "alice", "link.txt"])
        .assert()
        .success()
        .stdout(format!("Added link.txt to index (hash: {HELLO_BLOB})\n"));

    assert_eq!(
        std::fs::read_to_string(repository_path(dir).join("index"))?,
        format!("{HELLO_BLOB} link.txt\n")
    );

    run_mygit_command(dir, &["status", "alice"])
        .assert()
        .success()
        .stdout("=== MyGit Status ===\nUntracked: a.txt\n");

    Ok(())
}
