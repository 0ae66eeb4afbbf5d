use crate::common::{HELLO_BLOB, init_repository_dir, repository_path, run_mygit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_single_file_to_index_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("a.txt"), "hello\n")?;

    run_mygit_command(dir, &["add", "alice", "a.txt"])
        .assert()
        .success()
        .stdout(format!("Added a.txt to index (hash: {HELLO_BLOB})\n"));

    let repository_path = repository_path(dir);
    assert_eq!(
        std::fs::read(repository_path.join("objects").join(HELLO_BLOB))?,
        b"hello\n"
    );
    assert_eq!(
        std::fs::read_to_string(repository_path.join("index"))?,
        format!("{HELLO_BLOB} a.txt\n")
    );

    Ok(())
}

#[rstest]
fn adding_from_a_subdirectory_records_the_root_relative_name(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let nested = dir.join("docs");
    std::fs::create_dir_all(&nested)?;
    std::fs::write(dir.join("a.txt"), "hello\n")?;

    run_mygit_command(&nested, &["add", "alice", "../a.txt"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(repository_path(dir).join("index"))?,
        format!("{HELLO_BLOB} a.txt\n")
    );

    Ok(())
}

#[rstest]
fn nested_files_are_rejected(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::create_dir_all(dir.join("docs"))?;
    std::fs::write(dir.join("docs").join("notes.txt"), "notes")?;

    run_mygit_command(dir, &["add", "alice", "docs/notes.txt"])
        .assert()
        .failure()
        .code(1);

    assert!(!repository_path(dir).join("index").exists());

    Ok(())
}
