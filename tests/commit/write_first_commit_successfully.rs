use crate::common::{
    HELLO_BLOB, init_repository_dir, read_object, read_ref, repository_path, run_mygit_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn write_first_commit_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("a.txt"), "hello\n")?;
    run_mygit_command(dir, &["add", "alice", "a.txt"])
        .assert()
        .success();

    run_mygit_command(dir, &["commit", "alice", "Alice", "init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Committed to 'main' with hash [0-9a-f]{40}\n$",
        )?);

    let repository_path = repository_path(dir);
    assert_eq!(
        std::fs::read(repository_path.join("objects").join(HELLO_BLOB))?,
        b"hello\n"
    );
    assert!(!repository_path.join("index").exists());

    let head = read_ref(dir, "main");
    assert!(regex::Regex::new(r"^[0-9a-f]{40}$")?.is_match(&head));

    let commit = read_object(dir, &head);
    assert_eq!(commit["tree"], json!({ "a.txt": HELLO_BLOB }));
    assert_eq!(commit["parent"], "");
    assert_eq!(commit["author"], "Alice");
    assert_eq!(commit["message"], "init");

    Ok(())
}

#[rstest]
fn commit_object_is_indented_json_hashed_as_stored(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("a.txt"), "hello\n")?;
    run_mygit_command(dir, &["add", "alice", "a.txt"])
        .assert()
        .success();
    run_mygit_command(dir, &["commit", "alice", "Alice", "init"])
        .assert()
        .success();

    let head = read_ref(dir, "main");
    let stored = std::fs::read_to_string(repository_path(dir).join("objects").join(&head))?;

    assert!(stored.starts_with("{\n  \"message\": \"init\",\n  \"timestamp\": \""));
    assert!(stored.ends_with(&format!(
        "\"author\": \"Alice\",\n  \"tree\": {{\n    \"a.txt\": \"{HELLO_BLOB}\"\n  }},\n  \"parent\": \"\"\n}}"
    )));

    let digest = sha1_hex(stored.as_bytes());
    assert_eq!(digest, head);

    Ok(())
}

#[rstest]
fn second_commit_links_to_the_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    crate::common::commit_file(dir, "a.txt", "one", "first");
    let first = read_ref(dir, "main");
    crate::common::commit_file(dir, "b.txt", "two", "second");
    let second = read_ref(dir, "main");

    let commit = read_object(dir, &second);
    assert_eq!(commit["parent"], first.as_str());
    // the tree only holds what was staged for this commit
    assert_eq!(commit["tree"].as_object().map(|tree| tree.len()), Some(1));

    Ok(())
}

fn sha1_hex(content: &[u8]) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
