use crate::common::{
    HELLO_BLOB, init_repository_dir, object_count, repository_path, run_mygit_command, write_roles,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn viewer_cannot_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("a.txt"), "hello\n")?;
    run_mygit_command(dir, &["add", "alice", "a.txt"])
        .assert()
        .success();
    write_roles(dir, r#"{"bob": "viewer"}"#);
    let index_before = std::fs::read(repository_path(dir).join("index"))?;
    let objects_before = object_count(dir);

    run_mygit_command(dir, &["commit", "bob", "Bob", "x"])
        .assert()
        .failure()
        .code(1)
        .stdout("access denied: user 'bob' is not allowed to run 'commit'\n");

    assert_eq!(object_count(dir), objects_before);
    assert_eq!(std::fs::read(repository_path(dir).join("index"))?, index_before);
    assert!(!repository_path(dir).join("refs").join("heads").join("main").exists());

    Ok(())
}

#[rstest]
#[case("dave", "checkout", false)]
#[case("dave", "status", true)]
#[case("bob", "branch", false)]
#[case("bob", "log", true)]
#[case("mallory", "status", false)]
fn commands_follow_the_role_table(
    init_repository_dir: TempDir,
    #[case] user: &str,
    #[case] command: &str,
    #[case] allowed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let args: Vec<&str> = match command {
        "checkout" => vec![command, user, "main"],
        _ => vec![command, user],
    };

    let assert = run_mygit_command(dir, &args).assert();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert_eq!(
        stdout.starts_with("access denied:"),
        !allowed,
        "unexpected output for {user} {command}: {stdout}"
    );

    Ok(())
}

#[rstest]
fn missing_role_file_denies_every_command(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::remove_file(repository_path(dir).join("roles.json"))?;
    std::fs::write(dir.join("a.txt"), "hello\n")?;

    for args in [
        vec!["status", "alice"],
        vec!["log", "alice"],
        vec!["add", "alice", "a.txt"],
    ] {
        run_mygit_command(dir, &args)
            .assert()
            .failure()
            .code(1);
    }

    assert!(!repository_path(dir).join("objects").join(HELLO_BLOB).exists());

    Ok(())
}
