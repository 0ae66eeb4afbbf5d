use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use mygit::areas::repository::Repository;
use mygit::artifacts::branch::branch_name::BranchName;
use mygit::artifacts::core::config::{PolicyFallback, RepositoryConfig};
use mygit::artifacts::core::error::ErrorKind;
use mygit::commands::porcelain::log::LogOptions;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mygit",
    version = "0.1.0",
    about = "A minimal local version-control system with role-based access",
    long_about = "mygit keeps content-addressed objects, branches and a staging area \
    under a .mygit directory. Every command runs on behalf of a user whose role, \
    read from .mygit/roles.json, decides which commands are allowed.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "MYGIT_WORK_TREE",
        help = "Repository root (defaults to the closest ancestor holding .mygit)"
    )]
    work_tree: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        env = "MYGIT_BRANCH_POLICY_FALLBACK",
        default_value_t = PolicyFallback::Allow,
        help = "Answer of branch checks when branch_permissions.json is missing or unreadable"
    )]
    branch_policy_fallback: PolicyFallback,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .mygit directory layout and points HEAD at main. \
        Existing files are left untouched."
    )]
    Init {
        #[arg(index = 1, help = "The user running the command")]
        username: String,
    },
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1, help = "The user running the command")]
        username: String,
        #[arg(index = 2, help = "The file to stage")]
        file: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Record the staged files on the current branch",
        long_about = "This command creates a commit from the staging area, advances the current \
        branch and clears the staging area."
    )]
    Commit {
        #[arg(index = 1, help = "The user running the command")]
        username: String,
        #[arg(index = 2, help = "The commit author")]
        author: String,
        #[arg(index = 3, help = "The commit message")]
        message: String,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status {
        #[arg(index = 1, help = "The user running the command")]
        username: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command walks the parent chain of the current branch, newest commit first."
    )]
    Log {
        #[arg(index = 1, help = "The user running the command")]
        username: String,
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
        #[arg(long, help = "Walk this branch instead of the current one")]
        branch: Option<String>,
    },
    #[command(name = "branch", about = "List branches")]
    Branch {
        #[arg(index = 1, help = "The user running the command")]
        username: String,
    },
    #[command(
        name = "create-branch",
        about = "Create a branch at the head of the current branch"
    )]
    CreateBranch {
        #[arg(index = 1, help = "The user running the command")]
        username: String,
        #[arg(index = 2, help = "The name of the new branch")]
        name: String,
    },
    #[command(
        name = "checkout",
        about = "Switch the current branch",
        long_about = "This command points HEAD at an existing branch. \
        Working tree files are not modified."
    )]
    Checkout {
        #[arg(index = 1, help = "The user running the command")]
        username: String,
        #[arg(index = 2, help = "The branch to switch to")]
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MYGIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let mut stdout = std::io::stdout();
            let line = match ErrorKind::of(&error) {
                ErrorKind::Denied => format!("{error}"),
                _ => format!("error: {error:#}"),
            };
            tracing::debug!(kind = ?ErrorKind::of(&error), "command failed");

            // the diagnostic goes to stdout with the rest of the command output
            let _ = writeln!(stdout, "{line}");
            let _ = stdout.flush();

            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let pwd = std::env::current_dir()?;
    let config = RepositoryConfig::discover(cli.work_tree, &pwd, cli.branch_policy_fallback);
    if let Commands::Init { .. } = cli.command {
        config.create_work_tree()?;
    }
    let repository = Repository::new(&config, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Init { username } => repository.init(username)?,
        Commands::Add { username, file } => repository.add(username, file)?,
        Commands::Commit {
            username,
            author,
            message,
        } => repository.commit(username, author, message)?,
        Commands::Status { username } => repository.status(username)?,
        Commands::Log {
            username,
            oneline,
            branch,
        } => {
            let opts = LogOptions { oneline: *oneline };

            match branch {
                Some(branch) => {
                    let branch = BranchName::try_parse(branch.clone())?;
                    repository.log_branch(username, &branch, &opts)?
                }
                None => repository.log(username, &opts)?,
            }
        }
        Commands::Branch { username } => repository.branch(username)?,
        Commands::CreateBranch { username, name } => repository.create_branch(username, name)?,
        Commands::Checkout { username, name } => repository.checkout(username, name)?,
    }

    repository.writer().flush()?;

    Ok(())
}
