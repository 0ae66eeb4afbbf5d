use std::str::FromStr;

/// Commands each role may run
pub const ROLE_PERMISSIONS: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "admin" => &[
        "init", "add", "commit", "status", "log", "branch", "create-branch", "checkout", "push", "pull",
    ],
    "developer" => &["add", "commit", "status", "log", "branch"],
    "viewer" => &["status", "log"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Developer,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Developer => "developer",
            Role::Viewer => "viewer",
        }
    }

    pub fn allows(&self, command: Command) -> bool {
        ROLE_PERMISSIONS
            .get(self.as_str())
            .is_some_and(|commands| commands.contains(&command.as_str()))
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(role: &str) -> Result<Self, Self::Err> {
        match role {
            "admin" => Ok(Role::Admin),
            "developer" => Ok(Role::Developer),
            "viewer" => Ok(Role::Viewer),
            _ => anyhow::bail!("unknown role '{}'", role),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Commands known to the role table
///
/// `Push` and `Pull` have no local implementation but remain part of the
/// admin allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Init,
    Add,
    Commit,
    Status,
    Log,
    Branch,
    CreateBranch,
    Checkout,
    Push,
    Pull,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::Init,
        Command::Add,
        Command::Commit,
        Command::Status,
        Command::Log,
        Command::Branch,
        Command::CreateBranch,
        Command::Checkout,
        Command::Push,
        Command::Pull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Add => "add",
            Command::Commit => "commit",
            Command::Status => "status",
            Command::Log => "log",
            Command::Branch => "branch",
            Command::CreateBranch => "create-branch",
            Command::Checkout => "checkout",
            Command::Push => "push",
            Command::Pull => "pull",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
