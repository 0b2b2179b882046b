use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use snapvc::commands::printer::Printer;
use snapvc::{Repository, RepositoryLayout};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AUTHOR_ENV_VARS: [&str; 3] = ["SNAP_AUTHOR_NAME", "USER", "USERNAME"];
const UNKNOWN_AUTHOR: &str = "unknown";

#[derive(Parser)]
#[command(
    name = "snap",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A local, snapshot-based version control system",
    long_about = "snap records snapshots of staged files as commits on named branches. \
    Everything lives in a metadata directory next to your files; there is no remote.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command copies files into the staging area. \
        Directories are staged recursively; ignored paths are skipped."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(
            short,
            long,
            help = "The commit author (defaults to $SNAP_AUTHOR_NAME, then $USER)"
        )]
        author: Option<String>,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged files and working files that are untracked or modified."
    )]
    Status,
    #[command(
        name = "log",
        about = "Show the commit history of the current branch"
    )]
    Log,
    #[command(
        name = "branch",
        about = "List branches or create a new one",
        long_about = "Without a name, this command lists every branch and marks the current one. \
        With a name, it creates a new empty branch."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(name = "checkout", about = "Switch to another branch")]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
}

impl Commands {
    fn verb(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "Repository initialization",
            Commands::Add { .. } => "Staging",
            Commands::Commit { .. } => "Commit",
            Commands::Status => "Status",
            Commands::Log => "Log",
            Commands::Branch { .. } => "Branch",
            Commands::Checkout { .. } => "Checkout",
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} failed: {:#}", cli.command.verb(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands) -> Result<()> {
    let mut printer = Printer::new(std::io::stdout().lock());

    match command {
        Commands::Init { path } => {
            let root = match path {
                Some(path) => path.clone(),
                None => std::env::current_dir()?,
            };
            let repository = Repository::init(&root, RepositoryLayout::default())?;

            printer.initialized(&repository.repo_path())?
        }
        Commands::Add { paths } => {
            let mut repository = open_current()?;
            repository.stage(paths.as_slice())?;

            printer.staged()?
        }
        Commands::Commit { message, author } => {
            let mut repository = open_current()?;
            let author = author.clone().unwrap_or_else(default_author);
            let commit = repository.commit(message, &author)?;

            printer.commit(commit.as_ref())?
        }
        Commands::Status => {
            let repository = open_current()?;
            let status = repository.status()?;

            printer.status(repository.current_branch().name(), &status)?
        }
        Commands::Log => {
            let repository = open_current()?;
            let commits = repository.log()?;

            printer.log(&commits)?
        }
        Commands::Branch { name: Some(name) } => {
            let mut repository = open_current()?;
            let branch = repository.create_branch(name)?;

            printer.branch_created(branch.name())?
        }
        Commands::Branch { name: None } => {
            let repository = open_current()?;

            printer.branches(&repository.branches(), repository.current_branch().name())?
        }
        Commands::Checkout { name } => {
            let mut repository = open_current()?;
            repository.switch_branch(name)?;

            printer.switched(repository.current_branch().name())?
        }
    }

    Ok(())
}

fn open_current() -> Result<Repository> {
    let pwd = std::env::current_dir().context("Unable to read the current directory")?;

    Ok(Repository::open(&pwd, RepositoryLayout::default())?)
}

fn default_author() -> String {
    AUTHOR_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}
