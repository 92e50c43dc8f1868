use anyhow::Result;
use clap::{Parser, Subcommand};
use confdiff::domain::review::{DiffLimits, PushTargets, ReviewStatus, ViewMode};
use confdiff::terminal::console::Console;
use confdiff::terminal::pager::PagerWriter;
use is_terminal::IsTerminal;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "confdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Review proposed configuration edits as character-level diffs",
    long_about = "Renders the difference between two versions of a configuration file \
    as a unified or side-by-side view, and emits the review decisions \
    (approve, reject, push, delete) as JSON intents for the backend.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    verbose: bool,
    #[arg(long, global = true, help = "Largest text, in bytes, that is still diffed")]
    max_bytes: Option<usize>,
    #[arg(long, global = true, help = "Largest text, in lines, that is still diffed")]
    max_lines: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the difference between two files",
        long_about = "This command prints a character-level diff of two text files, \
        either as unified rows or as two side-by-side panes."
    )]
    Diff {
        #[arg(index = 1, help = "The original text")]
        old: PathBuf,
        #[arg(index = 2, help = "The proposed text")]
        new: PathBuf,
        #[arg(short, long, default_value = "unified", help = "unified or split")]
        mode: ViewMode,
    },
    #[command(
        name = "stats",
        about = "Count added and removed characters between two files"
    )]
    Stats {
        #[arg(index = 1)]
        old: PathBuf,
        #[arg(index = 2)]
        new: PathBuf,
    },
    #[command(
        name = "review",
        about = "Render a modification record",
        long_about = "This command reads a modification record (JSON with file_path, action, \
        content_before and content_after) and prints its diff with a summary header."
    )]
    Review {
        #[arg(index = 1, help = "Path to the modification record")]
        record: PathBuf,
        #[arg(short, long, default_value = "unified", help = "unified or split")]
        mode: ViewMode,
        #[arg(short, long, default_value = "pending", help = "The current review status")]
        status: ReviewStatus,
    },
    #[command(name = "approve", about = "Emit an approval intent")]
    Approve {
        #[arg(index = 1)]
        id: String,
        #[arg(short, long, help = "Optional review comment")]
        comment: Option<String>,
    },
    #[command(name = "reject", about = "Emit a rejection intent")]
    Reject {
        #[arg(index = 1)]
        id: String,
        #[arg(short, long, help = "Optional review comment")]
        comment: Option<String>,
    },
    #[command(
        name = "push",
        about = "Emit a push intent for an approved modification",
        long_about = "This command emits a push intent. At least one of --server or --github is required."
    )]
    Push {
        #[arg(index = 1)]
        id: String,
        #[arg(long, help = "Push to the configuration server")]
        server: bool,
        #[arg(long, help = "Push to GitHub")]
        github: bool,
        #[arg(short = 'm', long, help = "Optional commit message")]
        message: Option<String>,
    },
    #[command(name = "delete", about = "Emit a delete intent")]
    Delete {
        #[arg(index = 1)]
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let limits = DiffLimits::from_env()?.with_overrides(cli.max_bytes, cli.max_lines);

    match &cli.command {
        Commands::Diff { old, new, mode } => {
            with_pager(limits, |console| console.diff(old, new, *mode))?
        }
        Commands::Stats { old, new } => stdout_console(limits).stats(old, new)?,
        Commands::Review {
            record,
            mode,
            status,
        } => with_pager(limits, |console| console.review(record, *mode, *status))?,
        Commands::Approve { id, comment } => {
            stdout_console(limits).approve(id, comment.clone())?
        }
        Commands::Reject { id, comment } => stdout_console(limits).reject(id, comment.clone())?,
        Commands::Push {
            id,
            server,
            github,
            message,
        } => stdout_console(limits).push(
            id,
            PushTargets::from_flags(*server, *github),
            message.clone(),
        )?,
        Commands::Delete { id } => stdout_console(limits).delete(id)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn stdout_console(limits: DiffLimits) -> Console {
    Console::new(Box::new(std::io::stdout()), limits)
}

// long diffs go through the pager unless stdout is redirected or NO_PAGER is set
fn with_pager(limits: DiffLimits, command: impl FnOnce(&Console) -> Result<()>) -> Result<()> {
    if std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none() {
        let pager = minus::Pager::new();
        let console = Console::new(Box::new(PagerWriter::new(pager.clone())), limits);

        command(&console)?;
        minus::page_all(pager)?;
    } else {
        let console = stdout_console(limits);

        command(&console)?;
        console.writer().flush()?;
    }

    Ok(())
}
