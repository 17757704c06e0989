//! Store Style Editor - live card styling for storefront themes
//!
//! Runs the terminal editor by default; the subcommands expose the same
//! style engine headlessly for scripts and tests.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use storestyle::cli::{ApplyArgs, CliError, ConfigArgs, RenderArgs, ScrollArgs};
use storestyle::constants::APP_NAME;
use storestyle::logging;

/// Store Style Editor - live card styling for storefront themes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the terminal editor (default)
    Edit(EditArgs),
    /// Render the preview attributes of a snapshot
    Render(RenderArgs),
    /// Apply control inputs to a snapshot
    Apply(ApplyArgs),
    /// Show the preview layout at a scroll offset
    Scroll(ScrollArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

/// Open the terminal editor
#[derive(Args, Debug, Default)]
struct EditArgs {
    /// Snapshot JSON file to load and write back (created on first write)
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => run_editor(&EditArgs::default(), cli.verbose),
        Some(Commands::Edit(args)) => run_editor(&args, cli.verbose),
        Some(command) => {
            logging::init_stderr(cli.verbose);
            let outcome = match command {
                Commands::Render(args) => args.execute(),
                Commands::Apply(args) => args.execute(),
                Commands::Scroll(args) => args.execute(),
                Commands::Config(args) => args.execute(),
                Commands::Edit(_) => Ok(()),
            };
            outcome.map_err(|e| report(&e))
        }
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

fn report(err: &CliError) -> i32 {
    eprintln!("Error: {err}");
    err.exit_code()
}

#[cfg(feature = "ratatui")]
fn run_editor(args: &EditArgs, verbose: bool) -> Result<(), i32> {
    launch_editor(args, verbose).map_err(|e| {
        eprintln!("Error: {e:#}");
        storestyle::cli::ExitCode::IoError.code()
    })
}

#[cfg(not(feature = "ratatui"))]
fn run_editor(_args: &EditArgs, _verbose: bool) -> Result<(), i32> {
    eprintln!("Error: {APP_NAME} was built without the terminal editor (feature `ratatui`)");
    Err(storestyle::cli::ExitCode::ValidationError.code())
}

#[cfg(feature = "ratatui")]
fn launch_editor(args: &EditArgs, verbose: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    use storestyle::cli::common::read_snapshot;
    use storestyle::config::Config;
    use storestyle::editor::EditorController;
    use storestyle::tui;

    let config = Config::load()?;
    let _log_guard = logging::init_file(&Config::log_dir()?, verbose)?;

    let snapshot_path = args.snapshot.clone().or_else(|| config.paths.snapshot.clone());
    let editor = match snapshot_path.as_deref().filter(|p| p.exists()) {
        Some(path) => {
            let snapshot = read_snapshot(path)?;
            EditorController::from_snapshot(&snapshot, config.editor_settings())
                .context(format!("Invalid snapshot: {}", path.display()))?
        }
        None => EditorController::new(config.editor_settings()),
    };
    tracing::info!(
        app = APP_NAME,
        snapshot = ?snapshot_path,
        "editor session started"
    );

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(editor, snapshot_path, config);

    let result = tui::run_tui(&mut app_state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}
