use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn};
use homeview::console::{self, Mode};
use homeview::core::LoanStatus;
use homeview::core::config::{self, CliOverrides, HomeviewConfig, ResolvedConfig};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "homeview", about = "Prints home screen section layouts")]
struct Args {
    /// Config file to read instead of ~/.homeview/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build and print one view model (default)
    Show(ShowArgs),
    /// Print the report for every account state and loan status
    All,
    /// Walk through enumeration and equality of the model types
    Demo,
}

#[derive(clap::Args, Default)]
struct ShowArgs {
    /// Treat the account as active
    #[arg(long, conflicts_with = "inactive")]
    active: bool,

    /// Treat the account as closed
    #[arg(long)]
    inactive: bool,

    /// Loan status to show
    #[arg(short, long, value_enum)]
    loan_status: Option<LoanStatus>,
}

impl ShowArgs {
    fn active_override(&self) -> Option<bool> {
        match (self.active, self.inactive) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn init_logging(resolved: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match &resolved.log_file {
        Some(path) => match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
            }
            Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
        },
        None => {
            let _ = TermLogger::init(
                resolved.log_level,
                log_config,
                TerminalMode::Stderr,
                ColorChoice::Auto,
            );
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (mode, show) = match args.command {
        None => (Mode::Show, ShowArgs::default()),
        Some(Command::Show(show)) => (Mode::Show, show),
        Some(Command::All) => (Mode::All, ShowArgs::default()),
        Some(Command::Demo) => (Mode::Demo, ShowArgs::default()),
    };

    // The logger depends on the config, so load errors are reported after init
    let (file_config, load_error) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => (loaded, None),
        Err(e) => (HomeviewConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            active: show.active_override(),
            loan_status: show.loan_status,
            verbosity: args.verbose,
        },
    );

    init_logging(&resolved);
    if let Some(e) = load_error {
        warn!("{e}; using default config");
    }
    info!("Homeview starting with {:?}", resolved);

    let stdout = std::io::stdout();
    console::run(mode, &resolved, &mut stdout.lock())
}
