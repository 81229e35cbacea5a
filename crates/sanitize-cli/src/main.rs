use clap::{ArgAction, Parser};
use colored::Colorize;
use env_logger::Env;
use sanitize_core::{CleanOpts, Locator, SanitizeError, clean_save};
use std::path::PathBuf;
use std::process::ExitCode;

mod prompt;
mod report;

use prompt::TerminalPrompt;

#[derive(Parser, Debug)]
#[command(
    name = "sanitize",
    about = "Remove accumulated trash and generator items from a Schedule I save",
    version
)]
struct Cli {
    /// Save-data root (defaults to %USERPROFILE%/AppData/LocalLow/TVGS/Schedule I/Saves)
    #[arg(long, env = "SANITIZE_SAVES_ROOT", value_name = "DIR")]
    saves_root: Option<PathBuf>,
    /// Report what would be removed without rewriting any file
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    report::banner();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_nothing_found() => {
            println!("{}", e.to_string().red().bold());
            ExitCode::SUCCESS
        }
        Err(SanitizeError::Cancelled) => {
            eprintln!("{}", "Cancelled".bright_black());
            ExitCode::from(130)
        }
        Err(e) => {
            eprintln!("{}", format!("\nError: {}", e).red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SanitizeError> {
    let locator = match &cli.saves_root {
        Some(root) => Locator::new(root),
        None => Locator::from_env(),
    };
    log::info!("saves root: {}", locator.root().display());

    let mut prompt = TerminalPrompt::default();
    let save = locator.resolve(&mut prompt)?;

    report::processing(&save.organisation_name);
    let opts = CleanOpts {
        dry_run: cli.dry_run,
    };
    let clean = clean_save(&save.save_path, opts);
    report::clean_report(&clean, cli.dry_run);
    report::summary(clean.stats(), cli.dry_run);
    Ok(())
}
