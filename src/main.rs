mod config;
mod locate;
mod render;

use anyhow::Result;
use clap::Parser;
use ics_earliest_core::{Calendar, Extreme, LogDiagnostics, TimestampField};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ics-earliest")]
#[command(about = "Find the earliest event in an .ics calendar export")]
struct Cli {
    /// Path to an .ics file, or a file name to look up in the search directory.
    /// Prompts when omitted.
    file: Option<String>,

    /// Timestamp field to compare (start, end, created)
    #[arg(short, long)]
    field: Option<TimestampField>,

    /// Pick the smallest (min) or largest (max) value
    #[arg(short, long)]
    extreme: Option<Extreme>,

    /// Print the selected event as JSON
    #[arg(long)]
    json: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let cfg = config::load_config()?;
    let search_dir = config::expand_path(&cfg.search_dir);

    let path = match cli.file {
        Some(input) => {
            let path = locate::resolve_input(&input, &search_dir);
            if !path.is_file() {
                anyhow::bail!("{} is not a valid .ics file.", path.display());
            }
            path
        }
        None => {
            println!("\nHello! I will help you find the earliest event in your .ics file.\n");
            locate::prompt_for_path(&search_dir)?
        }
    };
    tracing::debug!(path = %path.display(), "Using calendar file");

    let lines = locate::read_lines(&path)?;
    let calendar = Calendar::parse(&lines, &mut LogDiagnostics);

    let field = cli.field.unwrap_or(cfg.field);
    let extreme = cli.extreme.unwrap_or(cfg.extreme);
    let selected = calendar.select(field, extreme);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        println!();
        println!("{}", render::render_selection(&calendar, selected));
    }

    Ok(())
}

/// Log to stderr, filtered by RUST_LOG (warn by default so date diagnostics show)
fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "ics_earliest=debug,ics_earliest_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))
}
