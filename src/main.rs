//! ballout-kicad: converts a vendor ballout CSV into KiCad schematic symbols.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use ballout_kicad::ballout::{BallTable, BalloutError, BalloutResult};
use ballout_kicad::config;
use ballout_kicad::generator::{self, GeneratorOptions};
use ballout_kicad::kicad::writer;

/// Converts a vendor ballout table into KiCad schematic symbols.
///
/// One symbol is produced per package column, with one unit per IO bank.
#[derive(Parser, Debug)]
#[command(name = "ballout-kicad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the ballout CSV file
    #[arg(value_name = "CSV_FILE")]
    csv: PathBuf,

    /// Part name, used as the symbol name prefix
    #[arg(value_name = "PART")]
    part: String,

    /// Only generate the symbol for this package
    #[arg(value_name = "PACKAGE")]
    package: Option<String>,

    /// Write symbols to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Print the package names found in the table and exit
    #[arg(long)]
    list_packages: bool,

    /// Print the parsed pads of the selected package(s) to stderr
    #[arg(long)]
    dump_pads: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber. Logs go to stderr; stdout is reserved
/// for symbol records.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses the table, builds the requested symbols and writes them out.
///
/// Everything is rendered before the first byte is written, so a failure
/// leaves no partial output.
fn run(args: &Args, options: &GeneratorOptions) -> BalloutResult<()> {
    let table = BallTable::open(&args.csv)?;
    info!(
        path = %args.csv.display(),
        pads = table.len(),
        packages = table.packages().len(),
        "Loaded ballout table"
    );

    if args.list_packages {
        let mut stdout = std::io::stdout().lock();
        for name in table.package_names() {
            writeln!(stdout, "{name}").map_err(|e| BalloutError::file_write("<stdout>", e))?;
        }
        return Ok(());
    }

    let symbols = match &args.package {
        Some(package) => vec![generator::generate_symbol(
            &table,
            &args.part,
            package,
            options,
        )?],
        None => generator::generate_all(&table, &args.part, options)?,
    };

    if args.dump_pads {
        let packages: Vec<String> = match &args.package {
            Some(package) => vec![table.resolve_package(package)?.to_string()],
            None => table.package_names().into_iter().collect(),
        };
        for package in &packages {
            eprintln!("=== {package} ===");
            for pad in table.signals_for_package(package)? {
                eprintln!("{pad}");
            }
        }
    }

    let mut rendered = String::new();
    for symbol in &symbols {
        rendered.push_str(&writer::encode_symbol(symbol));
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| BalloutError::file_write(path, e))?;
            info!(path = %path.display(), symbols = symbols.len(), "Wrote symbols");
        }
        None => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(|e| BalloutError::file_write("<stdout>", e))?,
    }

    Ok(())
}

/// Entry point for the ballout-kicad converter.
fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    let options = GeneratorOptions::from(&cfg.symbol);

    match run(&args, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Conversion failed");
            ExitCode::FAILURE
        }
    }
}
