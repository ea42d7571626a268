use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pagescript::{InterpreterConfig, PdfBackend, run_script};

#[derive(Parser)]
#[command(name = "pagescript")]
#[command(about = "Render a pagescript document script to PDF")]
struct Cli {
    /// Script file to interpret
    script: PathBuf,

    /// Write the PDF here instead of the script's `output` path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep column widths / page breaks exactly as scripted, even when
    /// a table overflows the page
    #[arg(long)]
    no_table_fit: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let source = match fs::read_to_string(&cli.script) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot read {}: {e}", cli.script.display());
            return ExitCode::FAILURE;
        }
    };

    let config = InterpreterConfig {
        fit_table_width: !cli.no_table_fit,
        break_oversize_table: !cli.no_table_fit,
        ..Default::default()
    };

    let mut backend = PdfBackend::new();
    match run_script(&source, &mut backend, &config, cli.output.as_deref()) {
        Ok(path) => {
            println!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
