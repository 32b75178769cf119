//! qrlogo - Generate a QR code with an optional centred logo.

use clap::Parser;
use log::LevelFilter;
use qrlogo::encoder::{render_terminal, QrConfig};
use qrlogo::helper::{self, LogoOutcome};
use qrlogo::viewer;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrlogo")]
#[command(version)]
#[command(about = "Generate a QR code with an optional logo", long_about = None)]
struct Cli {
    /// The data to encode in the QR code (e.g., a URL)
    data: String,

    /// Path to a logo image to place at the centre
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output filename; the extension selects the image format
    #[arg(long, default_value = "python_qr.png")]
    output: PathBuf,

    /// Do not open the result in the image viewer
    #[arg(long)]
    no_show: bool,

    /// Also print the QR code to the terminal
    #[arg(long)]
    print: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();
}

fn run(cli: &Cli) -> qrlogo::Result<()> {
    let config = QrConfig::default();

    if cli.print {
        print!("{}", render_terminal(&cli.data, &config)?);
    }

    let out = helper::generate(&cli.data, cli.logo.as_deref(), &config)?;
    if let LogoOutcome::Missing(path) = &out.logo {
        println!("Warning: {} not found. Generating QR without logo.", path.display());
    }

    helper::save(&out.image, &cli.output)?;
    println!("QR Code saved as '{}'", cli.output.display());

    if !cli.no_show {
        if let Err(e) = viewer::show(&cli.output) {
            log::warn!("{e}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
