//! slipslope CLI - Slippery-Slope Markdown to HTML

use std::fs::{self, File};
use std::io::{self, BufWriter, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};

use slipslope::{Error, Result};

#[derive(Parser)]
#[command(name = "slipslope")]
#[command(version, about = "Translate Slippery-Slope Markdown to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    slipslope notes.ssmd              Print HTML to stdout
    slipslope notes.ssmd -o out.html  Write HTML to a file
    cat notes.ssmd | slipslope        Read from stdin")]
struct Cli {
    /// Input file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the flag.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(cli.input.as_ref())?;
    info!("read {} bytes", input.len());

    let written = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            slipslope::translate_to_writer(BufWriter::new(file), &input).map_err(|e| match e {
                Error::Io(source) => Error::Write {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?
        }
        None => slipslope::translate_to_writer(BufWriter::new(io::stdout().lock()), &input)?,
    };

    info!("wrote {written} bytes");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read(path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        }),
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
