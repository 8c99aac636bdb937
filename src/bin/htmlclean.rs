//! Command-line host for the cleaner.
//!
//! Reads HTML from a file or stdin, cleans it and writes the result to stdout,
//! a file, or back into the input file.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use html_email_clean::{clean_bytes, Config, Error};

#[derive(Parser, Debug)]
#[command(name = "htmlclean")]
#[command(about = "Simplify HTML into an email-safe subset")]
struct Args {
    /// HTML file to clean (default: stdin)
    #[arg()]
    input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Overwrite the input file with the cleaned HTML
    #[arg(short = 'i', long = "in-place", requires = "input")]
    in_place: bool,

    /// JSON configuration file; missing fields take their defaults
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config")]
    print_config: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Error> {
    match path {
        Some(path) => Config::from_json(&fs::read_to_string(path)?),
        None => Ok(Config::default()),
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>, Error> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = load_config(args.config.as_ref())?;
    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let html = read_input(args.input.as_ref())?;
    let cleaned = clean_bytes(&html, &config);

    let target = if args.in_place {
        args.input.as_ref()
    } else {
        args.output.as_ref()
    };
    match target {
        Some(path) => fs::write(path, cleaned + "\n")?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{cleaned}")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("htmlclean: {err}");
            ExitCode::FAILURE
        }
    }
}
