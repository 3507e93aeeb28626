mod format;
mod report;
mod scanner;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use log::debug;
use std::fs;
use std::path::PathBuf;

use types::SortOrder;

#[derive(Parser, Debug)]
#[command(name = "du", version, about = "Summarize disk usage of the set of FILEs.", long_about = None)]
struct Cli {
    /// Sort entries in ascending order instead of the default descending
    #[arg(long = "asc")]
    ascending: bool,

    /// File or directory to summarize
    path: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            print!("{err}");
            std::process::exit(0);
        }
        Err(err) => {
            // Usage goes to stdout, for help requests and bad invocations alike.
            print!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "error:".red());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let order = if cli.ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };

    let metadata = fs::metadata(&cli.path)
        .with_context(|| format!("cannot stat {}", cli.path.display()))?;

    let mut entries = if metadata.is_dir() {
        debug!("target {} is a directory", cli.path.display());
        scanner::list_dir(&cli.path)?
    } else if metadata.is_file() {
        debug!("target {} is a regular file", cli.path.display());
        vec![scanner::file_entry(&cli.path, &metadata)]
    } else {
        // Sockets, devices and other special files are not reported.
        Vec::new()
    };

    report::sort_entries(&mut entries, order);

    let rendered = report::render(&entries);
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
