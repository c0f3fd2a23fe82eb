use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pathpick_match::{Matcher, SearchOptions};
use pathpick_scan::{FileScanner, ScanOptions};

mod pipe;

#[derive(Parser)]
#[command(name = "pathpick")]
#[command(about = "Abbreviation-driven fuzzy path picker", long_about = None)]
#[command(version)]
struct Cli {
    /// Abbreviation to match candidate paths against
    #[arg(required_unless_present = "pipe")]
    abbrev: Option<String>,

    /// Directory to scan for candidates
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Maximum number of matches to print (0 = all)
    #[arg(long, default_value_t = 0)]
    limit: usize,

    /// Stop scanning after this many files
    #[arg(long, default_value_t = 10_000)]
    max_files: usize,

    /// Print matches as a JSON array instead of one per line
    #[arg(long)]
    json: bool,

    /// Serve JSON queries from stdin, one object per line
    #[arg(long, conflicts_with = "abbrev")]
    pipe: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    // Stdout carries results (and JSON in pipe mode); keep logs on stderr and
    // quiet unless asked.
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if cli.quiet || cli.json || cli.pipe {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.target(env_logger::Target::Stderr).init();

    let scanner = FileScanner::with_options(
        &cli.root,
        ScanOptions {
            max_files: cli.max_files,
        },
    );
    let mut matcher = Matcher::new(scanner);

    if cli.pipe {
        return pipe::serve(&mut matcher, io::stdin().lock(), io::stdout().lock());
    }

    let Some(abbrev) = cli.abbrev else {
        anyhow::bail!("an abbreviation is required unless --pipe is given");
    };
    let matches = matcher.sorted_matches_for(&abbrev, &SearchOptions::with_limit(cli.limit));

    let mut stdout = io::stdout().lock();
    if cli.json {
        writeln!(stdout, "{}", serde_json::to_string(&matches)?)?;
    } else {
        for path in &matches {
            writeln!(stdout, "{path}")?;
        }
    }
    Ok(())
}
