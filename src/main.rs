use anyhow::Result;
use clap::Parser;
use ldiff::areas::session::Session;
use ldiff::areas::workspace::{DEFAULT_MAX_BYTES, DEFAULT_MAX_LINES, ReadLimits};
use ldiff::artifacts::core::{PagerWriter, pager_enabled};
use ldiff::artifacts::diff::DEFAULT_CONTEXT;
use ldiff::commands::porcelain::diff::DiffOptions;
use ldiff::{ColorChoice, LOG_ENV};
use minus::Pager;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ldiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two files line by line",
    long_about = "Prints the differences between two text files as a unified diff, \
    computed with Myers' linear-space O(ND) algorithm. \
    Exits with 0 when the files are identical, 1 when they differ and 2 on trouble.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    old: PathBuf,
    #[arg(index = 2, help = "The changed file")]
    new: PathBuf,
    #[arg(
        short = 'U',
        long = "unified",
        value_name = "NUM",
        default_value_t = DEFAULT_CONTEXT,
        help = "Output NUM lines of unified context"
    )]
    context: usize,
    #[arg(short = 'N', long = "new-file", help = "Treat absent files as empty")]
    new_file: bool,
    #[arg(long, default_value_t = DEFAULT_MAX_LINES, help = "Refuse inputs with more lines than this")]
    max_lines: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES, help = "Refuse inputs larger than this many bytes")]
    max_bytes: u64,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to colorize the output")]
    color: ColorChoice,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err) => {
            eprintln!("ldiff: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    cli.color.apply();

    let pwd = std::env::current_dir()?;
    let opts = DiffOptions::new(
        cli.context,
        cli.new_file,
        ReadLimits::new(cli.max_lines, cli.max_bytes),
    );

    if !pager_enabled() {
        let session = Session::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;
        return session.diff(&cli.old, &cli.new, &opts);
    }

    let pager = Pager::new();
    let session = Session::new(
        &pwd.to_string_lossy(),
        Box::new(PagerWriter::new(pager.clone())),
    )?;
    let changed = session.diff(&cli.old, &cli.new, &opts)?;

    if changed {
        minus::page_all(pager)?;
    }

    Ok(changed)
}
