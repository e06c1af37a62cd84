use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use libdearu::{DearuConfig, FileSink, FileSource, StdinSource, StdoutSink, TextSink, TextSource};
use libdearu_core::logging::init_tracing;
use tracing::debug;

#[derive(Parser)]
#[command(name = "dearu")]
#[command(about = "Rewrite Japanese polite-register text (です・ます) in assertive register (だ・である)")]
#[command(version)]
struct Cli {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML rule tables overlaid on the built-in tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Do not load the built-in tables (requires --tables)
    #[arg(long, requires = "tables")]
    no_builtin: bool,

    /// Print the conversion report as JSON on stderr
    #[arg(long)]
    report: bool,

    /// Log every rule that fires
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = DearuConfig::default();
    if let Some(path) = cli.tables {
        config = config.with_tables(path);
    }
    if cli.no_builtin {
        config = config.without_builtin();
    }
    let converter = config.build_converter().context("failed to load rule tables")?;

    let mut source: Box<dyn TextSource> = match cli.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(StdinSource),
    };
    let mut sink: Box<dyn TextSink> = match cli.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(StdoutSink),
    };
    debug!(source = %source.name(), sink = %sink.name(), "channels ready");

    let report = converter
        .run(source.as_mut(), sink.as_mut())
        .context("conversion failed")?;

    if cli.report {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        eprintln!("{}", json);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
