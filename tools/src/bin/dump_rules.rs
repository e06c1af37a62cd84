use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dearu_tools::load_tables;
use libdearu_core::ToneConverter;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

/// Print the static rule set in application order.
#[derive(Parser)]
struct Args {
    /// TOML tables file overlaid on the built-in tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Use only --tables
    #[arg(long, requires = "tables")]
    no_builtin: bool,

    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tables = load_tables(args.tables, !args.no_builtin)?;
    let converter = ToneConverter::new(tables).context("rule tables are invalid")?;
    let rules = converter.static_rules()?;

    let text = match args.format {
        Format::Json => rules.to_json_pretty()?,
        Format::Toml => toml::to_string(&rules)?,
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, text).with_context(|| format!("cannot write {}", path.display()))?;
            eprintln!("Wrote {} rules to {}", rules.len(), path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
