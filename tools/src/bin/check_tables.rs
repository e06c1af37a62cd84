use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dearu_tools::{load_tables, TableCheck};

/// Check a tables file for unknown patterns and rule-order problems.
#[derive(Parser)]
struct Args {
    /// TOML tables file to check (the built-in tables when omitted)
    tables: Option<PathBuf>,

    /// Check the file layered over the built-in tables
    #[arg(long)]
    overlay: bool,

    /// List every substring pair, not only the ones that change output
    #[arg(long)]
    all_hazards: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> Result<bool> {
    let builtin = args.tables.is_none() || args.overlay;
    let tables = load_tables(args.tables, builtin)?;
    let check = TableCheck::run(&tables);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&check)?);
        return Ok(!check.is_fatal());
    }

    for u in &check.unknown_patterns {
        println!("error: {} entry '{}' names unknown pattern '{}'", u.registry, u.stem, u.pattern);
    }
    for o in &check.overwritten_exceptions {
        println!(
            "warning: exception '{}' -> '{}' is overwritten by expanded '{}'",
            o.key, o.exception, o.expanded
        );
    }
    for s in &check.shadowed_rules {
        println!(
            "warning: rule '{}' -> '{}' is shadowed by earlier rules (produces '{}')",
            s.key, s.expected, s.produced
        );
    }
    if args.all_hazards {
        for h in &check.order_hazards {
            println!("note: '{}' is applied before '{}'", h.earlier, h.later);
        }
    }

    println!(
        "{} static rules, {} unknown patterns, {} overwritten exceptions, {} order hazards ({} shadowing)",
        check.static_rule_count,
        check.unknown_patterns.len(),
        check.overwritten_exceptions.len(),
        check.order_hazards.len(),
        check.shadowed_rules.len()
    );
    Ok(!check.is_fatal())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
