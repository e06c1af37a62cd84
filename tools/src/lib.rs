//! Table inspection shared by the maintainer binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use libdearu::DearuConfig;
use libdearu_core::{expand, RuleSet, StemRegistry, ToneTables};
use serde::Serialize;

/// Load the built-in tables, a tables file, or the file layered over the
/// built-ins. Nothing is validated here.
pub fn load_tables(tables: Option<PathBuf>, builtin: bool) -> Result<ToneTables> {
    let mut config = DearuConfig::default();
    if let Some(path) = tables {
        config = config.with_tables(path);
    }
    if !builtin {
        config = config.without_builtin();
    }
    config.load_tables().context("failed to load rule tables")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownPattern {
    pub registry: &'static str,
    pub pattern: String,
    pub stem: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverwrittenException {
    pub key: String,
    pub exception: String,
    pub expanded: String,
}

/// `earlier` is a substring of `later` and is applied first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderHazard {
    pub earlier: String,
    pub later: String,
}

/// A rule whose key is rewritten by earlier rules into something other
/// than its own value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedRule {
    pub key: String,
    pub expected: String,
    pub produced: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TableCheck {
    pub unknown_patterns: Vec<UnknownPattern>,
    pub overwritten_exceptions: Vec<OverwrittenException>,
    pub order_hazards: Vec<OrderHazard>,
    pub shadowed_rules: Vec<ShadowedRule>,
    pub static_rule_count: usize,
}

impl TableCheck {
    pub fn run(tables: &ToneTables) -> Self {
        let mut check = TableCheck {
            unknown_patterns: unknown_patterns(tables),
            ..Default::default()
        };

        // expand what can be expanded so the ordering checks still run
        let known: StemRegistry = tables
            .stems
            .iter()
            .filter(|e| tables.endings.contains(&e.pattern))
            .cloned()
            .collect();
        let expanded = match expand(&known, &tables.endings) {
            Ok(rules) => rules,
            Err(_) => RuleSet::new(),
        };

        let mut rules = RuleSet::new();
        rules.merge_literals(&tables.exceptions);
        for (key, value) in expanded.iter() {
            if let Some(prev) = rules.insert(key, value) {
                if prev != value {
                    check.overwritten_exceptions.push(OverwrittenException {
                        key: key.to_string(),
                        exception: prev,
                        expanded: value.to_string(),
                    });
                }
            }
        }
        rules.merge_literals(&tables.tail);

        check.static_rule_count = rules.len();
        check.order_hazards = order_hazards(&rules);
        check.shadowed_rules = shadowed_rules(&rules, &check.order_hazards);
        check
    }

    /// Unknown patterns make the tables unusable.
    pub fn is_fatal(&self) -> bool {
        !self.unknown_patterns.is_empty()
    }
}

fn unknown_patterns(tables: &ToneTables) -> Vec<UnknownPattern> {
    let mut out = Vec::new();
    let first = |stems: &[String]| stems.first().cloned().unwrap_or_default();

    for entry in &tables.stems {
        if !tables.endings.contains(&entry.pattern) {
            out.push(UnknownPattern {
                registry: "stems",
                pattern: entry.pattern.clone(),
                stem: first(&entry.stems),
            });
        }
    }
    for entry in &tables.secondary {
        for pattern in [&entry.phonetic, &entry.ideographic] {
            if !tables.endings.contains(pattern) {
                out.push(UnknownPattern {
                    registry: "secondary",
                    pattern: pattern.clone(),
                    stem: first(&entry.stems),
                });
            }
        }
    }
    out
}

/// Every pair of keys where an earlier key occurs inside a later one.
pub fn order_hazards(rules: &RuleSet) -> Vec<OrderHazard> {
    let keys: Vec<&str> = rules.keys().collect();
    let mut out = Vec::new();
    for (j, later) in keys.iter().enumerate() {
        for earlier in &keys[..j] {
            if later.contains(earlier) {
                out.push(OrderHazard {
                    earlier: earlier.to_string(),
                    later: later.to_string(),
                });
            }
        }
    }
    out
}

/// Hazards that actually change the outcome: run every rule ahead of the
/// later key over that key and compare with its value.
pub fn shadowed_rules(rules: &RuleSet, hazards: &[OrderHazard]) -> Vec<ShadowedRule> {
    let mut out: Vec<ShadowedRule> = Vec::new();
    for hazard in hazards {
        if out.iter().any(|s| s.key == hazard.later) {
            continue;
        }
        let Some(expected) = rules.get(&hazard.later) else {
            continue;
        };
        let mut produced = hazard.later.clone();
        for (key, value) in rules.iter() {
            if key == hazard.later {
                break;
            }
            if produced.contains(key) {
                produced = produced.replace(key, value);
            }
        }
        if produced != expected {
            out.push(ShadowedRule {
                key: hazard.later.clone(),
                expected: expected.to_string(),
                produced,
            });
        }
    }
    out
}
