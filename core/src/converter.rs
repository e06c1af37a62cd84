//! The tone converter: sequences the rule sources into the two-pass pipeline.
//!
//! ```text
//! 1. head literal exceptions        ┐
//! 2. expanded stem rules            │ static rule set, applied once
//! 3. tail literal catch-alls        ┘
//! 4. apply static rules
//! 5. scan the rewritten buffer for contextual rules
//! 6. apply contextual rules
//! ```
//!
//! The contextual scan runs on the output of step 4, so forms already
//! handled by an explicit stem entry (e.g. `行きました` → `行った`) are gone
//! before the generic kanji + kana classes get a chance to mis-handle them.
use serde::Serialize;
use tracing::{info, warn};

use crate::channel::{TextSink, TextSource};
use crate::config::ToneTables;
use crate::context::ContextualExtractor;
use crate::error::Result;
use crate::expander::expand;
use crate::rules::RuleSet;
use crate::substitute::{apply_recording, RuleHit};

/// What one conversion call did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Number of rules in the static rule set.
    pub static_rule_count: usize,
    /// Static rules that changed the buffer, in application order.
    pub static_hits: Vec<RuleHit>,
    /// Rules discovered by the contextual scan, in discovery order.
    pub contextual_rules: RuleSet,
    /// Contextual rules that changed the buffer, in application order.
    pub contextual_hits: Vec<RuleHit>,
}

impl ConversionReport {
    pub fn total_replacements(&self) -> usize {
        self.static_hits
            .iter()
            .chain(self.contextual_hits.iter())
            .map(|h| h.count)
            .sum()
    }
}

/// Polite → assertive converter over an immutable set of tables.
///
/// The tables are read-only after construction, so a converter can be
/// shared by reference across threads; each call owns its own buffer and
/// rule sets.
#[derive(Debug, Clone)]
pub struct ToneConverter {
    tables: ToneTables,
    extractor: ContextualExtractor,
}

impl ToneConverter {
    /// Validate `tables` and compile the contextual scanner.
    pub fn new(tables: ToneTables) -> Result<Self> {
        tables.validate()?;
        let extractor = ContextualExtractor::new(&tables.secondary, &tables.endings)?;
        info!(
            patterns = tables.endings.len(),
            stems = tables.stems.len(),
            secondary_keys = extractor.key_count(),
            "tone converter ready"
        );
        Ok(Self { tables, extractor })
    }

    pub fn tables(&self) -> &ToneTables {
        &self.tables
    }

    /// Build the static rule set: head exceptions, expanded stems, tail.
    pub fn static_rules(&self) -> Result<RuleSet> {
        let mut active = RuleSet::new();
        active.merge_literals(&self.tables.exceptions);

        for (key, value) in expand(&self.tables.stems, &self.tables.endings)?.iter() {
            if let Some(prev) = active.insert(key, value) {
                if prev != value {
                    warn!(key, exception = %prev, expanded = value, "expanded rule overrides literal exception");
                }
            }
        }

        for rule in &self.tables.tail {
            if let Some(prev) = active.insert(rule.polite.as_str(), rule.assertive.as_str()) {
                warn!(key = %rule.polite, previous = %prev, "tail rule shadows an earlier key");
            }
        }
        Ok(active)
    }

    /// Rules the contextual pass would derive from `buffer`.
    pub fn contextual_rules(&self, buffer: &str) -> RuleSet {
        self.extractor.extract(buffer)
    }

    /// Convert `text` from polite to assertive register.
    pub fn convert(&self, text: &str) -> Result<String> {
        self.convert_with_report(text).map(|(out, _)| out)
    }

    /// Convert and report every rule that fired.
    pub fn convert_with_report(&self, text: &str) -> Result<(String, ConversionReport)> {
        let active = self.static_rules()?;
        let mut report = ConversionReport {
            static_rule_count: active.len(),
            ..Default::default()
        };

        let buffer = apply_recording(&active, text.to_string(), &mut report.static_hits);
        let secondary = self.extractor.extract(&buffer);
        let buffer = apply_recording(&secondary, buffer, &mut report.contextual_hits);
        report.contextual_rules = secondary;

        info!(
            static_rules = report.static_rule_count,
            contextual_rules = report.contextual_rules.len(),
            replacements = report.total_replacements(),
            "conversion finished"
        );
        Ok((buffer, report))
    }

    /// Read from `source`, convert, write to `sink`. The sink is untouched
    /// when reading or converting fails.
    pub fn run<S, K>(&self, source: &mut S, sink: &mut K) -> Result<ConversionReport>
    where
        S: TextSource + ?Sized,
        K: TextSink + ?Sized,
    {
        let text = source.read()?;
        let (out, report) = self.convert_with_report(&text)?;
        sink.write(&out)?;
        Ok(report)
    }
}
