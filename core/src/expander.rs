//! Static rule expansion.
//!
//! For every stem of every registry entry and every slot of the entry's
//! pattern, one literal rule is produced:
//!
//! ```text
//! polite    = stem + linker + polite_ending
//! assertive = stem + linker + assertive_ending   (or assertive_ending alone
//!                                                 for override entries)
//! ```
//!
//! Rules are emitted in registry order, then stem order, then slot order.
use tracing::trace;

use crate::endings::EndingTable;
use crate::error::Result;
use crate::rules::RuleSet;
use crate::stems::StemRegistry;

/// Expand `registry` against `endings`.
///
/// A missing pattern aborts the whole expansion with `UnknownPattern`.
pub fn expand(registry: &StemRegistry, endings: &EndingTable) -> Result<RuleSet> {
    let mut out = RuleSet::new();
    for entry in registry {
        let first = entry.stems.first().map(String::as_str).unwrap_or_default();
        let pattern = endings.resolve(&entry.pattern, first)?;
        for stem in &entry.stems {
            for (_, ending) in pattern.pairs() {
                let key = format!("{}{}{}", stem, entry.linker, ending.polite);
                let value = if entry.stem_override {
                    ending.assertive.clone()
                } else {
                    format!("{}{}{}", stem, entry.linker, ending.assertive)
                };
                trace!(polite = %key, assertive = %value, pattern = %entry.pattern, "expanded");
                out.insert(key, value);
            }
        }
    }
    Ok(out)
}
