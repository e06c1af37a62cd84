//! Sequential literal substitution.
//!
//! Each rule is a global, leftmost-first, non-overlapping find/replace over
//! the output of the previous rule. There is no simultaneous multi-pattern
//! pass: a span rewritten by one rule is only ever seen in its rewritten
//! form by the rules after it.
use serde::Serialize;
use tracing::debug;

use crate::rules::RuleSet;

/// A rule that changed the buffer, and how many times it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub polite: String,
    pub assertive: String,
    pub count: usize,
}

/// Apply `rules` to `buffer` in insertion order.
pub fn apply(rules: &RuleSet, buffer: String) -> String {
    apply_recording(rules, buffer, &mut Vec::new())
}

/// Like [`apply`], appending one [`RuleHit`] per rule that matched.
pub fn apply_recording(rules: &RuleSet, mut buffer: String, hits: &mut Vec<RuleHit>) -> String {
    for (key, value) in rules.iter() {
        let count = buffer.matches(key).count();
        if count == 0 {
            continue;
        }
        buffer = buffer.replace(key, value);
        debug!(polite = key, assertive = value, count, "rule applied");
        hits.push(RuleHit {
            polite: key.to_string(),
            assertive: value.to_string(),
            count,
        });
    }
    buffer
}
