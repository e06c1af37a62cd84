//! Literal rules and insertion-ordered rule sets.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToneError};

/// A fixed surface-to-surface replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiteralRule {
    pub polite: String,
    pub assertive: String,
}

impl LiteralRule {
    pub fn new<P: Into<String>, A: Into<String>>(polite: P, assertive: A) -> Self {
        Self {
            polite: polite.into(),
            assertive: assertive.into(),
        }
    }
}

/// An ordered list of literal rules, as written by the maintainer.
///
/// Duplicate keys are allowed here; they collapse when merged into a
/// [`RuleSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiteralTable {
    rules: Vec<LiteralRule>,
}

impl LiteralTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(polite, assertive)` pairs in order.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().map(|(p, a)| LiteralRule::new(*p, *a)).collect()
    }

    pub fn push(&mut self, rule: LiteralRule) {
        self.rules.push(rule);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LiteralRule> {
        self.rules.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, LiteralRule> {
        self.rules.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn extend(&mut self, other: LiteralTable) {
        self.rules.extend(other.rules);
    }

    /// Both sides of every rule must be non-empty. An empty key would match
    /// between every pair of characters.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.rules {
            if rule.polite.is_empty() || rule.assertive.is_empty() {
                return Err(ToneError::invalid_tables(format!(
                    "literal rule '{}' -> '{}' has an empty side",
                    rule.polite, rule.assertive
                )));
            }
        }
        Ok(())
    }
}

impl FromIterator<LiteralRule> for LiteralTable {
    fn from_iter<I: IntoIterator<Item = LiteralRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LiteralTable {
    type Item = &'a LiteralRule;
    type IntoIter = std::slice::Iter<'a, LiteralRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Insertion-ordered mapping from polite surface form to assertive form.
///
/// Rules are applied in insertion order. Re-inserting an existing key
/// replaces its value but keeps the position of the first insertion, so the
/// last write decides *what* a key becomes and the first write decides
/// *when* it is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, returning the value it shadowed, if any.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.rules.insert(key.into(), value.into())
    }

    /// Merge a literal table, rule by rule, in table order.
    pub fn merge_literals(&mut self, table: &LiteralTable) {
        for rule in table {
            self.insert(rule.polite.as_str(), rule.assertive.as_str());
        }
    }

    /// Merge another rule set, rule by rule, in its order.
    pub fn merge(&mut self, other: RuleSet) {
        for (k, v) in other.rules {
            self.rules.insert(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.rules.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    /// Position of `key` in application order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.rules.get_index_of(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
