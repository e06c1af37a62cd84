//! Ending-conversion table.
//!
//! Maps an inflection-pattern id (e.g. `"godan-ku"`, `"ichidan"`) to the five
//! polite → assertive ending pairs shared by every stem that conjugates the
//! same way. The table is pure data: it is built once and only read after.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToneError};

/// Number of ending slots every pattern carries.
pub const SLOT_COUNT: usize = 5;

/// The five canonical ending slots, in expansion order.
///
/// Past-negative precedes negative on purpose: the polite negative
/// (`ません`) is a prefix of the polite past-negative (`ませんでした`), so
/// the longer form has to be rewritten first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    Present,
    Volitional,
    Past,
    PastNegative,
    Negative,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::Present,
        Slot::Volitional,
        Slot::Past,
        Slot::PastNegative,
        Slot::Negative,
    ];

    pub fn index(self) -> usize {
        match self {
            Slot::Present => 0,
            Slot::Volitional => 1,
            Slot::Past => 2,
            Slot::PastNegative => 3,
            Slot::Negative => 4,
        }
    }
}

/// One polite ending and the assertive ending that replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingPair {
    pub polite: String,
    pub assertive: String,
}

impl EndingPair {
    pub fn new<P: Into<String>, A: Into<String>>(polite: P, assertive: A) -> Self {
        Self {
            polite: polite.into(),
            assertive: assertive.into(),
        }
    }
}

/// Exactly five ending pairs, indexed by [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InflectionPattern {
    pairs: [EndingPair; SLOT_COUNT],
}

impl InflectionPattern {
    pub fn new(pairs: [EndingPair; SLOT_COUNT]) -> Self {
        Self { pairs }
    }

    /// Build from `(polite, assertive)` string pairs in slot order.
    pub fn from_strs(pairs: [(&str, &str); SLOT_COUNT]) -> Self {
        Self {
            pairs: pairs.map(|(p, a)| EndingPair::new(p, a)),
        }
    }

    pub fn slot(&self, slot: Slot) -> &EndingPair {
        &self.pairs[slot.index()]
    }

    /// Pairs in the fixed slot order (present, volitional, past,
    /// past-negative, negative).
    pub fn pairs(&self) -> impl Iterator<Item = (Slot, &EndingPair)> {
        Slot::ALL.iter().map(move |s| (*s, &self.pairs[s.index()]))
    }

    pub(crate) fn pairs_mut(&mut self) -> impl Iterator<Item = &mut EndingPair> {
        self.pairs.iter_mut()
    }
}

/// The ending-conversion table (pattern id → pattern).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndingTable {
    patterns: IndexMap<String, InflectionPattern>,
}

impl EndingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a pattern.
    pub fn insert<S: Into<String>>(&mut self, id: S, pattern: InflectionPattern) {
        self.patterns.insert(id.into(), pattern);
    }

    pub fn lookup(&self, id: &str) -> Option<&InflectionPattern> {
        self.patterns.get(id)
    }

    /// Look up `id` on behalf of `stem`, failing with `UnknownPattern`.
    pub fn resolve(&self, id: &str, stem: &str) -> Result<&InflectionPattern> {
        self.patterns
            .get(id)
            .ok_or_else(|| ToneError::unknown_pattern(id, stem))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.patterns.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(|k| k.as_str())
    }

    pub fn patterns(&self) -> impl Iterator<Item = (&str, &InflectionPattern)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn patterns_mut(&mut self) -> impl Iterator<Item = (&String, &mut InflectionPattern)> {
        self.patterns.iter_mut()
    }

    /// Overlay `other` onto this table; patterns with the same id are replaced.
    pub fn extend(&mut self, other: EndingTable) {
        for (id, pattern) in other.patterns {
            self.patterns.insert(id, pattern);
        }
    }
}

impl<S: Into<String>> FromIterator<(S, InflectionPattern)> for EndingTable {
    fn from_iter<I: IntoIterator<Item = (S, InflectionPattern)>>(iter: I) -> Self {
        let mut table = EndingTable::new();
        for (id, pattern) in iter {
            table.insert(id, pattern);
        }
        table
    }
}
