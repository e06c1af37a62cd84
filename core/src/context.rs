//! Contextual rule extraction.
//!
//! Some conjugation classes are written as a single kanji followed by kana
//! (`書きます`, `食べます`). The kanji cannot be enumerated ahead of time, so
//! instead of expanding the registry against every possible kanji the
//! extractor scans the text for "one Han character + known polite key" and
//! synthesizes literal rules only for what it finds.
//!
//! For a secondary entry and slot:
//!
//! ```text
//! polite key   = stem + linker + phonetic[slot].polite
//! match        = <Han char> + polite key
//! rule         = kanji + polite key  ->  kanji + stem + linker + ideographic[slot].assertive
//! ```
//!
//! Godan classes register an empty stem, which reduces the rule to
//! `kanji + polite key -> kanji + ideographic ending`.
use ahash::AHashMap;
use regex::Regex;
use tracing::{debug, warn};

use crate::endings::EndingTable;
use crate::error::{Result, ToneError};
use crate::rules::RuleSet;
use crate::stems::SecondaryRegistry;

/// Compiled scanner for one secondary registry.
///
/// Built once per converter; [`ContextualExtractor::extract`] is then a
/// read-only scan that can run against any buffer.
#[derive(Debug, Clone)]
pub struct ContextualExtractor {
    /// `None` when the registry yields no keys.
    scanner: Option<Regex>,
    /// polite key -> assertive tail (everything after the kanji)
    replacements: AHashMap<String, String>,
}

impl ContextualExtractor {
    pub fn new(registry: &SecondaryRegistry, endings: &EndingTable) -> Result<Self> {
        let mut keys: Vec<String> = Vec::new();
        let mut replacements: AHashMap<String, String> = AHashMap::new();

        for entry in registry {
            let first = entry.stems.first().map(String::as_str).unwrap_or_default();
            let phonetic = endings.resolve(&entry.phonetic, first)?;
            let ideographic = endings.resolve(&entry.ideographic, first)?;
            for stem in &entry.stems {
                for (slot, ending) in phonetic.pairs() {
                    let key = format!("{}{}{}", stem, entry.linker, ending.polite);
                    let value = format!(
                        "{}{}{}",
                        stem,
                        entry.linker,
                        ideographic.slot(slot).assertive
                    );
                    if let Some(prev) = replacements.insert(key.clone(), value) {
                        warn!(key = %key, previous = %prev, "secondary key redefined");
                    } else {
                        keys.push(key);
                    }
                }
            }
        }

        // Leftmost-first alternation: a key that is a prefix of another must
        // come after it or the longer key can never match.
        keys.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));

        let scanner = if keys.is_empty() {
            None
        } else {
            let alternation: Vec<String> = keys.iter().map(|k| regex::escape(k)).collect();
            let pattern = format!(r"(\p{{Han}})({})", alternation.join("|"));
            let re = Regex::new(&pattern)
                .map_err(|e| ToneError::invalid_tables(format!("secondary scanner: {}", e)))?;
            Some(re)
        };

        Ok(Self {
            scanner,
            replacements,
        })
    }

    /// Number of distinct polite keys the scanner looks for.
    pub fn key_count(&self) -> usize {
        self.replacements.len()
    }

    /// Scan `buffer` and return one rule per distinct match, in order of
    /// first occurrence.
    pub fn extract(&self, buffer: &str) -> RuleSet {
        let mut out = RuleSet::new();
        let Some(scanner) = &self.scanner else {
            return out;
        };
        for caps in scanner.captures_iter(buffer) {
            let (Some(kanji), Some(key)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Some(tail) = self.replacements.get(key.as_str()) else {
                continue;
            };
            let polite = format!("{}{}", kanji.as_str(), key.as_str());
            if out.contains_key(&polite) {
                continue;
            }
            let assertive = format!("{}{}", kanji.as_str(), tail);
            debug!(polite = %polite, assertive = %assertive, "contextual rule discovered");
            out.insert(polite, assertive);
        }
        out
    }
}

/// One-shot form of [`ContextualExtractor`]: compile and scan.
pub fn extract(registry: &SecondaryRegistry, endings: &EndingTable, buffer: &str) -> Result<RuleSet> {
    Ok(ContextualExtractor::new(registry, endings)?.extract(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endings::InflectionPattern;
    use crate::stems::SecondaryEntry;

    fn endings() -> EndingTable {
        vec![
            (
                "godan-ku",
                InflectionPattern::from_strs([
                    ("きます", "く"),
                    ("きましょう", "こう"),
                    ("きました", "いた"),
                    ("きませんでした", "かなかった"),
                    ("きません", "かない"),
                ]),
            ),
            (
                "ichidan",
                InflectionPattern::from_strs([
                    ("ます", "る"),
                    ("ましょう", "よう"),
                    ("ました", "た"),
                    ("ませんでした", "なかった"),
                    ("ません", "ない"),
                ]),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn registry() -> SecondaryRegistry {
        vec![
            SecondaryEntry::new(&[""], "", "godan-ku", "godan-ku"),
            SecondaryEntry::new(&["べ", "け"], "", "ichidan", "ichidan"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn finds_kanji_followed_by_key() {
        let rules = extract(&registry(), &endings(), "手紙を書きます。本を書きました。").unwrap();
        let pairs: Vec<(&str, &str)> = rules.iter().collect();
        assert_eq!(
            pairs,
            vec![("書きます", "書く"), ("書きました", "書いた")]
        );
    }

    #[test]
    fn okurigana_stem_is_kept() {
        let rules = extract(&registry(), &endings(), "パンを食べません。試験を受けます。").unwrap();
        assert_eq!(rules.get("食べません"), Some("食べない"));
        assert_eq!(rules.get("受けます"), Some("受ける"));
    }

    #[test]
    fn longer_key_wins_at_same_position() {
        let rules = extract(&registry(), &endings(), "聞きませんでした").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get("聞きませんでした"), Some("聞かなかった"));
    }

    #[test]
    fn requires_han_before_key() {
        let rules = extract(&registry(), &endings(), "ききます かきます").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn distinct_matches_in_discovery_order() {
        let text = "歩きます。書きます。歩きます。";
        let rules = extract(&registry(), &endings(), text).unwrap();
        assert_eq!(rules.keys().collect::<Vec<_>>(), vec!["歩きます", "書きます"]);
    }

    #[test]
    fn unknown_pattern_is_fatal() {
        let reg: SecondaryRegistry = vec![SecondaryEntry::new(&[""], "", "godan-ku", "godan-zz")]
            .into_iter()
            .collect();
        assert!(matches!(
            ContextualExtractor::new(&reg, &endings()),
            Err(ToneError::UnknownPattern { .. })
        ));
    }

    #[test]
    fn empty_registry_yields_empty_rules() {
        let ex = ContextualExtractor::new(&SecondaryRegistry::new(), &endings()).unwrap();
        assert!(ex.extract("書きます").is_empty());
    }
}
