//! Stem registries.
//!
//! A [`StemEntry`] names every surface spelling of one lexical item together
//! with the linker and inflection pattern it conjugates with. Registries are
//! plain ordered collections; consumers walk them front to back and the
//! order is part of the configuration.
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToneError};

/// One lexical item of the primary registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemEntry {
    /// Interchangeable spellings (kana and one or more kanji spellings).
    pub stems: Vec<String>,
    /// Morpheme placed between stem and ending on both sides.
    #[serde(default)]
    pub linker: String,
    /// Inflection pattern id in the ending table.
    pub pattern: String,
    /// When set, the assertive side is the pattern's assertive ending alone:
    /// the pattern embeds the normalized stem itself.
    #[serde(default, rename = "override")]
    pub stem_override: bool,
}

impl StemEntry {
    pub fn new<S: AsRef<str>>(stems: &[S], linker: &str, pattern: &str) -> Self {
        Self {
            stems: stems.iter().map(|s| s.as_ref().to_string()).collect(),
            linker: linker.to_string(),
            pattern: pattern.to_string(),
            stem_override: false,
        }
    }

    pub fn with_override(mut self) -> Self {
        self.stem_override = true;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.stems.is_empty() {
            return Err(ToneError::invalid_tables(format!(
                "stem entry for pattern '{}' has no stems",
                self.pattern
            )));
        }
        if self.stems.iter().any(|s| s.is_empty()) {
            return Err(ToneError::invalid_tables(format!(
                "stem entry for pattern '{}' contains an empty stem",
                self.pattern
            )));
        }
        Ok(())
    }
}

/// One entry of the secondary (contextual) registry.
///
/// `stems` here are the kana written after a single kanji (okurigana).
/// `phonetic` builds the polite key searched for in the text and
/// `ideographic` supplies the assertive ending for the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryEntry {
    pub stems: Vec<String>,
    #[serde(default)]
    pub linker: String,
    pub phonetic: String,
    pub ideographic: String,
}

impl SecondaryEntry {
    pub fn new<S: AsRef<str>>(stems: &[S], linker: &str, phonetic: &str, ideographic: &str) -> Self {
        Self {
            stems: stems.iter().map(|s| s.as_ref().to_string()).collect(),
            linker: linker.to_string(),
            phonetic: phonetic.to_string(),
            ideographic: ideographic.to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.stems.is_empty() {
            return Err(ToneError::invalid_tables(format!(
                "secondary entry for pattern '{}' has no stems",
                self.ideographic
            )));
        }
        Ok(())
    }
}

/// Ordered collection of primary stem entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StemRegistry {
    entries: Vec<StemEntry>,
}

impl StemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: StemEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StemEntry> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, StemEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn extend(&mut self, other: StemRegistry) {
        self.entries.extend(other.entries);
    }

    pub fn validate(&self) -> Result<()> {
        self.entries.iter().try_for_each(StemEntry::validate)
    }
}

impl FromIterator<StemEntry> for StemRegistry {
    fn from_iter<I: IntoIterator<Item = StemEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StemRegistry {
    type Item = &'a StemEntry;
    type IntoIter = std::slice::Iter<'a, StemEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Ordered collection of secondary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecondaryRegistry {
    entries: Vec<SecondaryEntry>,
}

impl SecondaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SecondaryEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SecondaryEntry> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, SecondaryEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn extend(&mut self, other: SecondaryRegistry) {
        self.entries.extend(other.entries);
    }

    pub fn validate(&self) -> Result<()> {
        self.entries.iter().try_for_each(SecondaryEntry::validate)
    }
}

impl FromIterator<SecondaryEntry> for SecondaryRegistry {
    fn from_iter<I: IntoIterator<Item = SecondaryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SecondaryRegistry {
    type Item = &'a SecondaryEntry;
    type IntoIter = std::slice::Iter<'a, SecondaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_stems() {
        let reg: StemRegistry = vec![StemEntry::new::<&str>(&[], "", "ichidan")]
            .into_iter()
            .collect();
        assert!(matches!(reg.validate(), Err(ToneError::InvalidTables { .. })));

        let reg: StemRegistry = vec![StemEntry::new(&["食べ", ""], "", "ichidan")]
            .into_iter()
            .collect();
        assert!(reg.validate().is_err());

        let reg: StemRegistry = vec![StemEntry::new(&["たべ", "食べ"], "", "ichidan")]
            .into_iter()
            .collect();
        assert!(reg.validate().is_ok());
    }

    #[test]
    fn override_flag_defaults_off_in_toml() {
        let entry: StemEntry = toml::from_str(r#"stems = ["行"]
pattern = "godan-iku""#)
        .unwrap();
        assert!(!entry.stem_override);
        assert!(entry.linker.is_empty());

        let entry: StemEntry = toml::from_str(r#"stems = ["でき", "出来"]
pattern = "dekiru"
override = true"#)
        .unwrap();
        assert!(entry.stem_override);
    }
}
