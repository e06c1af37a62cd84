//! Rule-table configuration.
//!
//! [`ToneTables`] bundles the four configuration tables the converter needs.
//! Language crates ship a built-in set; maintainers may overlay a TOML file
//! on top of it. Strings read from configuration are normalized to NFC so
//! decomposed kana in hand-edited files still match composed text.
use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::endings::EndingTable;
use crate::error::{Result, ToneError};
use crate::rules::LiteralTable;
use crate::stems::{SecondaryRegistry, StemRegistry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToneTables {
    /// Ending-conversion table (pattern id -> five ending pairs)
    pub endings: EndingTable,
    /// Primary stem registry, expanded statically
    pub stems: StemRegistry,
    /// Secondary registry, resolved against each document
    pub secondary: SecondaryRegistry,
    /// Literal exceptions applied before the expanded rules
    pub exceptions: LiteralTable,
    /// Literal catch-all rules merged after the expanded rules
    pub tail: LiteralTable,
}

impl ToneTables {
    /// Load tables from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ToneError::invalid_tables(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Save tables to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self
            .to_toml_string()
            .map_err(|e| ToneError::invalid_tables(format!("cannot encode tables: {}", e)))?;
        std::fs::write(path, content).map_err(|source| ToneError::SinkUnavailable {
            channel: path.display().to_string(),
            source,
        })
    }

    /// Parse tables from a TOML string. The result is NFC-normalized.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut tables: ToneTables = toml::from_str(content)?;
        tables.normalize();
        Ok(tables)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Overlay `other` onto these tables. Patterns are replaced by id;
    /// registries and literal tables are appended, so overlay rules are
    /// written later and win on duplicate keys.
    pub fn merge(&mut self, other: ToneTables) {
        self.endings.extend(other.endings);
        self.stems.extend(other.stems);
        self.secondary.extend(other.secondary);
        self.exceptions.extend(other.exceptions);
        self.tail.extend(other.tail);
    }

    /// Rewrite every configured string in NFC.
    pub fn normalize(&mut self) {
        fn nfc(s: &mut String) {
            let normalized: String = s.nfc().collect();
            if normalized != *s {
                *s = normalized;
            }
        }

        for (_, pattern) in self.endings.patterns_mut() {
            for pair in pattern.pairs_mut() {
                nfc(&mut pair.polite);
                nfc(&mut pair.assertive);
            }
        }
        for entry in self.stems.iter_mut() {
            entry.stems.iter_mut().for_each(nfc);
            nfc(&mut entry.linker);
        }
        for entry in self.secondary.iter_mut() {
            entry.stems.iter_mut().for_each(nfc);
            nfc(&mut entry.linker);
        }
        for rule in self.exceptions.iter_mut().chain(self.tail.iter_mut()) {
            nfc(&mut rule.polite);
            nfc(&mut rule.assertive);
        }
    }

    /// Structural checks plus pattern resolution for both registries.
    pub fn validate(&self) -> Result<()> {
        self.stems.validate()?;
        self.secondary.validate()?;
        self.exceptions.validate()?;
        self.tail.validate()?;

        for (id, pattern) in self.endings.patterns() {
            if pattern.pairs().any(|(_, e)| e.polite.is_empty()) {
                return Err(ToneError::invalid_tables(format!(
                    "pattern '{}' has an empty polite ending",
                    id
                )));
            }
        }
        for entry in &self.stems {
            self.endings.resolve(&entry.pattern, &entry.stems[0])?;
        }
        for entry in &self.secondary {
            let stem = entry.stems[0].as_str();
            self.endings.resolve(&entry.phonetic, stem)?;
            self.endings.resolve(&entry.ideographic, stem)?;
        }
        Ok(())
    }
}
