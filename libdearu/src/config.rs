use std::path::PathBuf;

use libdearu_core::{Result, ToneConverter, ToneTables};
use serde::{Deserialize, Serialize};

/// Converter configuration: which rule tables to load.
///
/// By default the built-in tables are used. A TOML tables file can be
/// layered on top of them (its rules are written later and therefore win on
/// duplicate keys), or used on its own with `builtin = false`.
///
/// # Example
///
/// ```rust
/// use libdearu::DearuConfig;
///
/// let config = DearuConfig::default();
/// let converter = config.build_converter().unwrap();
/// assert_eq!(converter.convert("本です。").unwrap(), "本だ。");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DearuConfig {
    /// Start from the built-in Japanese tables
    pub builtin: bool,
    /// Optional TOML tables file overlaid on the starting tables
    pub tables: Option<PathBuf>,
}

impl Default for DearuConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            tables: None,
        }
    }
}

impl DearuConfig {
    pub fn with_tables<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.tables = Some(path.into());
        self
    }

    pub fn without_builtin(mut self) -> Self {
        self.builtin = false;
        self
    }

    /// Assemble the effective tables.
    pub fn load_tables(&self) -> Result<ToneTables> {
        let mut tables = if self.builtin {
            crate::standard_tables()
        } else {
            ToneTables::default()
        };
        if let Some(path) = &self.tables {
            tables.merge(ToneTables::load_toml(path)?);
        }
        Ok(tables)
    }

    pub fn build_converter(&self) -> Result<ToneConverter> {
        ToneConverter::new(self.load_tables()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libdearu_core::ToneError;

    fn write_temp(tag: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("libdearu_config_{}_{}.toml", tag, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn overlay_rule_wins() {
        let path = write_temp(
            "overlay",
            r#"tail = [ { polite = "です", assertive = "である" } ]"#,
        );
        let conv = DearuConfig::default().with_tables(&path).build_converter().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(conv.convert("本です。").unwrap(), "本である。");
    }

    #[test]
    fn overlay_without_builtin() {
        let path = write_temp(
            "alone",
            r#"exceptions = [ { polite = "ございます", assertive = "ある" } ]"#,
        );
        let conv = DearuConfig::default()
            .without_builtin()
            .with_tables(&path)
            .build_converter()
            .unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(conv.convert("本です。ございます。").unwrap(), "本です。ある。");
    }

    #[test]
    fn overlay_with_unknown_pattern_fails() {
        let path = write_temp(
            "unknown",
            "[[stems]]\nstems = [\"書\"]\npattern = \"godan-zz\"\n",
        );
        let err = DearuConfig::default().with_tables(&path).build_converter().unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, ToneError::UnknownPattern { .. }));
    }

    #[test]
    fn missing_tables_file_is_configuration_error() {
        let err = DearuConfig::default()
            .with_tables("/nonexistent/libdearu/tables.toml")
            .load_tables()
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
