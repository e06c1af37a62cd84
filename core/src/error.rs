//! Error type shared by the whole conversion pipeline.
use std::io;

/// Every way a conversion call can fail.
///
/// Configuration defects (`UnknownPattern`, `InvalidTables`, `Toml`) and
/// transport failures (`SourceUnavailable`, `SinkUnavailable`) are kept apart
/// so callers can tell a broken table from a broken channel.
#[derive(Debug, thiserror::Error)]
pub enum ToneError {
    #[error("unknown inflection pattern '{pattern}' referenced by stem '{stem}'")]
    UnknownPattern { pattern: String, stem: String },

    #[error("text source '{channel}' unavailable: {source}")]
    SourceUnavailable {
        channel: String,
        #[source]
        source: io::Error,
    },

    #[error("text sink '{channel}' unavailable: {source}")]
    SinkUnavailable {
        channel: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid rule tables: {reason}")]
    InvalidTables { reason: String },

    #[error("failed to parse rule tables: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ToneError {
    pub fn unknown_pattern(pattern: &str, stem: &str) -> Self {
        ToneError::UnknownPattern {
            pattern: pattern.to_string(),
            stem: stem.to_string(),
        }
    }

    pub fn invalid_tables<T: Into<String>>(reason: T) -> Self {
        ToneError::InvalidTables {
            reason: reason.into(),
        }
    }

    /// True for defects in the rule tables themselves.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ToneError::UnknownPattern { .. } | ToneError::InvalidTables { .. } | ToneError::Toml(_)
        )
    }

    /// True for failures of the external text channel.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ToneError::SourceUnavailable { .. } | ToneError::SinkUnavailable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ToneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_configuration_and_transport() {
        let e = ToneError::unknown_pattern("godan-zu", "書");
        assert!(e.is_configuration());
        assert!(!e.is_transport());
        assert!(e.to_string().contains("godan-zu"));

        let e = ToneError::SinkUnavailable {
            channel: "stdout".into(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "closed"),
        };
        assert!(e.is_transport());
        assert!(!e.is_configuration());
    }
}
