//! libdearu crate root
//!
//! Japanese polite-register (です・ます調) to assertive-register (だ・である調)
//! conversion: the built-in vocabulary tables plus convenience constructors
//! over the `libdearu-core` pipeline.
//!
//! ```rust
//! let out = libdearu::convert("彼は学校に行きます。").unwrap();
//! assert_eq!(out, "彼は学校に行く。");
//! ```
//!
//! Public API exported here:
//! - `standard_tables` / `standard_converter` / `convert`
//! - `DearuConfig` for choosing between built-in and user tables
//! - the table builders in `endings`, `stems` and `exceptions`

pub mod config;
pub mod endings;
pub mod exceptions;
pub mod stems;

pub use libdearu_core::{
    ConversionReport, FileSink, FileSource, MemoryChannel, RuleSet, StdinSource, StdoutSink,
    TextSink, TextSource, ToneConverter, ToneError, ToneTables,
};

pub use config::DearuConfig;
pub use endings::standard_endings;
pub use exceptions::{standard_exceptions, standard_tail};
pub use stems::{standard_secondary, standard_stems};

use once_cell::sync::Lazy;

static STANDARD: Lazy<ToneTables> = Lazy::new(|| ToneTables {
    endings: standard_endings(),
    stems: standard_stems(),
    secondary: standard_secondary(),
    exceptions: standard_exceptions(),
    tail: standard_tail(),
});

/// The built-in Japanese tables.
pub fn standard_tables() -> ToneTables {
    STANDARD.clone()
}

static CONVERTER: Lazy<libdearu_core::Result<ToneConverter>> =
    Lazy::new(|| ToneConverter::new(standard_tables()));

fn cached_converter() -> libdearu_core::Result<&'static ToneConverter> {
    CONVERTER
        .as_ref()
        .map_err(|e| ToneError::invalid_tables(format!("built-in tables: {}", e)))
}

/// A converter over the built-in tables.
pub fn standard_converter() -> libdearu_core::Result<ToneConverter> {
    cached_converter().cloned()
}

/// Convert `text` with the built-in tables. The converter is built once and
/// shared by every call.
pub fn convert(text: &str) -> libdearu_core::Result<String> {
    cached_converter()?.convert(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_reuses_one_converter() {
        let first = cached_converter().unwrap() as *const ToneConverter;
        assert_eq!(convert("本です。").unwrap(), "本だ。");
        let second = cached_converter().unwrap() as *const ToneConverter;
        assert_eq!(first, second);
    }

    #[test]
    fn standard_converter_matches_cached() {
        let owned = standard_converter().unwrap();
        assert_eq!(owned.tables(), cached_converter().unwrap().tables());
    }
}
