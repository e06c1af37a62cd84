//! libdearu-core
//!
//! Language-agnostic engine for rewriting sentence-final forms from a polite
//! register to an assertive one by ordered literal substitution.
//!
//! Rules come from four configuration tables and are applied in two passes:
//! a static pass (literal exceptions, rules expanded from stems × inflection
//! patterns, tail catch-alls) and a contextual pass whose rules are
//! discovered by scanning the partially converted text.
//!
//! Public API:
//! - `EndingTable` / `InflectionPattern` - ending-conversion table
//! - `StemRegistry` / `SecondaryRegistry` - stem tables
//! - `RuleSet` / `LiteralTable` - ordered literal rules
//! - `expand` - static rule expansion
//! - `ContextualExtractor` - data-dependent rule discovery
//! - `apply` - sequential substitution
//! - `ToneConverter` - the two-pass pipeline
//! - `TextSource` / `TextSink` - I/O channels
//! - `ToneTables` - TOML-loadable configuration
//! - `ToneError` - error type

pub mod endings;
pub use endings::{EndingPair, EndingTable, InflectionPattern, Slot, SLOT_COUNT};

pub mod stems;
pub use stems::{SecondaryEntry, SecondaryRegistry, StemEntry, StemRegistry};

pub mod rules;
pub use rules::{LiteralRule, LiteralTable, RuleSet};

pub mod expander;
pub use expander::expand;

pub mod context;
pub use context::{extract, ContextualExtractor};

pub mod substitute;
pub use substitute::{apply, apply_recording, RuleHit};

pub mod converter;
pub use converter::{ConversionReport, ToneConverter};

pub mod channel;
pub use channel::{FileSink, FileSource, MemoryChannel, StdinSource, StdoutSink, TextSink, TextSource};

pub mod config;
pub use config::ToneTables;

pub mod error;
pub use error::{Result, ToneError};

pub mod logging;
