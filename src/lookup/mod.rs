//! Deprecation lookup table — load and relevance filtering.
//!
//! The table is a JSON array of `{deprecated, replacement, description}`
//! records shipped next to the installed binary. Loading never fails:
//! a missing or unparsable resource falls back to a small built-in table
//! with a warning, so analysis always has some context to offer.

pub mod filter;
pub mod store;

pub use filter::{filter, MatchStrategy};
pub use store::{load, load_from, DeprecationRecord, LookupTable};
