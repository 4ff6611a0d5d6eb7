//! vv_expand - `$(name)` placeholder expansion
//!
//! Expands placeholders owned by one vendor namespace and writes every other
//! placeholder back as `$(name)`, so several independent passes can share the
//! same raw text.

pub mod error;
pub mod expander;
pub mod lookup;
pub mod scanner;

pub use error::ExpansionError;
pub use expander::{escape, expand, expand_in, expand_with, placeholders, placeholders_in};
pub use lookup::LookupStore;
pub use scanner::{Scanner, Segment, Syntax};
