//! Line-oriented database formats.
//!
//! `protocols(5)`, `services(5)` and the Debian `ethertypes` file share one
//! line discipline: surrounding whitespace is trimmed, everything from the
//! first `#` is a comment, and the remainder splits on whitespace runs into a
//! name, a key field, and optional aliases. That discipline lives in
//! `reader`; the per-record parsers only interpret the key field.
//!
//! - `reader`: line splitting, tokenization and strict number parsing
//! - `error`: stream and format errors shared by all parsers

pub mod error;
pub mod reader;

pub use error::ParseError;
