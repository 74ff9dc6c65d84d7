//! Internet protocol descriptions (`protocols(5)`).
//!
//! Assigned Internet Protocol Numbers are 8 bit unsigned values, so a
//! protocol number that does not fit into a `u8` is a format error that
//! aborts the whole parse.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod index;
pub mod parser;

pub use index::ProtocolIndex;
pub use parser::parse_protocols;

/// A network protocol with its official name, IP protocol number and
/// optional aliases.
///
/// # Examples
/// ```
/// use netdb_core::ProtocolRecord;
///
/// let tcp = ProtocolRecord {
///     name: "tcp".to_string(),
///     number: 6,
///     aliases: vec!["TCP".to_string()],
/// };
/// assert_eq!(tcp.to_string(), "tcp\t6\tTCP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRecord {
    /// Official protocol name.
    pub name: String,
    /// Protocol number as carried in IP headers.
    pub number: u8,
    /// Alias names in file order.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ProtocolRecord {
    /// The protocol number as an `etherparse` IP number.
    pub fn ip_number(&self) -> etherparse::IpNumber {
        etherparse::IpNumber(self.number)
    }
}

impl fmt::Display for ProtocolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.name, self.number)?;
        if !self.aliases.is_empty() {
            write!(f, "\t{}", self.aliases.join(" "))?;
        }
        Ok(())
    }
}
