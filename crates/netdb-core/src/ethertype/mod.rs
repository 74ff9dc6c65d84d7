//! Ethernet frame type descriptions (Debian `ethertypes`).
//!
//! EtherType numbers are written in hexadecimal, unlike the decimal numbers
//! of the protocols and services files. The entry comment is kept on the
//! record.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod index;
pub mod parser;

pub use index::EtherTypeIndex;
pub use parser::parse_ethertypes;

/// An EtherType with its name, 16 bit number, aliases and comment.
///
/// # Examples
/// ```
/// use netdb_core::EtherTypeRecord;
///
/// let ipv4 = EtherTypeRecord {
///     name: "IPv4".to_string(),
///     number: 0x0800,
///     aliases: vec!["ip".to_string(), "ip4".to_string()],
///     comment: "Internet IP (IPv4)".to_string(),
/// };
/// assert_eq!(ipv4.to_string(), "IPv4\t0800\tip ip4\t# Internet IP (IPv4)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtherTypeRecord {
    pub name: String,
    pub number: u16,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Entry comment, empty when absent.
    #[serde(default)]
    pub comment: String,
}

impl EtherTypeRecord {
    /// The number as an `etherparse` EtherType.
    pub fn ether_type(&self) -> etherparse::EtherType {
        etherparse::EtherType(self.number)
    }
}

impl fmt::Display for EtherTypeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:04X}", self.name, self.number)?;
        if !self.aliases.is_empty() {
            write!(f, "\t{}", self.aliases.join(" "))?;
        }
        if !self.comment.is_empty() {
            write!(f, "\t# {}", self.comment)?;
        }
        Ok(())
    }
}
