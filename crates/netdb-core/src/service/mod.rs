//! Network service descriptions (`services(5)`).
//!
//! A service is bound to a port and a transport protocol. Service lines are
//! parsed leniently: a bad port, a malformed `port/protocol` field, or a
//! protocol missing from the supplied protocol index only drops that line.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::protocol::ProtocolRecord;

pub mod index;
pub mod parser;

pub use index::{ServiceIndex, ServiceName, ServicePort};
pub use parser::parse_services;

/// A network service with its official name, port, protocol and aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    /// Official service name.
    pub name: String,
    /// Transport port number.
    pub port: u16,
    /// Protocol name exactly as written in the source.
    pub protocol_name: String,
    /// The protocol `protocol_name` resolved to at parse time.
    pub protocol: Arc<ProtocolRecord>,
    /// Alias names in file order.
    pub aliases: Vec<String>,
}

impl fmt::Display for ServiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}/{}", self.name, self.port, self.protocol_name)?;
        if !self.aliases.is_empty() {
            write!(f, "\t{}", self.aliases.join(" "))?;
        }
        Ok(())
    }
}
