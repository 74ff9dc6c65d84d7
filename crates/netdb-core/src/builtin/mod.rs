//! Built-in protocol, service and EtherType tables.
//!
//! The tables are plain static data derived from the Debian netbase files;
//! `regenerate_builtin` renders them from `/etc` style files. The functions
//! here materialize them into records and indexes on demand.

use std::sync::Arc;

use crate::ethertype::{EtherTypeIndex, EtherTypeRecord};
use crate::protocol::{ProtocolIndex, ProtocolRecord};
use crate::service::{ServiceIndex, ServiceRecord};

mod ethertype_table;
mod protocol_table;
mod service_table;

fn owned(aliases: &[&str]) -> Vec<String> {
    aliases.iter().map(|alias| alias.to_string()).collect()
}

/// The built-in protocols in table order.
pub fn protocols() -> Vec<ProtocolRecord> {
    protocol_table::PROTOCOLS
        .iter()
        .map(|&(name, number, aliases)| ProtocolRecord {
            name: name.to_string(),
            number,
            aliases: owned(aliases),
        })
        .collect()
}

/// The built-in services in table order, resolved against `protocols`.
///
/// Services whose protocol is not part of `protocols` are left out, the same
/// way the services parser drops them.
pub fn services(protocols: &ProtocolIndex) -> Vec<ServiceRecord> {
    service_table::SERVICES
        .iter()
        .filter_map(|&(name, port, protocol_name, aliases)| {
            let protocol = protocols.by_name(protocol_name)?;
            Some(ServiceRecord {
                name: name.to_string(),
                port,
                protocol_name: protocol_name.to_string(),
                protocol: Arc::clone(protocol),
                aliases: owned(aliases),
            })
        })
        .collect()
}

/// The built-in EtherTypes in table order.
pub fn ethertypes() -> Vec<EtherTypeRecord> {
    ethertype_table::ETHERTYPES
        .iter()
        .map(|&(name, number, aliases, comment)| EtherTypeRecord {
            name: name.to_string(),
            number,
            aliases: owned(aliases),
            comment: comment.to_string(),
        })
        .collect()
}

impl ProtocolIndex {
    /// Index over the built-in protocols.
    pub fn builtin() -> Self {
        Self::from_records(protocols())
    }
}

impl ServiceIndex {
    /// Index over the built-in services, resolved against the built-in
    /// protocols.
    pub fn builtin() -> Self {
        Self::from_records(services(&ProtocolIndex::builtin()))
    }
}

impl EtherTypeIndex {
    /// Index over the built-in EtherTypes.
    pub fn builtin() -> Self {
        Self::from_records(ethertypes())
    }
}
