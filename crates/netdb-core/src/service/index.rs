use std::collections::HashMap;
use std::sync::Arc;

use super::ServiceRecord;

/// Service index key by (alias) name; an empty protocol is the
/// protocol-agnostic key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName {
    pub name: String,
    pub protocol: String,
}

/// Service index key by port; an empty protocol is the protocol-agnostic
/// key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServicePort {
    pub port: u16,
    pub protocol: String,
}

impl ServiceName {
    pub fn new(name: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            protocol: protocol.into(),
        }
    }
}

impl ServicePort {
    pub fn new(port: u16, protocol: impl Into<String>) -> Self {
        Self {
            port,
            protocol: protocol.into(),
        }
    }
}

/// Services indexed by (name, protocol) and by (port, protocol).
///
/// The same name or port commonly exists under several protocols. The
/// protocol-agnostic keys keep the first definition merged, while the
/// protocol-qualified keys always follow the latest one.
///
/// # Examples
/// ```
/// use netdb_core::{ProtocolIndex, ServiceIndex, parse_services};
///
/// let protocols = ProtocolIndex::builtin();
/// let services = parse_services("domain 53/tcp\ndomain 53/udp".as_bytes(), &protocols)?;
/// let index = ServiceIndex::from_records(services);
/// assert_eq!(index.by_name("domain", "").map(|s| s.protocol_name.as_str()), Some("tcp"));
/// assert_eq!(index.by_port(53, "udp").map(|s| s.name.as_str()), Some("domain"));
/// # Ok::<(), netdb_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServiceIndex {
    names: HashMap<ServiceName, Arc<ServiceRecord>>,
    ports: HashMap<ServicePort, Arc<ServiceRecord>>,
}

impl ServiceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ServiceRecord>,
    {
        let mut index = Self::new();
        index.merge(records);
        index
    }

    /// Merge records in order.
    ///
    /// Protocol-agnostic keys are only registered when absent (first write
    /// wins); protocol-qualified keys are always overwritten.
    pub fn merge<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = ServiceRecord>,
    {
        for record in records {
            let record = Arc::new(record);
            for name in std::iter::once(&record.name).chain(&record.aliases) {
                self.names
                    .entry(ServiceName::new(name.as_str(), ""))
                    .or_insert_with(|| Arc::clone(&record));
                self.names.insert(
                    ServiceName::new(name.as_str(), record.protocol_name.as_str()),
                    Arc::clone(&record),
                );
            }
            self.ports
                .entry(ServicePort::new(record.port, ""))
                .or_insert_with(|| Arc::clone(&record));
            self.ports.insert(
                ServicePort::new(record.port, record.protocol_name.as_str()),
                Arc::clone(&record),
            );
        }
    }

    /// Copy every key of `other` into this index, overwriting on collision,
    /// protocol-agnostic keys included.
    pub fn merge_index(&mut self, other: &ServiceIndex) {
        for (key, record) in &other.names {
            self.names.insert(key.clone(), Arc::clone(record));
        }
        for (key, record) in &other.ports {
            self.ports.insert(key.clone(), Arc::clone(record));
        }
    }

    /// Look up a service by (alias) name; `protocol == ""` returns the first
    /// service merged under that name.
    pub fn by_name(&self, name: &str, protocol: &str) -> Option<&Arc<ServiceRecord>> {
        self.names.get(&ServiceName::new(name, protocol))
    }

    /// Look up a service by port; `protocol == ""` returns the first service
    /// merged under that port.
    pub fn by_port(&self, port: u16, protocol: &str) -> Option<&Arc<ServiceRecord>> {
        self.ports.get(&ServicePort::new(port, protocol))
    }

    pub fn names(&self) -> &HashMap<ServiceName, Arc<ServiceRecord>> {
        &self.names
    }

    pub fn ports(&self) -> &HashMap<ServicePort, Arc<ServiceRecord>> {
        &self.ports
    }

    /// Effective records, one per (port, protocol) pair, in no particular
    /// order.
    pub fn records(&self) -> impl Iterator<Item = &Arc<ServiceRecord>> {
        self.ports
            .iter()
            .filter(|(key, _)| !key.protocol.is_empty())
            .map(|(_, record)| record)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.ports.is_empty()
    }
}
