//! netdb core library: protocol, service and EtherType databases.
//!
//! This crate parses the line-oriented `protocols(5)`, `services(5)` and
//! Debian `ethertypes` formats and indexes the records for lookup by name
//! and by number. Sources merge with deterministic override rules, so files
//! such as `/etc/services` can be layered over the builtin tables.
//! Parsing is side-effect free and works on any `Read`; file I/O is isolated
//! in `source`.
//!
//! Invariants:
//! - Protocol and EtherType numbers that do not parse fail the whole parse;
//!   malformed service lines are dropped.
//! - Indexes share records through `Arc`; records never change once built.
//! - Protocol-agnostic service keys keep the first definition merged.
//!
//! Version française (résumé):
//! Cette crate lit les fichiers `protocols`, `services` et `ethertypes`,
//! puis indexe les entrées par nom et par numéro. Les sources se superposent
//! de façon déterministe ; les E/S restent dans `source`.
//!
//! # Examples
//! ```
//! use netdb_core::{ProtocolIndex, ServiceIndex, parse_services};
//!
//! let protocols = ProtocolIndex::builtin();
//! let mut services = ServiceIndex::builtin();
//! services.merge_index(&ServiceIndex::from_records(parse_services(
//!     "my-app 8443/tcp".as_bytes(),
//!     &protocols,
//! )?));
//! assert_eq!(services.by_port(8443, "tcp").unwrap().name, "my-app");
//! # Ok::<(), netdb_core::ParseError>(())
//! ```

pub mod builtin;
mod defaults;
pub mod ethertype;
pub mod format;
pub mod protocol;
pub mod service;
mod source;

pub use defaults::{
    default_ethertypes, default_protocols, default_services, ethertype_by_name,
    ethertype_by_number, merge_default_ethertypes, merge_default_protocols,
    merge_default_services, protocol_by_name, protocol_by_number, reset_default_ethertypes,
    reset_default_protocols, reset_default_services, service_by_name, service_by_port,
    set_default_ethertypes, set_default_protocols, set_default_services,
};
pub use ethertype::{EtherTypeIndex, EtherTypeRecord, parse_ethertypes};
pub use format::ParseError;
pub use protocol::{ProtocolIndex, ProtocolRecord, parse_protocols};
pub use service::{ServiceIndex, ServiceName, ServicePort, ServiceRecord, parse_services};
pub use source::{
    Database, DatabaseConfig, LoadError, load_ethertypes, load_protocols, load_services,
};
