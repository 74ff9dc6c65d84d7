//! File-backed sources.
//!
//! All file I/O of the crate lives here: loaders open a file, hand the stream
//! to the matching parser and build an index. `Database` bundles the three
//! indexes and layers configured files over the builtin tables.

use std::fs::File;
use std::path::Path;

use log::info;

use crate::defaults;
use crate::ethertype::{EtherTypeIndex, parse_ethertypes};
use crate::format::error::ParseError;
use crate::protocol::{ProtocolIndex, parse_protocols};
use crate::service::{ServiceIndex, parse_services};

mod config;
mod error;

pub use config::DatabaseConfig;
pub use error::LoadError;

fn load<T>(path: &Path, parse: impl FnOnce(File) -> Result<T, ParseError>) -> Result<T, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse(file).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a protocol index from a `protocols(5)` file.
pub fn load_protocols(path: &Path) -> Result<ProtocolIndex, LoadError> {
    let records = load(path, parse_protocols)?;
    info!("loaded {} protocols from {}", records.len(), path.display());
    Ok(ProtocolIndex::from_records(records))
}

/// Build a service index from a `services(5)` file, resolving protocols
/// against `protocols`.
pub fn load_services(path: &Path, protocols: &ProtocolIndex) -> Result<ServiceIndex, LoadError> {
    let records = load(path, |file| parse_services(file, protocols))?;
    info!("loaded {} services from {}", records.len(), path.display());
    Ok(ServiceIndex::from_records(records))
}

/// Build an EtherType index from an `ethertypes` file.
pub fn load_ethertypes(path: &Path) -> Result<EtherTypeIndex, LoadError> {
    let records = load(path, parse_ethertypes)?;
    info!("loaded {} EtherTypes from {}", records.len(), path.display());
    Ok(EtherTypeIndex::from_records(records))
}

/// Protocol, service and EtherType indexes used together.
///
/// `Database::default()` is empty.
///
/// # Examples
/// ```
/// use netdb_core::Database;
///
/// let db = Database::builtin();
/// let https = db.services.by_name("https", "tcp").unwrap();
/// assert_eq!(https.port, 443);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Database {
    pub protocols: ProtocolIndex,
    pub services: ServiceIndex,
    pub ethertypes: EtherTypeIndex,
}

impl Database {
    pub fn builtin() -> Self {
        let protocols = ProtocolIndex::builtin();
        let services = ServiceIndex::from_records(crate::builtin::services(&protocols));
        Self {
            protocols,
            services,
            ethertypes: EtherTypeIndex::builtin(),
        }
    }

    /// Build a database from `config`.
    ///
    /// Each configured file is merged over the builtin tables (or over an
    /// empty database), overwriting colliding keys. Services resolve their
    /// protocols against the merged protocol index.
    pub fn load(config: &DatabaseConfig) -> Result<Self, LoadError> {
        let mut db = if config.builtin {
            Self::builtin()
        } else {
            Self::default()
        };
        if let Some(path) = &config.protocols {
            db.protocols.merge_index(&load_protocols(path)?);
        }
        if let Some(path) = &config.services {
            let services = load_services(path, &db.protocols)?;
            db.services.merge_index(&services);
        }
        if let Some(path) = &config.ethertypes {
            db.ethertypes.merge_index(&load_ethertypes(path)?);
        }
        Ok(db)
    }

    /// Replace the process-wide default indexes with this database.
    pub fn install_as_default(self) {
        defaults::set_default_protocols(self.protocols);
        defaults::set_default_services(self.services);
        defaults::set_default_ethertypes(self.ethertypes);
    }
}
