use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// Which sources make up a [`Database`](super::Database).
///
/// Files are layered over the builtin tables unless `builtin` is false, in
/// which case only the files are used.
///
/// # Examples
/// ```
/// use netdb_core::DatabaseConfig;
///
/// let config: DatabaseConfig =
///     serde_json::from_str(r#"{ "protocols": "/etc/protocols" }"#).unwrap();
/// assert!(config.builtin);
/// assert!(config.services.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// `protocols(5)` file.
    pub protocols: Option<PathBuf>,
    /// `services(5)` file.
    pub services: Option<PathBuf>,
    /// Debian `ethertypes` file.
    pub ethertypes: Option<PathBuf>,
    /// Start from the builtin tables.
    pub builtin: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            protocols: None,
            services: None,
            ethertypes: None,
            builtin: true,
        }
    }
}

impl DatabaseConfig {
    /// The conventional system files layered over the builtin tables.
    pub fn system() -> Self {
        Self {
            protocols: Some(PathBuf::from("/etc/protocols")),
            services: Some(PathBuf::from("/etc/services")),
            ethertypes: Some(PathBuf::from("/etc/ethertypes")),
            builtin: true,
        }
    }

    /// Drop configured files that do not exist, keeping the rest.
    ///
    /// Useful with [`DatabaseConfig::system`] on hosts that ship only some of
    /// the `/etc` files.
    pub fn existing_only(mut self) -> Self {
        for path in [&mut self.protocols, &mut self.services, &mut self.ethertypes] {
            if let Some(missing) = path.take_if(|p| !p.is_file()) {
                info!("skipping missing database file {}", missing.display());
            }
        }
        self
    }

    /// Read a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
