//! Process-wide default indexes.
//!
//! The package-level lookups route through one default index per record
//! kind. A default starts uninitialized and is populated from the built-in
//! tables by the first lookup that finds it empty. Initialization happens
//! under a write lock, so concurrent first use is safe and runs the builtin
//! materialization once.
//!
//! Callers wanting a different data set should seed the defaults with
//! `set_default_*` or `merge_default_*` during startup. Replacing a default
//! never affects records or indexes already handed out; they stay alive
//! through their `Arc`s.

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::ethertype::{EtherTypeIndex, EtherTypeRecord};
use crate::protocol::{ProtocolIndex, ProtocolRecord};
use crate::service::{ServiceIndex, ServiceRecord};

type Slot<T> = RwLock<Option<Arc<T>>>;

static PROTOCOLS: Slot<ProtocolIndex> = RwLock::new(None);
static SERVICES: Slot<ServiceIndex> = RwLock::new(None);
static ETHERTYPES: Slot<EtherTypeIndex> = RwLock::new(None);

fn get_or_init<T>(slot: &Slot<T>, kind: &str, init: fn() -> T) -> Arc<T> {
    {
        let guard = slot.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = guard.as_ref() {
            return Arc::clone(index);
        }
    }
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    let index = guard.get_or_insert_with(|| {
        debug!("initializing default {kind} index from builtin tables");
        Arc::new(init())
    });
    Arc::clone(index)
}

fn replace<T>(slot: &Slot<T>, index: Option<T>) {
    *slot.write().unwrap_or_else(PoisonError::into_inner) = index.map(Arc::new);
}

fn update<T: Clone>(slot: &Slot<T>, kind: &str, init: fn() -> T, apply: impl FnOnce(&mut T)) {
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    let index = guard.get_or_insert_with(|| {
        debug!("initializing default {kind} index from builtin tables");
        Arc::new(init())
    });
    apply(Arc::make_mut(index));
}

/// The default protocol index, initialized from the builtin tables on first
/// use.
pub fn default_protocols() -> Arc<ProtocolIndex> {
    get_or_init(&PROTOCOLS, "protocol", ProtocolIndex::builtin)
}

/// Replace the default protocol index.
pub fn set_default_protocols(index: ProtocolIndex) {
    replace(&PROTOCOLS, Some(index));
}

/// Layer `index` over the default protocol index (builtin if still
/// uninitialized), overwriting colliding keys.
pub fn merge_default_protocols(index: &ProtocolIndex) {
    update(&PROTOCOLS, "protocol", ProtocolIndex::builtin, |current| {
        current.merge_index(index)
    });
}

/// Return the default protocol index to its uninitialized state.
pub fn reset_default_protocols() {
    replace::<ProtocolIndex>(&PROTOCOLS, None);
}

/// Look up a protocol by (alias) name in the default index.
///
/// # Examples
/// ```
/// let tcp = netdb_core::protocol_by_name("tcp").unwrap();
/// assert_eq!(tcp.number, 6);
/// ```
pub fn protocol_by_name(name: &str) -> Option<Arc<ProtocolRecord>> {
    default_protocols().by_name(name).cloned()
}

/// Look up a protocol by number in the default index.
///
/// # Examples
/// ```
/// let udp = netdb_core::protocol_by_number(17).unwrap();
/// assert_eq!(udp.name, "udp");
/// ```
pub fn protocol_by_number(number: u8) -> Option<Arc<ProtocolRecord>> {
    default_protocols().by_number(number).cloned()
}

/// The default service index, initialized from the builtin tables on first
/// use.
pub fn default_services() -> Arc<ServiceIndex> {
    get_or_init(&SERVICES, "service", ServiceIndex::builtin)
}

pub fn set_default_services(index: ServiceIndex) {
    replace(&SERVICES, Some(index));
}

pub fn merge_default_services(index: &ServiceIndex) {
    update(&SERVICES, "service", ServiceIndex::builtin, |current| {
        current.merge_index(index)
    });
}

pub fn reset_default_services() {
    replace::<ServiceIndex>(&SERVICES, None);
}

/// Look up a service by (alias) name and protocol in the default index;
/// an empty protocol selects the first service of that name.
///
/// # Examples
/// ```
/// let dns = netdb_core::service_by_name("domain", "udp").unwrap();
/// assert_eq!(dns.port, 53);
/// ```
pub fn service_by_name(name: &str, protocol: &str) -> Option<Arc<ServiceRecord>> {
    default_services().by_name(name, protocol).cloned()
}

/// Look up a service by port and protocol in the default index; an empty
/// protocol selects the first service on that port.
///
/// # Examples
/// ```
/// let dns = netdb_core::service_by_port(53, "udp").unwrap();
/// assert_eq!(dns.name, "domain");
/// ```
pub fn service_by_port(port: u16, protocol: &str) -> Option<Arc<ServiceRecord>> {
    default_services().by_port(port, protocol).cloned()
}

pub fn default_ethertypes() -> Arc<EtherTypeIndex> {
    get_or_init(&ETHERTYPES, "EtherType", EtherTypeIndex::builtin)
}

pub fn set_default_ethertypes(index: EtherTypeIndex) {
    replace(&ETHERTYPES, Some(index));
}

pub fn merge_default_ethertypes(index: &EtherTypeIndex) {
    update(&ETHERTYPES, "EtherType", EtherTypeIndex::builtin, |current| {
        current.merge_index(index)
    });
}

pub fn reset_default_ethertypes() {
    replace::<EtherTypeIndex>(&ETHERTYPES, None);
}

pub fn ethertype_by_name(name: &str) -> Option<Arc<EtherTypeRecord>> {
    default_ethertypes().by_name(name).cloned()
}

pub fn ethertype_by_number(number: u16) -> Option<Arc<EtherTypeRecord>> {
    default_ethertypes().by_number(number).cloned()
}
