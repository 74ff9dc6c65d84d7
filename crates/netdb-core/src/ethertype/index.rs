use std::collections::HashMap;
use std::sync::Arc;

use etherparse::EtherType;

use super::EtherTypeRecord;

/// EtherTypes indexed by name (official names and aliases) and by number.
#[derive(Debug, Clone, Default)]
pub struct EtherTypeIndex {
    names: HashMap<String, Arc<EtherTypeRecord>>,
    numbers: HashMap<u16, Arc<EtherTypeRecord>>,
}

impl EtherTypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = EtherTypeRecord>,
    {
        let mut index = Self::new();
        index.merge(records);
        index
    }

    /// Merge records in order, overwriting colliding names and numbers.
    pub fn merge<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = EtherTypeRecord>,
    {
        for record in records {
            let record = Arc::new(record);
            self.names.insert(record.name.clone(), Arc::clone(&record));
            for alias in &record.aliases {
                self.names.insert(alias.clone(), Arc::clone(&record));
            }
            self.numbers.insert(record.number, record);
        }
    }

    pub fn merge_index(&mut self, other: &EtherTypeIndex) {
        for (name, record) in &other.names {
            self.names.insert(name.clone(), Arc::clone(record));
        }
        for (number, record) in &other.numbers {
            self.numbers.insert(*number, Arc::clone(record));
        }
    }

    pub fn by_name(&self, name: &str) -> Option<&Arc<EtherTypeRecord>> {
        self.names.get(name)
    }

    pub fn by_number(&self, number: u16) -> Option<&Arc<EtherTypeRecord>> {
        self.numbers.get(&number)
    }

    /// Look up the EtherType of a decoded Ethernet II or VLAN header.
    pub fn by_ether_type(&self, ether_type: EtherType) -> Option<&Arc<EtherTypeRecord>> {
        self.by_number(ether_type.0)
    }

    pub fn names(&self) -> &HashMap<String, Arc<EtherTypeRecord>> {
        &self.names
    }

    pub fn numbers(&self) -> &HashMap<u16, Arc<EtherTypeRecord>> {
        &self.numbers
    }

    pub fn records(&self) -> impl Iterator<Item = &Arc<EtherTypeRecord>> {
        self.numbers.values()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.numbers.is_empty()
    }
}
