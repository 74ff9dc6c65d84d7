use std::collections::HashMap;
use std::sync::Arc;

use etherparse::IpNumber;

use super::ProtocolRecord;

/// Protocols indexed by name (official names and aliases) and by number.
///
/// Records are shared between keys through `Arc` handles and are never
/// mutated once indexed.
///
/// # Examples
/// ```
/// use netdb_core::{ProtocolIndex, parse_protocols};
///
/// let index = ProtocolIndex::from_records(parse_protocols("udp 17 UDP".as_bytes())?);
/// assert_eq!(index.by_name("UDP").map(|p| p.number), Some(17));
/// assert_eq!(index.by_number(17).map(|p| p.name.as_str()), Some("udp"));
/// # Ok::<(), netdb_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProtocolIndex {
    names: HashMap<String, Arc<ProtocolRecord>>,
    numbers: HashMap<u8, Arc<ProtocolRecord>>,
}

impl ProtocolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ProtocolRecord>,
    {
        let mut index = Self::new();
        index.merge(records);
        index
    }

    /// Merge records in order; later records overwrite earlier ones under
    /// colliding names, aliases, or numbers.
    pub fn merge<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = ProtocolRecord>,
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

    /// Copy every key of `other` into this index, overwriting on collision.
    pub fn merge_index(&mut self, other: &ProtocolIndex) {
        for (name, record) in &other.names {
            self.names.insert(name.clone(), Arc::clone(record));
        }
        for (number, record) in &other.numbers {
            self.numbers.insert(*number, Arc::clone(record));
        }
    }

    pub fn by_name(&self, name: &str) -> Option<&Arc<ProtocolRecord>> {
        self.names.get(name)
    }

    pub fn by_number(&self, number: u8) -> Option<&Arc<ProtocolRecord>> {
        self.numbers.get(&number)
    }

    /// Look up the protocol carried in an IP header's protocol/next-header
    /// field.
    pub fn by_ip_number(&self, number: IpNumber) -> Option<&Arc<ProtocolRecord>> {
        self.by_number(number.0)
    }

    pub fn names(&self) -> &HashMap<String, Arc<ProtocolRecord>> {
        &self.names
    }

    pub fn numbers(&self) -> &HashMap<u8, Arc<ProtocolRecord>> {
        &self.numbers
    }

    /// Effective records, one per protocol number, in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &Arc<ProtocolRecord>> {
        self.numbers.values()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.numbers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use etherparse::IpNumber;

    use super::ProtocolIndex;
    use crate::protocol::{ProtocolRecord, parse_protocols};

    fn index_from(input: &str) -> ProtocolIndex {
        ProtocolIndex::from_records(parse_protocols(input.as_bytes()).unwrap())
    }

    fn record(name: &str, number: u8, aliases: &[&str]) -> ProtocolRecord {
        ProtocolRecord {
            name: name.to_string(),
            number,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn build_index() {
        let index = index_from("ratzfatz\t123 schwuppdiwupp siebenmeilenstiefler\n");
        assert_eq!(index.names().len(), 3);
        assert!(index.names().contains_key("ratzfatz"));
        assert!(index.names().contains_key("schwuppdiwupp"));
        assert!(index.names().contains_key("siebenmeilenstiefler"));
        assert_eq!(index.numbers().len(), 1);
        assert!(index.numbers().contains_key(&123));
    }

    #[test]
    fn keys_share_one_record() {
        let index = index_from("ratzfatz 123 schwuppdiwupp\n");
        let by_name = index.by_name("ratzfatz").unwrap();
        let by_alias = index.by_name("schwuppdiwupp").unwrap();
        let by_number = index.by_number(123).unwrap();
        assert!(Arc::ptr_eq(by_name, by_alias));
        assert!(Arc::ptr_eq(by_name, by_number));
    }

    #[test]
    fn lookup_missing_keys() {
        let index = index_from("foobar 66\n");
        assert!(index.by_name("frotz").is_none());
        assert!(index.by_name("").is_none());
        assert!(index.by_number(67).is_none());
    }

    #[test]
    fn merge_last_write_wins() {
        let mut index = ProtocolIndex::new();
        index.merge([record("ip", 0, &["IP"]), record("hopopt", 0, &["HOPOPT"])]);
        assert_eq!(index.by_number(0).unwrap().name, "hopopt");
        assert_eq!(index.by_name("ip").unwrap().number, 0);

        index.merge([record("tcp", 6, &[]), record("tcp", 7, &[])]);
        assert_eq!(index.by_name("tcp").unwrap().number, 7);
        // The earlier number key still points at the first tcp record.
        assert_eq!(index.by_number(6).unwrap().name, "tcp");
    }

    #[test]
    fn merge_indices() {
        let mut index = index_from("ratzfatz\t123 schwuppdiwupp siebenmeilenstiefler\n");
        index.merge_index(&index_from("foobar\t66\n"));
        assert_eq!(index.names().len(), 4);
        assert!(index.names().contains_key("ratzfatz"));
        assert!(index.names().contains_key("foobar"));
        assert_eq!(index.numbers().len(), 2);
        assert!(index.numbers().contains_key(&66));
    }

    #[test]
    fn merge_index_overwrites() {
        let mut index = index_from("tcp 6 TCP\n");
        index.merge_index(&index_from("tcp 99 custom\n"));
        assert_eq!(index.by_name("tcp").unwrap().number, 99);
        // Keys absent from the overlay keep their old records.
        assert_eq!(index.by_name("TCP").unwrap().number, 6);
        assert_eq!(index.by_number(6).unwrap().number, 6);
    }

    #[test]
    fn merge_index_into_empty_is_bijection() {
        let source = index_from("a 1 x y\nb 2\nc 3 z\n");
        let mut target = ProtocolIndex::new();
        assert!(target.is_empty());
        target.merge_index(&source);

        assert_eq!(target.names().len(), source.names().len());
        for (name, record) in source.names() {
            assert!(Arc::ptr_eq(target.by_name(name).unwrap(), record));
        }
        assert_eq!(target.numbers().len(), source.numbers().len());
        for (number, record) in source.numbers() {
            assert!(Arc::ptr_eq(target.by_number(*number).unwrap(), record));
        }
    }

    #[test]
    fn lookup_by_ip_number() {
        let index = index_from("tcp 6 TCP\nudp 17 UDP\n");
        assert_eq!(index.by_ip_number(IpNumber::TCP).unwrap().name, "tcp");
        assert_eq!(index.by_ip_number(IpNumber::UDP).unwrap().name, "udp");
        assert_eq!(index.by_name("udp").unwrap().ip_number(), IpNumber::UDP);
    }

    #[test]
    fn records_are_distinct_per_number() {
        let index = index_from("a 1 x\nb 2\n");
        let mut names: Vec<_> = index.records().map(|r| r.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }
}
