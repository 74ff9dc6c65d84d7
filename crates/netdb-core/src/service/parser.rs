use std::io::Read;
use std::sync::Arc;

use log::debug;

use crate::format::error::ParseError;
use crate::format::reader::{Entry, for_each_entry, parse_unsigned};
use crate::protocol::{ProtocolIndex, ProtocolRecord};

use super::ServiceRecord;

/// Parse service definitions from `reader`, resolving each protocol against
/// `protocols`.
///
/// Malformed lines are skipped without error. Only a stream error fails the
/// parse, in which case no records are returned.
///
/// # Examples
/// ```
/// use netdb_core::{ProtocolIndex, parse_services};
///
/// let services = parse_services("domain 53/udp".as_bytes(), &ProtocolIndex::builtin())?;
/// assert_eq!(services[0].protocol.number, 17);
/// # Ok::<(), netdb_core::ParseError>(())
/// ```
pub fn parse_services<R: Read>(
    reader: R,
    protocols: &ProtocolIndex,
) -> Result<Vec<ServiceRecord>, ParseError> {
    let mut services = Vec::new();
    for_each_entry(reader, |entry| {
        match resolve_port_protocol(&entry, protocols) {
            Some((port, protocol_name, protocol)) => services.push(ServiceRecord {
                name: entry.name.to_string(),
                port,
                protocol_name: protocol_name.to_string(),
                protocol,
                aliases: entry.owned_aliases(),
            }),
            None => debug!("skipping malformed service entry on line {}", entry.line),
        }
        Ok(())
    })?;
    Ok(services)
}

fn resolve_port_protocol<'a>(
    entry: &Entry<'a>,
    protocols: &ProtocolIndex,
) -> Option<(u16, &'a str, Arc<ProtocolRecord>)> {
    let mut parts = entry.key.split('/');
    let (port, protocol_name) = match (parts.next(), parts.next(), parts.next()) {
        (Some(port), Some(protocol), None) if !port.is_empty() && !protocol.is_empty() => {
            (port, protocol)
        }
        _ => return None,
    };
    let port = parse_unsigned::<u16>(port, 10)?;
    let protocol = protocols.by_name(protocol_name)?;
    Some((port, protocol_name, Arc::clone(protocol)))
}

#[cfg(test)]
mod tests {
    use super::parse_services;
    use crate::format::error::ParseError;
    use crate::protocol::parser::tests::BrokenReader;
    use crate::protocol::{ProtocolIndex, parse_protocols};

    fn protocols() -> ProtocolIndex {
        let input = "\nfoobar\t12\nbaz\t\t234 bazalias\n";
        ProtocolIndex::from_records(parse_protocols(input.as_bytes()).unwrap())
    }

    #[test]
    fn parse_valid_services() {
        let input = "\ncrash 666/foobar burn\ncrash 666/baz burn\n";
        let services = parse_services(input.as_bytes(), &protocols()).unwrap();
        assert_eq!(services.len(), 2);

        assert_eq!(services[0].name, "crash");
        assert_eq!(services[0].port, 666);
        assert_eq!(services[0].protocol_name, "foobar");
        assert_eq!(services[0].protocol.name, "foobar");
        assert_eq!(services[0].protocol.number, 12);
        assert_eq!(services[0].aliases, vec!["burn"]);

        assert_eq!(services[1].protocol_name, "baz");
        assert_eq!(services[1].protocol.name, "baz");
        assert_eq!(services[1].protocol.number, 234);
        assert_eq!(services[1].aliases, vec!["burn"]);
    }

    #[test]
    fn parse_ignores_comments_and_blank_lines() {
        let input = concat!(
            "\n# A comment\n",
            "\t\t\t# Another comment\n",
            "crash 666/foobar burn # And this one.\n",
        );
        let services = parse_services(input.as_bytes(), &protocols()).unwrap();
        assert_eq!(services.len(), 1);
    }

    #[test]
    fn parse_skips_malformed_services() {
        let input = concat!(
            "\ncrash and burn\n",
            "crash and/and burn\n",
            "crash 666/and burn\n",
            "crash 666/undefined burn\n",
        );
        let services = parse_services(input.as_bytes(), &protocols()).unwrap();
        assert!(services.is_empty());
    }

    #[test]
    fn parse_skips_bad_port_protocol_fields() {
        let input = "a 1/foobar/baz\nb /foobar\nc 1/\nd 65536/foobar\ne +1/foobar\nf 0x10/foobar\n";
        let services = parse_services(input.as_bytes(), &protocols()).unwrap();
        assert!(services.is_empty());
    }

    #[test]
    fn parse_keeps_lines_around_skipped_ones() {
        let input = "first 1/foobar\nbroken 1/nope\nlast 65535/baz\n";
        let services = parse_services(input.as_bytes(), &protocols()).unwrap();
        let names: Vec<_> = services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "last"]);
        assert_eq!(services[1].port, 65535);
    }

    #[test]
    fn parse_resolves_protocol_aliases() {
        let services = parse_services("svc 7/bazalias".as_bytes(), &protocols()).unwrap();
        assert_eq!(services[0].protocol_name, "bazalias");
        assert_eq!(services[0].protocol.name, "baz");
    }

    #[test]
    fn parse_without_protocols_yields_nothing() {
        let services =
            parse_services("crash 666/foobar".as_bytes(), &ProtocolIndex::new()).unwrap();
        assert!(services.is_empty());
    }

    #[test]
    fn parse_reports_stream_errors() {
        let err = parse_services(BrokenReader, &ProtocolIndex::new()).unwrap_err();
        assert!(matches!(err, ParseError::Stream(_)));
    }
}
