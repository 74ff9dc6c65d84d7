use netdb_core::{
    ProtocolIndex, ServiceIndex, merge_default_services, parse_services, protocol_by_number,
    reset_default_services, service_by_name, service_by_port,
};

// Single test: the defaults are process-wide and tests run in parallel.
#[test]
fn defaults_lifecycle() {
    let dns = service_by_name("domain", "udp").expect("builtin domain/udp");
    assert_eq!(dns.port, 53);
    assert_eq!(dns.protocol.name, "udp");
    assert_eq!(service_by_port(53, "udp").unwrap().name, "domain");
    assert_eq!(protocol_by_number(6).unwrap().name, "tcp");

    let overlay = parse_services("domain 5300/udp".as_bytes(), &ProtocolIndex::builtin()).unwrap();
    merge_default_services(&ServiceIndex::from_records(overlay));
    assert_eq!(service_by_name("domain", "udp").unwrap().port, 5300);
    assert_eq!(service_by_name("domain", "tcp").unwrap().port, 53);
    // A handle taken before the merge keeps its record.
    assert_eq!(dns.port, 53);

    reset_default_services();
    assert_eq!(service_by_name("domain", "udp").unwrap().port, 53);
}
