// Generated by `regenerate_builtin` from the Debian netbase ethertypes file.

pub(crate) static ETHERTYPES: &[(&str, u16, &[&str], &str)] = &[
    ("IPv4", 0x0800, &["ip", "ip4"], "Internet IP (IPv4)"),
    ("X25", 0x0805, &[], ""),
    ("ARP", 0x0806, &["ether-arp"], ""),
    ("FR_ARP", 0x0808, &[], "Frame Relay ARP        [RFC1701]"),
    ("BPQ", 0x08FF, &[], "G8BPQ AX.25 Ethernet Packet"),
    ("DEC", 0x6000, &[], "DEC Assigned proto"),
    ("DNA_DL", 0x6001, &[], "DEC DNA Dump/Load"),
    ("DNA_RC", 0x6002, &[], "DEC DNA Remote Console"),
    ("DNA_RT", 0x6003, &[], "DEC DNA Routing"),
    ("LAT", 0x6004, &[], "DEC LAT"),
    ("DIAG", 0x6005, &[], "DEC Diagnostics"),
    ("CUST", 0x6006, &[], "DEC Customer use"),
    ("SCA", 0x6007, &[], "DEC Systems Comms Arch"),
    ("TEB", 0x6558, &[], "Trans Ether Bridging   [RFC1701]"),
    ("RAW_FR", 0x6559, &[], "Raw Frame  Relay       [RFC1701]"),
    ("RARP", 0x8035, &[], "Reverse ARP            [RFC903]"),
    ("AARP", 0x80F3, &[], "Appletalk AARP"),
    ("ATALK", 0x809B, &[], "Appletalk"),
    ("802_1Q", 0x8100, &["8021q", "1q", "802.1q", "dot1q"], "802.1Q Virtual LAN tagged frame"),
    ("IPX", 0x8137, &[], "Novell IPX"),
    ("NetBEUI", 0x8191, &[], "NetBEUI"),
    ("IPv6", 0x86DD, &["ip6"], "IP version 6"),
    ("PPP", 0x880B, &[], "PPP"),
    ("ATMMPOA", 0x884C, &[], "MultiProtocol over ATM"),
    ("MPLS", 0x8847, &[], "MPLS unicast"),
    ("MPLS_MCAST", 0x8848, &[], "MPLS multicast"),
    ("PPP_DISC", 0x8863, &[], "PPPoE discovery messages"),
    ("PPP_SES", 0x8864, &[], "PPPoE session messages"),
    ("ATMFATE", 0x8884, &[], "Frame-based ATM Transport over Ethernet"),
    ("EAPOL", 0x888E, &[], "Port-based network access control (802.1X)"),
    ("802_1AD", 0x88A8, &["802.1ad", "qinq"], "802.1ad Provider Bridging (Q-in-Q)"),
    ("RoMON", 0x88BF, &["mikrotik-rommon", "mt-rommon"], "MikroTik RoMON (unofficial)"),
    ("LLDP", 0x88CC, &["lldp"], "Link Layer Discovery Protocol"),
    ("MACSEC", 0x88E5, &["802.1ae"], "802.1AE MAC Security"),
    ("PTP", 0x88F7, &["ieee1588"], "Precision Time Protocol over Ethernet"),
    ("FCOE", 0x8906, &[], "Fibre Channel over Ethernet"),
    ("FIP", 0x8914, &[], "FCoE Initialization Protocol"),
    ("LOOP", 0x9000, &["loopback"], "loop proto"),
];
