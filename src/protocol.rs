//! Fixed protocol-number → protocol-name translation table.
//!
//! IANA protocol numbers subset, as assigned in
//! <https://iana.org/assignments/protocol-numbers/protocol-numbers.xhtml>.
//! Numbers outside the table translate to `"unknown"` rather than failing.

/// Name used for protocol numbers absent from the table.
pub const UNKNOWN_PROTOCOL: &str = "unknown";

/// Translate a protocol number (as it appears in the log, already trimmed)
/// to its lowercase IANA name.
pub fn protocol_name(number: &str) -> &'static str {
    match number {
        "1" => "icmp",
        "2" => "igmp",
        "6" => "tcp",
        "17" => "udp",
        "41" => "ipv6",
        "47" => "gre",
        "50" => "esp",
        "51" => "ah",
        "58" => "icmpv6",
        "89" => "ospf",
        "103" => "pim",
        "112" => "vrrp",
        "115" => "l2tp",
        "132" => "sctp",
        "137" => "mpls-in-ip",
        "255" => "reserved",
        _ => UNKNOWN_PROTOCOL,
    }
}
