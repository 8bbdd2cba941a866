//! Port Feature Extraction
//!
//! Trích xuất features từ source/dest port pairing.

use crate::logic::threat::rules::SUSPICIOUS_PORTS;

/// Suspiciousness of the port pairing.
///
/// Checks run in order, first match wins:
/// - ephemeral source + well-known dest = typical client→server, low
/// - registered-range dest = mildly unusual
/// - two privileged ports talking = unusual
pub fn port_entropy(source_port: u32, dest_port: u32) -> f32 {
    let is_ephemeral = source_port > 49152 && source_port < 65535;
    let is_well_known = dest_port < 1024;

    if is_ephemeral && is_well_known {
        return 0.2;
    }
    if dest_port > 1024 && dest_port < 49152 {
        return 0.6;
    }
    if source_port < 1024 && dest_port < 1024 {
        return 0.9;
    }

    0.4
}

/// Membership test against the fixed backdoor/trojan port set
pub fn known_malicious_port(dest_port: u32) -> bool {
    SUSPICIOUS_PORTS.contains(&dest_port)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_server_pattern_is_low() {
        assert_eq!(port_entropy(50000, 443), 0.2);
        assert_eq!(port_entropy(60000, 22), 0.2);
    }

    #[test]
    fn test_registered_range_dest() {
        // Source not ephemeral, dest in (1024, 49152)
        assert_eq!(port_entropy(12345, 31337), 0.6);
        // Ephemeral source still falls through to this check when dest >= 1024
        assert_eq!(port_entropy(50000, 8080), 0.6);
    }

    #[test]
    fn test_two_privileged_ports() {
        assert_eq!(port_entropy(512, 80), 0.9);
    }

    #[test]
    fn test_default_branch() {
        // Ephemeral source, ephemeral dest
        assert_eq!(port_entropy(50000, 60000), 0.4);
        // Boundary: 49152 and 65535 are NOT ephemeral (exclusive range)
        assert_eq!(port_entropy(49152, 60000), 0.4);
        assert_eq!(port_entropy(65535, 60000), 0.4);
    }

    #[test]
    fn test_known_malicious_port() {
        assert!(known_malicious_port(31337));
        assert!(known_malicious_port(1337));
        assert!(known_malicious_port(4444));
        assert!(!known_malicious_port(443));
        assert!(!known_malicious_port(80));
    }
}
