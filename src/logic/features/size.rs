//! Size Feature Extraction
//!
//! Trích xuất features từ packet/payload size.

/// Deviation of sizes from normal Ethernet-frame ranges.
///
/// Checks run in order, first match wins.
pub fn size_anomaly(packet_size: i64, payload_size: i64) -> f32 {
    // Outside standard frame bounds (64..1500)
    if packet_size < 64 || packet_size > 1500 {
        return 0.8;
    }
    // Header-only packet, scan-like
    if payload_size == 0 && packet_size > 64 {
        return 0.7;
    }
    if packet_size > 1200 {
        return 0.5;
    }

    0.2
}

/// Payload bytes / total bytes, 0 when total is 0 (or negative)
pub fn payload_ratio(packet_size: i64, payload_size: i64) -> f32 {
    if packet_size > 0 {
        payload_size as f32 / packet_size as f32
    } else {
        0.0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_sizes() {
        assert_eq!(size_anomaly(40, 0), 0.8); // tiny scan packet
        assert_eq!(size_anomaly(1501, 1400), 0.8); // jumbo
        assert_eq!(size_anomaly(-10, 0), 0.8); // garbage flows through
    }

    #[test]
    fn test_header_only_packet() {
        assert_eq!(size_anomaly(100, 0), 0.7);
        // Exactly 64 with no payload falls through to default
        assert_eq!(size_anomaly(64, 0), 0.2);
    }

    #[test]
    fn test_large_but_valid() {
        assert_eq!(size_anomaly(1300, 1000), 0.5);
        assert_eq!(size_anomaly(1500, 1460), 0.5);
    }

    #[test]
    fn test_normal_size() {
        assert_eq!(size_anomaly(500, 350), 0.2);
    }

    #[test]
    fn test_payload_ratio() {
        assert_eq!(payload_ratio(500, 350), 0.7);
        assert_eq!(payload_ratio(100, 100), 1.0);
        // Zero total must not divide by zero
        assert_eq!(payload_ratio(0, 0), 0.0);
        assert_eq!(payload_ratio(-5, 10), 0.0);
    }
}
