//! Packet Record
//!
//! Input type cho detection pipeline.
//! KHÔNG chứa logic - chỉ data structure.

use serde::{Deserialize, Serialize};

// ============================================================================
// PACKET RECORD
// ============================================================================

/// Metadata describing a single network packet.
///
/// No field is validated here: out-of-range ports, negative sizes and unknown
/// protocol strings all flow straight into the scoring math. Garbage in,
/// elevated score out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacketRecord {
    /// Source address, dotted-quad text (not parsed by the core)
    pub source_ip: String,
    /// Destination address, dotted-quad text
    pub dest_ip: String,
    /// Source port, expected 0-65535
    pub source_port: u32,
    /// Destination port, expected 0-65535
    pub dest_port: u32,
    /// "TCP" / "UDP" / "ICMP" expected, any string accepted
    pub protocol: String,
    /// Total bytes on the wire
    pub packet_size: i64,
    /// Payload bytes, expected <= packet_size but not enforced
    pub payload_size: i64,
    /// Time-to-live, expected 0-255
    pub ttl: i32,
    /// Comma-separated TCP flag tokens ("SYN,ACK"), absent for non-TCP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

impl PacketRecord {
    /// Flags as a plain &str, empty when absent
    pub fn flags_str(&self) -> &str {
        self.flags.as_deref().unwrap_or("")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PacketRecord {
        PacketRecord {
            source_ip: "10.0.0.1".to_string(),
            dest_ip: "10.0.0.2".to_string(),
            source_port: 50000,
            dest_port: 443,
            protocol: "TCP".to_string(),
            packet_size: 500,
            payload_size: 350,
            ttl: 64,
            flags: Some("SYN,ACK".to_string()),
        }
    }

    #[test]
    fn test_flags_str() {
        assert_eq!(sample().flags_str(), "SYN,ACK");

        let mut p = sample();
        p.flags = None;
        assert_eq!(p.flags_str(), "");
    }

    #[test]
    fn test_serde_skips_absent_flags() {
        let mut p = sample();
        p.flags = None;
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("flags").is_none());
    }
}
