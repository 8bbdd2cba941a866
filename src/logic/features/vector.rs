//! Feature Vector - Derived representation of one packet
//!
//! Seven features, all in [0,1] except the boolean membership test.
//! Field order follows `layout::FEATURE_LAYOUT`.

use serde::{Deserialize, Serialize};
use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Derived features for one packet, one vector per `extract` call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Heuristic suspiciousness of the source/dest port pairing
    pub port_entropy: f32,
    /// Deviation of packet/payload size from normal ranges
    pub size_anomaly: f32,
    /// Mismatch between protocol and its conventional ports
    pub protocol_score: f32,
    /// Suspiciousness of the TCP flag combination
    pub flag_pattern: f32,
    /// Distance of TTL from the nearest OS-default value
    pub ttl_anomaly: f32,
    /// Destination port is in the fixed backdoor-port set
    pub known_malicious_port: bool,
    /// Payload bytes / total bytes (0 when total is 0)
    pub payload_ratio: f32,
}

impl FeatureVector {
    /// Values in layout order, boolean encoded as 0/1
    pub fn as_array(&self) -> [f32; FEATURE_COUNT] {
        [
            self.port_entropy,
            self.size_anomaly,
            self.protocol_score,
            self.flag_pattern,
            self.ttl_anomaly,
            if self.known_malicious_port { 1.0 } else { 0.0 },
            self.payload_ratio,
        ]
    }

    /// Get feature value by layout name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).map(|i| self.as_array()[i])
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.as_array().iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::HashMap<_, _>>(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
