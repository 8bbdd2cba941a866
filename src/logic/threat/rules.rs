//! Threat Rules, Weights & Port Tables
//!
//! Định nghĩa các constant cho scoring và classification.
//! KHÔNG chứa logic classify - chỉ constants và config.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// PORT TABLES (Constants - không đổi lúc runtime)
// ============================================================================

/// Destination ports associated with known backdoors/trojans
pub const SUSPICIOUS_PORTS: &[u32] = &[
    1337, 31337, 12345, 6667, 6666, 4444, 5555,
    27374, 27665, 20034, 9996, 1243, 6711, 6776,
];

/// Commonly attacked service ports (Telnet, SMB, RDP, databases)
pub const HIGH_RISK_PORTS: &[u32] = &[23, 135, 139, 445, 3389, 1433, 3306, 5432];

/// OS-default TTL values (Linux, Windows, network gear)
pub const NORMAL_TTL_VALUES: [i32; 3] = [64, 128, 255];

/// Conventional destination ports per protocol.
/// ICMP has no port concept - empty set on purpose.
pub static EXPECTED_PROTOCOL_PORTS: Lazy<HashMap<&'static str, &'static [u32]>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, &'static [u32]> = HashMap::new();
        map.insert("TCP", &[80, 443, 22, 21, 25, 110, 143]);
        map.insert("UDP", &[53, 67, 68, 123, 161, 162]);
        map.insert("ICMP", &[]);
        map
    });

// ============================================================================
// SCORE WEIGHTS (How much each feature contributes to the anomaly score)
// ============================================================================

pub const PORT_ENTROPY_WEIGHT: f32 = 0.15;
pub const SIZE_ANOMALY_WEIGHT: f32 = 0.12;
pub const PROTOCOL_SCORE_WEIGHT: f32 = 0.18;
pub const FLAG_PATTERN_WEIGHT: f32 = 0.25;
pub const TTL_ANOMALY_WEIGHT: f32 = 0.10;
pub const MALICIOUS_PORT_WEIGHT: f32 = 0.15;
pub const PAYLOAD_RATIO_WEIGHT: f32 = 0.05;

// ============================================================================
// CLASSIFICATION THRESHOLDS
// ============================================================================

/// Above this anomaly score = malicious
pub const MALICIOUS_THRESHOLD: f32 = 0.45;

/// Reported confidence is clamped into [floor, ceiling] for every verdict
pub const CONFIDENCE_FLOOR: f32 = 0.60;
pub const CONFIDENCE_CEILING: f32 = 0.99;

/// Rule-cascade triggers (checked against individual features)
pub const FLAG_RULE_MIN: f32 = 0.8;
pub const PROTOCOL_RULE_MIN: f32 = 0.7;
pub const SIZE_RULE_MIN: f32 = 0.7;
pub const TTL_RULE_MIN: f32 = 0.7;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

/// Thresholds for classification (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    /// Above this anomaly score = malicious
    pub malicious_min: f32,
    /// Confidence clamp floor
    pub confidence_floor: f32,
    /// Confidence clamp ceiling
    pub confidence_ceiling: f32,
    /// flag_pattern trigger for the scan rule
    pub flag_rule_min: f32,
    /// protocol_score trigger for the protocol-anomaly rule
    pub protocol_rule_min: f32,
    /// size_anomaly trigger for the flood rule
    pub size_rule_min: f32,
    /// ttl_anomaly trigger for the spoofing rule
    pub ttl_rule_min: f32,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            malicious_min: MALICIOUS_THRESHOLD,
            confidence_floor: CONFIDENCE_FLOOR,
            confidence_ceiling: CONFIDENCE_CEILING,
            flag_rule_min: FLAG_RULE_MIN,
            protocol_rule_min: PROTOCOL_RULE_MIN,
            size_rule_min: SIZE_RULE_MIN,
            ttl_rule_min: TTL_RULE_MIN,
        }
    }
}

impl ClassificationThresholds {
    /// High sensitivity - lower verdict threshold, more alerts
    pub fn high_sensitivity() -> Self {
        Self {
            malicious_min: 0.35,
            ..Default::default()
        }
    }

    /// Low sensitivity - higher verdict threshold, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            malicious_min: 0.55,
            ..Default::default()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
