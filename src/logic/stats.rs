//! Traffic Statistics Register
//!
//! Process-wide counters cho monitor loop: totals, detection rate,
//! average confidence, per-type counts. Global state duy nhất của crate.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::engine::Detection;

/// Global stats register
static STATS: Lazy<RwLock<TrafficStats>> = Lazy::new(|| RwLock::new(TrafficStats::default()));

// ============================================================================
// TRAFFIC STATS
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct TrafficStats {
    pub total_packets: u64,
    pub threats_detected: u64,
    /// Sum of confidence over malicious detections only
    confidence_sum: f64,
    pub threat_type_counts: HashMap<String, u64>,
}

impl TrafficStats {
    /// Fold one detection into the counters
    pub fn record(&mut self, detection: &Detection) {
        self.total_packets += 1;

        if detection.result.is_malicious {
            self.threats_detected += 1;
            self.confidence_sum += detection.result.confidence as f64;
            *self
                .threat_type_counts
                .entry(detection.result.threat_type.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    /// Threats as a percentage of total packets
    pub fn detection_rate(&self) -> f64 {
        if self.total_packets > 0 {
            self.threats_detected as f64 / self.total_packets as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Mean confidence over malicious detections, 0 when none
    pub fn avg_confidence(&self) -> f64 {
        if self.threats_detected > 0 {
            self.confidence_sum / self.threats_detected as f64
        } else {
            0.0
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_packets: self.total_packets,
            threats_detected: self.threats_detected,
            detection_rate: self.detection_rate(),
            avg_confidence: self.avg_confidence(),
            top_threat_types: self.threat_type_counts.clone(),
        }
    }
}

/// Point-in-time view of the register, serializable for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_packets: u64,
    pub threats_detected: u64,
    pub detection_rate: f64,
    pub avg_confidence: f64,
    pub top_threat_types: HashMap<String, u64>,
}

// ============================================================================
// GLOBAL REGISTER API
// ============================================================================

/// Record a detection into the global register
pub fn record(detection: &Detection) {
    STATS.write().record(detection);
}

/// Snapshot the global register
pub fn snapshot() -> StatsSnapshot {
    STATS.read().snapshot()
}

/// Reset the global register (tests, monitor restart)
pub fn reset() {
    *STATS.write() = TrafficStats::default();
}

// ============================================================================
// TESTS
// ============================================================================
