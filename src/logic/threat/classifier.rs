//! Threat Classifier
//!
//! CHỈ chứa logic classify - không có types, không có thresholds.
//! Input: FeatureVector
//! Output: ClassificationResult

use super::rules::ClassificationThresholds;
use super::scorer::anomaly_score;
use super::types::{ClassificationResult, Severity, ThreatType};
use crate::logic::features::FeatureVector;

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Main classification function
///
/// CORE LOGIC - total over the FeatureVector domain, never fails
pub fn classify(features: &FeatureVector) -> ClassificationResult {
    classify_with_thresholds(features, &ClassificationThresholds::default())
}

/// Classification with custom thresholds
pub fn classify_with_thresholds(
    features: &FeatureVector,
    thresholds: &ClassificationThresholds,
) -> ClassificationResult {
    let score = anomaly_score(features);

    let is_malicious = score > thresholds.malicious_min;

    // Confidence is the raw score clamped into a fixed floor/ceiling,
    // for EVERY verdict - benign calls still report >= 0.60.
    let confidence = score.clamp(thresholds.confidence_floor, thresholds.confidence_ceiling);

    // Ordered cascade: several rules can be true at once, the FIRST match
    // wins. A NULL scan to a backdoor port is a scan, not a backdoor hit.
    let (threat_type, severity) = if !is_malicious {
        (ThreatType::NormalTraffic, Severity::Low)
    } else if features.flag_pattern > thresholds.flag_rule_min {
        (ThreatType::TcpScanAttack, Severity::High)
    } else if features.known_malicious_port {
        (ThreatType::KnownMaliciousPort, Severity::Critical)
    } else if features.protocol_score > thresholds.protocol_rule_min {
        (ThreatType::ProtocolAnomaly, Severity::Medium)
    } else if features.size_anomaly > thresholds.size_rule_min {
        (ThreatType::DdosAttempt, Severity::High)
    } else if features.ttl_anomaly > thresholds.ttl_rule_min {
        (ThreatType::SpoofingAttempt, Severity::High)
    } else {
        (ThreatType::AnomalousBehavior, Severity::Medium)
    };

    ClassificationResult {
        is_malicious,
        confidence,
        threat_type,
        severity,
        anomaly_score: score,
    }
}

// ============================================================================
// TESTS
// ============================================================================
