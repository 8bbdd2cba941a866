//! Anomaly Scorer
//!
//! Gộp bảy features thành một weighted anomaly score.
//! CHỈ chứa phép cộng có trọng số - không threshold, không verdict.

use super::rules::{
    FLAG_PATTERN_WEIGHT, MALICIOUS_PORT_WEIGHT, PAYLOAD_RATIO_WEIGHT, PORT_ENTROPY_WEIGHT,
    PROTOCOL_SCORE_WEIGHT, SIZE_ANOMALY_WEIGHT, TTL_ANOMALY_WEIGHT,
};
use crate::logic::features::FeatureVector;

/// Weighted sum of the feature vector.
///
/// The malicious-port boolean contributes its full weight when set.
/// The payload-ratio term is inverted: LOW payload ratio raises suspicion
/// (header-heavy traffic looks like scanning). No clamp here - clamping
/// happens downstream on confidence only.
pub fn anomaly_score(features: &FeatureVector) -> f32 {
    let mut score = 0.0f32;

    score += features.port_entropy * PORT_ENTROPY_WEIGHT;
    score += features.size_anomaly * SIZE_ANOMALY_WEIGHT;
    score += features.protocol_score * PROTOCOL_SCORE_WEIGHT;
    score += features.flag_pattern * FLAG_PATTERN_WEIGHT;
    score += features.ttl_anomaly * TTL_ANOMALY_WEIGHT;
    score += if features.known_malicious_port { 1.0 } else { 0.0 } * MALICIOUS_PORT_WEIGHT;
    score += (1.0 - features.payload_ratio) * PAYLOAD_RATIO_WEIGHT;

    score
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_features_score_payload_weight() {
        // Zero payload ratio inverts to a full payload-weight contribution
        let fv = FeatureVector::default();
        assert!((anomaly_score(&fv) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_malicious_port_contributes_full_weight() {
        let base = FeatureVector::default();
        let flagged = FeatureVector {
            known_malicious_port: true,
            ..Default::default()
        };

        let delta = anomaly_score(&flagged) - anomaly_score(&base);
        assert!((delta - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_full_payload_ratio_removes_payload_term() {
        let fv = FeatureVector {
            payload_ratio: 1.0,
            ..Default::default()
        };
        assert!(anomaly_score(&fv).abs() < 1e-6);
    }

    #[test]
    fn test_maxed_features_near_one() {
        let fv = FeatureVector {
            port_entropy: 1.0,
            size_anomaly: 1.0,
            protocol_score: 1.0,
            flag_pattern: 1.0,
            ttl_anomaly: 1.0,
            known_malicious_port: true,
            payload_ratio: 0.0,
        };
        assert!((anomaly_score(&fv) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_known_scenario_score() {
        // Benign HTTPS exchange: 0.2,0.2,0.1,0.2,0.1,false,0.7
        let fv = FeatureVector {
            port_entropy: 0.2,
            size_anomaly: 0.2,
            protocol_score: 0.1,
            flag_pattern: 0.2,
            ttl_anomaly: 0.1,
            known_malicious_port: false,
            payload_ratio: 0.7,
        };
        // 0.03 + 0.024 + 0.018 + 0.05 + 0.01 + 0 + 0.015 = 0.147
        assert!((anomaly_score(&fv) - 0.147).abs() < 1e-5);
    }
}
