//! Protocol Feature Extraction
//!
//! Mismatch giữa protocol và conventional destination ports.
//! Chứa branch random duy nhất của core - rng được inject để test pin được.

use rand::Rng;

use crate::logic::threat::rules::EXPECTED_PROTOCOL_PORTS;

/// Mismatch between protocol and its conventional destination ports.
///
/// Dest port in the protocol's expected set → 0.1. Otherwise ICMP draws
/// a coin: with probability 0.1 it yields 0.8, everything else 0.4.
/// This is the sole non-deterministic branch in the core.
pub fn protocol_score<R: Rng>(protocol: &str, dest_port: u32, rng: &mut R) -> f32 {
    let expected: &[u32] = EXPECTED_PROTOCOL_PORTS
        .get(protocol)
        .copied()
        .unwrap_or(&[]);

    if expected.contains(&dest_port) {
        return 0.1;
    }

    if protocol == "ICMP" && rng.gen::<f32>() > 0.9 {
        return 0.8;
    }

    0.4
}

// ============================================================================
// TESTS
// ============================================================================
