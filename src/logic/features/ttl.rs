//! TTL Feature Extraction
//!
//! Distance từ TTL đến OS-default gần nhất (64/128/255).

use crate::logic::threat::rules::NORMAL_TTL_VALUES;

/// Distance of TTL from the nearest OS-default value.
///
/// Ties in the nearest search keep the first-encountered (lowest) candidate.
pub fn ttl_anomaly(ttl: i32) -> f32 {
    let closest_normal = NORMAL_TTL_VALUES
        .iter()
        .copied()
        .fold(NORMAL_TTL_VALUES[0], |prev, curr| {
            if (curr - ttl).abs() < (prev - ttl).abs() {
                curr
            } else {
                prev
            }
        });

    let difference = (closest_normal - ttl).abs();

    if difference > 30 {
        return 0.9;
    }
    if difference > 15 {
        return 0.6;
    }
    if difference > 5 {
        return 0.3;
    }

    0.1
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_defaults() {
        assert_eq!(ttl_anomaly(64), 0.1);
        assert_eq!(ttl_anomaly(128), 0.1);
        assert_eq!(ttl_anomaly(255), 0.1);
    }

    #[test]
    fn test_small_offsets() {
        assert_eq!(ttl_anomaly(60), 0.1); // diff 4
        assert_eq!(ttl_anomaly(54), 0.3); // diff 10
        assert_eq!(ttl_anomaly(45), 0.6); // diff 19
    }

    #[test]
    fn test_far_from_any_default() {
        // Nearest to 10 is 64, diff 54
        assert_eq!(ttl_anomaly(10), 0.9);
        assert_eq!(ttl_anomaly(32), 0.9); // diff 32
    }

    #[test]
    fn test_tie_breaks_toward_lowest() {
        // 96 is equidistant from 64 and 128; first-encountered (64) wins,
        // diff 32 > 30
        assert_eq!(ttl_anomaly(96), 0.9);
    }

    #[test]
    fn test_out_of_range_ttl_flows_through() {
        assert_eq!(ttl_anomaly(-100), 0.9);
        assert_eq!(ttl_anomaly(1000), 0.9);
    }
}
