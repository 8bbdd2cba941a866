//! TCP Flag Feature Extraction
//!
//! Phân tích flag combination - scan signatures có priority cao nhất.

/// Suspiciousness of the TCP flag combination.
///
/// Empty/absent flags → 0.3. Otherwise checked in priority order,
/// first match wins. Matching is substring-based on the raw
/// comma-separated string, exactly like the flag strings are produced.
pub fn flag_pattern(flags: &str) -> f32 {
    if flags.is_empty() {
        return 0.3;
    }

    // SYN+FIN never occurs in legitimate traffic
    if flags.contains("SYN") && flags.contains("FIN") {
        return 0.95;
    }
    // Xmas scan
    if flags.contains("FIN") && flags.contains("URG") && flags.contains("PSH") {
        return 0.9;
    }
    // NULL scan
    if flags == "NULL" {
        return 0.85;
    }
    if flags.contains("RST") && flags.contains("SYN") {
        return 0.8;
    }

    let flag_count = flags.split(',').count();
    if flag_count > 4 {
        return 0.7;
    }

    0.2
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_flags_default() {
        assert_eq!(flag_pattern(""), 0.3);
    }

    #[test]
    fn test_syn_fin_is_highest() {
        assert_eq!(flag_pattern("SYN,FIN"), 0.95);
        // Order inside the string does not matter
        assert_eq!(flag_pattern("FIN,SYN"), 0.95);
        // SYN+FIN outranks the Xmas combination
        assert_eq!(flag_pattern("SYN,FIN,URG,PSH"), 0.95);
    }

    #[test]
    fn test_xmas_scan() {
        assert_eq!(flag_pattern("FIN,URG,PSH"), 0.9);
    }

    #[test]
    fn test_null_scan_exact_match_only() {
        assert_eq!(flag_pattern("NULL"), 0.85);
        // "NULL,ACK" is not the NULL scan signature
        assert_eq!(flag_pattern("NULL,ACK"), 0.2);
    }

    #[test]
    fn test_rst_syn() {
        assert_eq!(flag_pattern("RST,SYN"), 0.8);
    }

    #[test]
    fn test_too_many_flags() {
        assert_eq!(flag_pattern("ACK,PSH,URG,ECE,CWR"), 0.7);
    }

    #[test]
    fn test_ordinary_combinations() {
        assert_eq!(flag_pattern("SYN,ACK"), 0.2);
        assert_eq!(flag_pattern("PSH,ACK"), 0.2);
        assert_eq!(flag_pattern("ACK"), 0.2);
    }
}
