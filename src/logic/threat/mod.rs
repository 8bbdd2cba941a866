//! Threat Module
//!
//! Scoring và phân loại threat dựa trên feature vector.
//! Đây là CORE STEP - nơi quyết định malicious/benign và threat type.
//!
//! ## Structure
//! - `types`: Core types (ThreatType, Severity, ClassificationResult)
//! - `rules`: Weights, thresholds, port tables
//! - `scorer`: Weighted anomaly score
//! - `classifier`: Verdict + ordered rule cascade
//!
//! ## Usage
//! ```ignore
//! use crate::logic::threat::{classify, ThreatType};
//!
//! let result = classify(&features);
//! if result.is_malicious {
//!     println!("{} ({})", result.threat_type, result.severity);
//! }
//! ```

pub mod types;
pub mod rules;
pub mod scorer;
pub mod classifier;

// Re-export main types for convenience
pub use types::{ClassificationResult, DetectionStatus, Severity, ThreatType};

pub use rules::{ClassificationThresholds, CONFIDENCE_CEILING, CONFIDENCE_FLOOR, MALICIOUS_THRESHOLD};

pub use scorer::anomaly_score;

pub use classifier::{classify, classify_with_thresholds};
