//! Threat Types
//!
//! Core types cho threat classification.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// SEVERITY
// ============================================================================

/// Four-level ordinal severity attached to every verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Severity::Low => 0,
            Severity::Medium => 1,
            Severity::High => 2,
            Severity::Critical => 3,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "#10b981",      // Green
            Severity::Medium => "#f59e0b",   // Yellow
            Severity::High => "#f97316",     // Orange
            Severity::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// THREAT TYPE
// ============================================================================

/// Named threat category assigned by the rule cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatType {
    #[serde(rename = "Normal Traffic")]
    NormalTraffic,
    #[serde(rename = "TCP Scan Attack")]
    TcpScanAttack,
    #[serde(rename = "Known Malicious Port")]
    KnownMaliciousPort,
    #[serde(rename = "Protocol Anomaly")]
    ProtocolAnomaly,
    #[serde(rename = "DDoS Attempt")]
    DdosAttempt,
    #[serde(rename = "Spoofing Attempt")]
    SpoofingAttempt,
    #[serde(rename = "Anomalous Behavior")]
    AnomalousBehavior,
}

impl ThreatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatType::NormalTraffic => "Normal Traffic",
            ThreatType::TcpScanAttack => "TCP Scan Attack",
            ThreatType::KnownMaliciousPort => "Known Malicious Port",
            ThreatType::ProtocolAnomaly => "Protocol Anomaly",
            ThreatType::DdosAttempt => "DDoS Attempt",
            ThreatType::SpoofingAttempt => "Spoofing Attempt",
            ThreatType::AnomalousBehavior => "Anomalous Behavior",
        }
    }
}

impl std::fmt::Display for ThreatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DETECTION STATUS
// ============================================================================

/// Triage state of a detection record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStatus {
    New,
    Investigating,
    Resolved,
    FalsePositive,
}

impl Default for DetectionStatus {
    fn default() -> Self {
        DetectionStatus::New
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Result of threat classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub is_malicious: bool,
    /// Raw score clamped into [0.60, 0.99] for EVERY verdict, benign included
    pub confidence: f32,
    pub threat_type: ThreatType,
    pub severity: Severity,
    /// Unclamped weighted anomaly score, kept for explainability
    pub anomaly_score: f32,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            is_malicious: false,
            confidence: 0.60,
            threat_type: ThreatType::NormalTraffic,
            severity: Severity::Low,
            anomaly_score: 0.0,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
