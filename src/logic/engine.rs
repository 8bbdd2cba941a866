//! Detection Engine
//!
//! Entry point của core: `classify(packet) -> Detection`.
//! Engine owns rng cho random branch - inject seeded rng để test reproducible.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::features::{self, layout_hash, FeatureVector, FEATURE_VERSION};
use super::packet::PacketRecord;
use super::threat::{self, ClassificationResult, DetectionStatus};
use crate::constants::MODEL_VERSION;

// ============================================================================
// DETECTION RECORD
// ============================================================================

/// One classified packet: features + verdict + record metadata.
///
/// This is the row a persistence layer would store; the engine itself
/// stores nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub id: Uuid,
    pub detected_at: DateTime<Utc>,
    /// Feature schema contract
    pub feature_version: u8,
    pub layout_hash: u32,
    pub features: FeatureVector,
    pub result: ClassificationResult,
    pub model_version: String,
    pub status: DetectionStatus,
}

// ============================================================================
// DETECTION ENGINE
// ============================================================================

/// Stateless pipeline driver: extract → score → classify.
///
/// The only state is the random source feeding the ICMP protocol-score
/// branch. Calls are independent; construct one engine per thread.
pub struct DetectionEngine<R: Rng> {
    rng: R,
}

impl DetectionEngine<StdRng> {
    /// Engine with an entropy-seeded rng
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a fixed seed, for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DetectionEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DetectionEngine<R> {
    /// Engine with a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// The one logical operation: packet in, detection out. Never fails.
    pub fn classify(&mut self, packet: &PacketRecord) -> Detection {
        let features = features::extract(packet, &mut self.rng);
        let result = threat::classify(&features);

        Detection {
            id: Uuid::new_v4(),
            detected_at: Utc::now(),
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            features,
            result,
            model_version: MODEL_VERSION.to_string(),
            status: DetectionStatus::New,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
