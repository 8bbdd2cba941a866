//! Network Threat Monitor - Detection Core
//!
//! Pure classification engine: packet metadata in, threat verdict out.
//!
//! ## Pipeline
//! `PacketRecord` → feature extraction → weighted anomaly score →
//! rule cascade → `ClassificationResult`.
//!
//! ```ignore
//! use netwatch_core::logic::engine::DetectionEngine;
//! use netwatch_core::logic::simulator::PacketSimulator;
//!
//! let mut engine = DetectionEngine::new();
//! let mut sim = PacketSimulator::new();
//! let detection = engine.classify(&sim.generate());
//! println!("{} ({})", detection.result.threat_type, detection.result.severity);
//! ```

pub mod constants;
pub mod logic;
