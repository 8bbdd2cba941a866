//! Logic Module - Detection Engines
//!
//! Chứa các engines xử lý: Feature Extraction, Scoring, Classification, Simulator.
//!
//! ## Architecture
//! - `packet` - Raw packet input type
//! - `features/` - Feature extraction (ports, sizes, protocol, flags, TTL)
//! - `threat/` - Anomaly scoring + threat classification
//! - `engine` - `DetectionEngine`, the one public operation
//! - `simulator` - Synthetic packet generator for demos and tests
//! - `stats` - Process-wide traffic statistics register

pub mod packet;
pub mod features;
pub mod threat;
pub mod engine;
pub mod simulator;
pub mod stats;
