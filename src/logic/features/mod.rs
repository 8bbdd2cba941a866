//! Features Module - Feature Extraction Engine
//!
//! Tách logic trích xuất features từ raw packet metadata.
//! Mỗi feature family có file riêng - dễ thêm/sửa mà không ảnh hưởng extractor.

pub mod layout;
pub mod vector;
pub mod port;
pub mod size;
pub mod protocol;
pub mod flags;
pub mod ttl;
pub mod extractor;


// Re-export common types
pub use vector::FeatureVector;
pub use layout::{FEATURE_COUNT, FEATURE_VERSION, layout_hash};
pub use extractor::extract;
