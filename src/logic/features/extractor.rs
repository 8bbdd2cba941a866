//! Feature Extractor - packet metadata → FeatureVector
//!
//! Entry point của extraction stage. Never fails: absent/malformed fields
//! rơi vào default score thay vì error.

use rand::Rng;

use super::{flags, port, protocol, size, ttl};
use super::vector::FeatureVector;
use crate::logic::packet::PacketRecord;

/// Map a packet to its seven-feature vector.
///
/// Deterministic for everything except the ICMP protocol-score branch,
/// which consumes from the injected rng.
pub fn extract<R: Rng>(packet: &PacketRecord, rng: &mut R) -> FeatureVector {
    FeatureVector {
        port_entropy: port::port_entropy(packet.source_port, packet.dest_port),
        size_anomaly: size::size_anomaly(packet.packet_size, packet.payload_size),
        protocol_score: protocol::protocol_score(&packet.protocol, packet.dest_port, rng),
        flag_pattern: flags::flag_pattern(packet.flags_str()),
        ttl_anomaly: ttl::ttl_anomaly(packet.ttl),
        known_malicious_port: port::known_malicious_port(packet.dest_port),
        payload_ratio: size::payload_ratio(packet.packet_size, packet.payload_size),
    }
}
