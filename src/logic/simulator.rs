//! Synthetic Packet Generator
//!
//! Sinh packet giả lập cho demo loop và tests - không cần live capture.
//! Normal traffic + năm attack archetype cố định.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::packet::PacketRecord;

// ============================================================================
// PORT POOLS (Constants - không đổi lúc runtime)
// ============================================================================

/// Common service ports seen in normal traffic
const NORMAL_PORTS: &[u32] = &[80, 443, 22, 53, 25, 110, 143, 21];

/// Backdoor ports used by the malicious archetypes
const MALICIOUS_PORTS: &[u32] = &[1337, 31337, 12345, 6667, 4444, 5555];

/// Protocol tags (normal traffic only draws TCP/UDP)
const PROTOCOLS: &[&str] = &["TCP", "UDP", "ICMP"];

/// Probability that `generate` emits an attack packet
const MALICIOUS_RATE: f64 = 0.15;

// ============================================================================
// PACKET SIMULATOR
// ============================================================================

/// Random packet source. Structural validity is the only invariant:
/// every generated record is a well-formed `PacketRecord`.
pub struct PacketSimulator<R: Rng> {
    rng: R,
}

impl PacketSimulator<StdRng> {
    /// Simulator with an entropy-seeded rng
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Simulator with a fixed seed, for reproducible tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PacketSimulator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PacketSimulator<R> {
    /// Simulator with a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn generate_ip(&mut self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.rng.gen_range(0..255),
            self.rng.gen_range(0..255),
            self.rng.gen_range(0..255),
            self.rng.gen_range(0..255)
        )
    }

    fn generate_port(&mut self, is_malicious: bool) -> u32 {
        if is_malicious && self.rng.gen_bool(0.5) {
            return MALICIOUS_PORTS[self.rng.gen_range(0..MALICIOUS_PORTS.len())];
        }
        if self.rng.gen_bool(0.7) {
            return NORMAL_PORTS[self.rng.gen_range(0..NORMAL_PORTS.len())];
        }
        self.rng.gen_range(0..65535)
    }

    fn ephemeral_port(&mut self) -> u32 {
        49152 + self.rng.gen_range(0..16383)
    }

    /// Plausible benign packet: ephemeral source port, realistic TTL,
    /// payload ≈ 70% of the frame
    pub fn generate_normal(&mut self) -> PacketRecord {
        let protocol = PROTOCOLS[self.rng.gen_range(0..2)];
        let packet_size = 64 + self.rng.gen_range(0..1000);

        PacketRecord {
            source_ip: self.generate_ip(),
            dest_ip: self.generate_ip(),
            source_port: self.ephemeral_port(),
            dest_port: self.generate_port(false),
            protocol: protocol.to_string(),
            packet_size,
            payload_size: (packet_size as f64 * 0.7) as i64,
            ttl: [64, 128, 255][self.rng.gen_range(0..3)],
            flags: if protocol == "TCP" {
                Some("SYN,ACK".to_string())
            } else {
                None
            },
        }
    }

    /// One of five fixed attack archetypes, chosen uniformly
    pub fn generate_malicious(&mut self) -> PacketRecord {
        let attack_type = self.rng.gen_range(0..5);

        match attack_type {
            // SYN-only scan
            0 => PacketRecord {
                source_ip: self.generate_ip(),
                dest_ip: self.generate_ip(),
                source_port: self.rng.gen_range(0..65535),
                dest_port: self.generate_port(true),
                protocol: "TCP".to_string(),
                packet_size: 40,
                payload_size: 0,
                ttl: 64,
                flags: Some("SYN".to_string()),
            },
            // SYN+FIN malformed-flag probe between privileged ports
            1 => PacketRecord {
                source_ip: self.generate_ip(),
                dest_ip: self.generate_ip(),
                source_port: self.rng.gen_range(0..1024),
                dest_port: self.rng.gen_range(0..1024),
                protocol: "TCP".to_string(),
                packet_size: 60,
                payload_size: 0,
                ttl: 32,
                flags: Some("SYN,FIN".to_string()),
            },
            // Full-size PSH/ACK burst to a backdoor port (exfiltration-like)
            2 => PacketRecord {
                source_ip: self.generate_ip(),
                dest_ip: self.generate_ip(),
                source_port: self.ephemeral_port(),
                dest_port: MALICIOUS_PORTS[self.rng.gen_range(0..MALICIOUS_PORTS.len())],
                protocol: "TCP".to_string(),
                packet_size: 1500,
                payload_size: 1460,
                ttl: 128,
                flags: Some("PSH,ACK".to_string()),
            },
            // NULL-flag scan
            3 => PacketRecord {
                source_ip: self.generate_ip(),
                dest_ip: self.generate_ip(),
                source_port: self.rng.gen_range(0..65535),
                dest_port: 80,
                protocol: "TCP".to_string(),
                packet_size: 20,
                payload_size: 0,
                ttl: 255,
                flags: Some("NULL".to_string()),
            },
            // Xmas-style probe at RDP with a spoofed-looking TTL
            _ => PacketRecord {
                source_ip: self.generate_ip(),
                dest_ip: self.generate_ip(),
                source_port: self.ephemeral_port(),
                dest_port: 3389,
                protocol: "TCP".to_string(),
                packet_size: 1200,
                payload_size: 50,
                ttl: 45,
                flags: Some("FIN,URG,PSH".to_string()),
            },
        }
    }

    /// Mixed stream: malicious with probability 0.15, else normal
    pub fn generate(&mut self) -> PacketRecord {
        if self.rng.gen_bool(MALICIOUS_RATE) {
            self.generate_malicious()
        } else {
            self.generate_normal()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn is_dotted_quad(ip: &str) -> bool {
        let octets: Vec<_> = ip.split('.').collect();
        octets.len() == 4 && octets.iter().all(|o| o.parse::<u32>().map_or(false, |v| v < 255))
    }

    #[test]
    fn test_normal_packets_are_structurally_valid() {
        let mut sim = PacketSimulator::with_seed(1);
        for _ in 0..200 {
            let p = sim.generate_normal();
            assert!(is_dotted_quad(&p.source_ip));
            assert!(is_dotted_quad(&p.dest_ip));
            assert!(p.source_port >= 49152 && p.source_port < 65535);
            assert!(p.packet_size >= 64 && p.packet_size < 1064);
            assert!(p.payload_size <= p.packet_size);
            assert!([64, 128, 255].contains(&p.ttl));
            assert!(p.protocol == "TCP" || p.protocol == "UDP");
            // TCP always carries flags, UDP never does
            assert_eq!(p.flags.is_some(), p.protocol == "TCP");
        }
    }

    #[test]
    fn test_malicious_packets_match_an_archetype() {
        let mut sim = PacketSimulator::with_seed(2);
        for _ in 0..200 {
            let p = sim.generate_malicious();
            let flags = p.flags_str();
            assert!(
                matches!(flags, "SYN" | "SYN,FIN" | "PSH,ACK" | "NULL" | "FIN,URG,PSH"),
                "unexpected flags {flags}"
            );
            assert!(p.protocol == "TCP");
            assert!([40, 60, 1500, 20, 1200].contains(&p.packet_size));
        }
    }

    #[test]
    fn test_mixed_stream_rate_is_plausible() {
        let mut sim = PacketSimulator::with_seed(3);
        let malicious = (0..2000)
            .filter(|_| {
                let p = sim.generate();
                // Normal traffic never uses these archetype flag strings
                matches!(p.flags_str(), "SYN" | "SYN,FIN" | "NULL" | "FIN,URG,PSH" | "PSH,ACK")
            })
            .count();

        // ~15% of 2000, with generous slack
        assert!(malicious > 150 && malicious < 450, "got {malicious}");
    }

    #[test]
    fn test_seeded_simulator_is_reproducible() {
        let mut a = PacketSimulator::with_seed(42);
        let mut b = PacketSimulator::with_seed(42);

        for _ in 0..50 {
            let pa = a.generate();
            let pb = b.generate();
            assert_eq!(
                serde_json::to_value(&pa).unwrap(),
                serde_json::to_value(&pb).unwrap()
            );
        }
    }
}
