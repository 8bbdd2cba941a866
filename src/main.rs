//! NetWatch Monitor - Demo Driver
//!
//! Drives the detection core with the packet simulator: one synthetic
//! packet per tick, classification logged, stats summarized periodically.

use std::time::Duration;

use netwatch_core::constants;
use netwatch_core::logic::engine::DetectionEngine;
use netwatch_core::logic::simulator::PacketSimulator;
use netwatch_core::logic::stats;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{} (model {})...",
        constants::APP_NAME,
        constants::APP_VERSION,
        constants::MODEL_VERSION
    );

    let mut engine = DetectionEngine::new();
    let mut simulator = PacketSimulator::new();

    let mut packet_tick =
        tokio::time::interval(Duration::from_millis(constants::get_tick_interval_ms()));
    let mut stats_tick =
        tokio::time::interval(Duration::from_secs(constants::get_stats_interval_secs()));

    loop {
        tokio::select! {
            _ = packet_tick.tick() => {
                let packet = simulator.generate();
                log::debug!(
                    "Analyzing packet {}:{} -> {}:{} ({})",
                    packet.source_ip, packet.source_port,
                    packet.dest_ip, packet.dest_port,
                    packet.protocol
                );

                let detection = engine.classify(&packet);
                stats::record(&detection);

                if detection.result.is_malicious {
                    log::warn!(
                        "THREAT {}: {} severity={} confidence={:.2} src={}:{} dst={}:{}",
                        detection.id,
                        detection.result.threat_type,
                        detection.result.severity,
                        detection.result.confidence,
                        packet.source_ip, packet.source_port,
                        packet.dest_ip, packet.dest_port
                    );
                } else {
                    log::debug!(
                        "normal traffic, confidence={:.2}",
                        detection.result.confidence
                    );
                }
            }
            _ = stats_tick.tick() => {
                let snap = stats::snapshot();
                if snap.total_packets > 0 {
                    log::info!(
                        "stats: packets={} threats={} rate={:.1}% avg_confidence={:.2}",
                        snap.total_packets,
                        snap.threats_detected,
                        snap.detection_rate,
                        snap.avg_confidence
                    );
                }
            }
        }
    }
}
