//! Reachability probes.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DeviceStatus;

/// Last octets that are "usually" occupied on a small LAN: gateways,
/// the first desktops and the static device block.
pub const COMMON_OCTETS: &[u8] = &[1, 254, 100, 101, 102, 200, 201, 202];

/// Hostnames handed out to the 100..=110 block, indexed by `octet % 10`.
pub const DEVICE_NAMES: [&str; 10] = [
    "DESKTOP-PC",
    "LAPTOP-USER",
    "SERVIDOR-MAIN",
    "IMPRESSORA-HP",
    "ROUTER-TP",
    "NOTEBOOK-TI",
    "WORKSTATION",
    "SMARTPHONE",
    "TABLET-IPAD",
    "SMART-TV",
];

/// Something that can tell whether an address answers.
pub trait Probe {
    /// Probe `ip` and report whether it is reachable.
    fn check(&mut self, ip: &str) -> DeviceStatus;

    /// Resolve a hostname for `ip`, if one is known.
    fn hostname(&self, ip: &str) -> Option<String>;
}

/// Probe that fabricates results without any network access.
///
/// Common octets answer 80% of the time, everything else 20%.
pub struct SimulatedProbe {
    rng: StdRng,
    latency: Option<(u64, u64)>,
}

impl SimulatedProbe {
    /// Create a probe seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            latency: None,
        }
    }

    /// Create a deterministic probe.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            latency: None,
        }
    }

    /// Sleep a uniform random time in `min_ms..=max_ms` before each answer.
    pub fn with_latency(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.latency = (max_ms > 0).then_some((min_ms.min(max_ms), max_ms));
        self
    }
}

impl Default for SimulatedProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for SimulatedProbe {
    fn check(&mut self, ip: &str) -> DeviceStatus {
        if let Some((min, max)) = self.latency {
            let ms = self.rng.gen_range(min..=max);
            std::thread::sleep(Duration::from_millis(ms));
        }

        let Some(octet) = last_octet(ip) else {
            return DeviceStatus::Offline;
        };
        let threshold = if COMMON_OCTETS.contains(&octet) {
            0.2
        } else {
            0.8
        };

        if self.rng.gen::<f64>() > threshold {
            DeviceStatus::Online
        } else {
            DeviceStatus::Offline
        }
    }

    fn hostname(&self, ip: &str) -> Option<String> {
        last_octet(ip).and_then(simulated_hostname)
    }
}

/// Hostname the simulation assigns to a last octet.
pub fn simulated_hostname(octet: u8) -> Option<String> {
    match octet {
        1 | 254 => Some("ROUTER-GATEWAY".to_string()),
        100..=110 => Some(DEVICE_NAMES[octet as usize % DEVICE_NAMES.len()].to_string()),
        200..=210 => Some(format!("DEVICE-{}", octet)),
        _ => None,
    }
}

fn last_octet(ip: &str) -> Option<u8> {
    ip.rsplit('.').next()?.parse().ok()
}
