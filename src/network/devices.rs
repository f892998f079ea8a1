//! Device list maintenance: scans, manual entries, refreshes.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::{classify, DeviceStatus, DeviceType, NetworkDevice, Probe};
use crate::error::{ItdeskError, Result};
use crate::store::{new_id, KeyValueStore, Slot, NETWORK_DEVICES};

/// Host addresses probed per range (`.1` through `.254`).
pub const HOSTS_PER_RANGE: usize = 254;

static IP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").expect("IP_REGEX must compile")
});

static RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3}\.){2}\d{1,3}$").expect("RANGE_REGEX must compile")
});

/// Tuning for a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Addresses probed per batch.
    pub batch_size: usize,
    /// Pause between batches.
    pub batch_pause: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            batch_size: 20,
            batch_pause: Duration::from_millis(100),
        }
    }
}

/// Outcome of a range scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Normalized three-octet prefix that was scanned.
    pub range: String,
    /// Addresses probed.
    pub probed: usize,
    /// Addresses that answered.
    pub online: usize,
    /// Newly stored devices.
    pub added: usize,
    /// Known devices that answered again.
    pub updated: usize,
    /// Known devices that did not answer, wherever they are.
    pub went_offline: usize,
}

/// Validate a three-octet range prefix like `192.168.1` and normalize it.
///
/// Leading zeros are dropped, so `192.168.001` becomes `192.168.1`.
pub fn parse_range(range: &str) -> Result<String> {
    let range = range.trim().trim_end_matches('.');
    if range.is_empty() {
        return Err(ItdeskError::Validation {
            entity: "scan",
            missing: vec!["network range".to_string()],
        });
    }
    let octets = RANGE_REGEX
        .is_match(range)
        .then(|| parse_octets(range))
        .flatten()
        .ok_or_else(|| ItdeskError::InvalidInput {
            message: format!("invalid network range '{}' (expected e.g. 192.168.1)", range),
        })?;
    Ok(octets
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("."))
}

/// Validate a dotted IPv4 address and return its canonical form.
pub fn validate_ip(ip: &str) -> Result<String> {
    let ip = ip.trim();
    if ip.is_empty() {
        return Err(ItdeskError::Validation {
            entity: "device",
            missing: vec!["ip".to_string()],
        });
    }
    normalize_ip(ip).ok_or_else(|| ItdeskError::InvalidInput {
        message: format!("invalid IP address format: {}", ip),
    })
}

/// Canonical dotted form of `ip`, or `None` if it is not an IPv4 address.
pub fn normalize_ip(ip: &str) -> Option<String> {
    let ip = ip.trim();
    if !IP_REGEX.is_match(ip) {
        return None;
    }
    match parse_octets(ip)?[..] {
        [a, b, c, d] => Some(Ipv4Addr::new(a, b, c, d).to_string()),
        _ => None,
    }
}

fn parse_octets(s: &str) -> Option<Vec<u8>> {
    s.split('.').map(|o| o.parse::<u8>().ok()).collect()
}

impl NetworkDevice {
    /// Whether this is the device named by `id_or_ip`.
    pub fn matches(&self, id_or_ip: &str) -> bool {
        self.id == id_or_ip
            || self.ip == id_or_ip
            || normalize_ip(id_or_ip).is_some_and(|ip| self.ip == ip)
    }
}

/// Network devices backed by a key-value store.
pub struct Devices<'a> {
    slot: Slot<'a, NetworkDevice>,
}

impl<'a> Devices<'a> {
    /// Open the device list in `store`.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            slot: Slot::new(store, NETWORK_DEVICES),
        }
    }

    /// All known devices.
    pub fn list(&self) -> Result<Vec<NetworkDevice>> {
        self.slot.load()
    }

    /// Number of devices currently marked online.
    pub fn online_count(&self) -> Result<usize> {
        Ok(self
            .list()?
            .iter()
            .filter(|d| d.status == DeviceStatus::Online)
            .count())
    }

    /// Probe every host address in `range` and merge the results.
    ///
    /// `on_batch(probed, total)` is called after each batch.
    pub fn scan(
        &self,
        range: &str,
        probe: &mut dyn Probe,
        options: &ScanOptions,
        now: DateTime<Utc>,
        mut on_batch: impl FnMut(usize, usize),
    ) -> Result<ScanReport> {
        let range = parse_range(range)?;
        let batch_size = options.batch_size.max(1);
        tracing::info!("Scanning {}.0/24 in batches of {}", range, batch_size);

        let hosts: Vec<String> = (1..=HOSTS_PER_RANGE)
            .map(|octet| format!("{}.{}", range, octet))
            .collect();

        let mut found = Vec::new();
        let mut probed = 0;
        for (index, batch) in hosts.chunks(batch_size).enumerate() {
            if index > 0 && !options.batch_pause.is_zero() {
                std::thread::sleep(options.batch_pause);
            }
            for ip in batch {
                if probe.check(ip) == DeviceStatus::Online {
                    let hostname = probe.hostname(ip);
                    found.push(NetworkDevice {
                        id: format!("{}-{}", ip, new_id()),
                        ip: ip.clone(),
                        device_type: Some(classify(hostname.as_deref())),
                        hostname,
                        mac: None,
                        status: DeviceStatus::Online,
                        last_seen: now,
                        notes: None,
                    });
                }
            }
            probed += batch.len();
            on_batch(probed, hosts.len());
        }

        let mut report = ScanReport {
            range: range.clone(),
            probed,
            online: found.len(),
            ..Default::default()
        };

        self.slot.update(|all| {
            for device in all.iter_mut() {
                if let Some(hit) = found.iter().find(|f| f.ip == device.ip) {
                    device.status = hit.status;
                    device.last_seen = hit.last_seen;
                    if hit.hostname.is_some() {
                        device.hostname = hit.hostname.clone();
                    }
                    report.updated += 1;
                } else {
                    if device.status != DeviceStatus::Offline {
                        report.went_offline += 1;
                    }
                    device.status = DeviceStatus::Offline;
                }
            }

            let known: HashSet<String> = all.iter().map(|d| d.ip.clone()).collect();
            for device in found.into_iter().filter(|d| !known.contains(&d.ip)) {
                all.push(device);
                report.added += 1;
            }
            Ok(())
        })?;

        tracing::info!(
            "Scan of {} finished: {} online, {} new, {} went offline",
            range,
            report.online,
            report.added,
            report.went_offline
        );
        Ok(report)
    }

    /// Add a single address by hand after probing it once.
    pub fn add_manual(
        &self,
        ip: &str,
        probe: &mut dyn Probe,
        now: DateTime<Utc>,
    ) -> Result<NetworkDevice> {
        let ip = validate_ip(ip)?;
        if self.list()?.iter().any(|d| d.ip == ip) {
            return Err(ItdeskError::Duplicate {
                entity: "Device",
                key: ip.to_string(),
            });
        }

        let device = NetworkDevice {
            id: format!("{}-{}", ip, new_id()),
            status: probe.check(&ip),
            hostname: probe.hostname(&ip),
            ip,
            mac: None,
            last_seen: now,
            device_type: Some(DeviceType::Unknown),
            notes: None,
        };

        self.slot.update(|all| {
            all.push(device.clone());
            Ok(())
        })?;

        tracing::info!("Added device {} ({})", device.ip, device.status);
        Ok(device)
    }

    /// Re-probe one device and record the result.
    pub fn refresh(
        &self,
        id: &str,
        probe: &mut dyn Probe,
        now: DateTime<Utc>,
    ) -> Result<NetworkDevice> {
        self.slot.update(|all| {
            let device = all
                .iter_mut()
                .find(|d| d.matches(id))
                .ok_or_else(|| not_found(id))?;
            device.status = probe.check(&device.ip);
            device.last_seen = now;
            tracing::debug!("Refreshed {}: {}", device.ip, device.status);
            Ok(device.clone())
        })
    }

    /// Forget a device. Accepts the device ID or its IP.
    pub fn remove(&self, id: &str) -> Result<NetworkDevice> {
        self.slot.update(|all| {
            let index = all
                .iter()
                .position(|d| d.matches(id))
                .ok_or_else(|| not_found(id))?;
            Ok(all.remove(index))
        })
    }
}

fn not_found(id: &str) -> ItdeskError {
    ItdeskError::NotFound {
        entity: "Device",
        id: id.to_string(),
    }
}
