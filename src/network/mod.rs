//! Simulated network device discovery.
//!
//! Nothing here touches the network. A [`Probe`] decides whether an address
//! is "online" and what it is called; [`SimulatedProbe`] does so from the
//! last octet plus randomness. [`Devices`] merges probe results into the
//! [`NETWORK_DEVICES`](crate::store::NETWORK_DEVICES) slot.

mod device;
mod devices;
mod probe;

pub use device::{classify, DeviceStatus, DeviceType, NetworkDevice};
pub use devices::{
    normalize_ip, parse_range, validate_ip, Devices, ScanOptions, ScanReport, HOSTS_PER_RANGE,
};
pub use probe::{simulated_hostname, Probe, SimulatedProbe, COMMON_OCTETS, DEVICE_NAMES};
