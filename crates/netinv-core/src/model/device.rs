// ── Device domain types ──

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use strum::{Display, EnumIter, EnumString};

use super::device_id::DeviceId;

/// Kind of managed network element.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DeviceType {
    Router,
    Switch,
    Firewall,
    #[strum(
        to_string = "access-point",
        serialize = "access_point",
        serialize = "accesspoint"
    )]
    AccessPoint,
    Unknown,
}

/// Reachability of a device as last reported.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DeviceStatus {
    Online,
    Offline,
    #[default]
    Unknown,
}

/// The canonical device record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub ip_address: IpAddr,
    pub device_type: DeviceType,
    pub status: DeviceStatus,
}

/// A validated device awaiting insertion.
///
/// `id` is normally `None`; the store then assigns the next free handle.
/// An explicit id is honoured for imports and seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    pub id: Option<DeviceId>,
    pub name: String,
    pub ip_address: IpAddr,
    pub device_type: DeviceType,
    pub status: DeviceStatus,
}

impl NewDevice {
    pub fn new(name: impl Into<String>, ip_address: IpAddr, device_type: DeviceType) -> Self {
        Self {
            id: None,
            name: name.into(),
            ip_address,
            device_type,
            status: DeviceStatus::default(),
        }
    }

    pub fn with_id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_status(mut self, status: DeviceStatus) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn into_device(self, id: DeviceId) -> Device {
        Device {
            id,
            name: self.name,
            ip_address: self.ip_address,
            device_type: self.device_type,
            status: self.status,
        }
    }
}

/// Partial update. `Some` replaces the field, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevicePatch {
    pub name: Option<String>,
    pub ip_address: Option<IpAddr>,
    pub device_type: Option<DeviceType>,
    pub status: Option<DeviceStatus>,
}

impl DevicePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ip_address.is_none()
            && self.device_type.is_none()
            && self.status.is_none()
    }

    /// Build the merged record without touching `current`.
    pub fn merged(&self, current: &Device) -> Device {
        Device {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            ip_address: self.ip_address.unwrap_or(current.ip_address),
            device_type: self.device_type.unwrap_or(current.device_type),
            status: self.status.unwrap_or(current.status),
        }
    }
}

/// Optional constraints for listing devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    pub device_type: Option<DeviceType>,
    pub status: Option<DeviceStatus>,
}

impl DeviceFilter {
    pub fn matches(&self, device: &Device) -> bool {
        self.device_type.is_none_or(|t| t == device.device_type)
            && self.status.is_none_or(|s| s == device.status)
    }
}

/// The three demo devices the inventory can be seeded with.
pub fn sample_devices() -> Vec<NewDevice> {
    vec![
        NewDevice::new(
            "Router-01",
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)),
            DeviceType::Router,
        )
        .with_id(DeviceId::new(1))
        .with_status(DeviceStatus::Online),
        NewDevice::new(
            "Switch-01",
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10)),
            DeviceType::Switch,
        )
        .with_id(DeviceId::new(2))
        .with_status(DeviceStatus::Online),
        NewDevice::new(
            "Firewall-01",
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 254)),
            DeviceType::Firewall,
        )
        .with_id(DeviceId::new(3))
        .with_status(DeviceStatus::Offline),
    ]
}
