// ── Inventory statistics ──

use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{Device, DeviceStatus, DeviceType};

/// Device counts. Every status and type appears, zero counts included,
/// so the JSON shape never depends on what happens to be in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStats {
    pub total: usize,
    pub by_status: BTreeMap<DeviceStatus, usize>,
    pub by_type: BTreeMap<DeviceType, usize>,
}

impl DeviceStats {
    pub fn from_devices<'a>(devices: impl IntoIterator<Item = &'a Device>) -> Self {
        let mut stats = Self::default();
        for device in devices {
            stats.total += 1;
            *stats.by_status.entry(device.status).or_default() += 1;
            *stats.by_type.entry(device.device_type).or_default() += 1;
        }
        stats
    }
}

impl Default for DeviceStats {
    fn default() -> Self {
        Self {
            total: 0,
            by_status: DeviceStatus::iter().map(|s| (s, 0)).collect(),
            by_type: DeviceType::iter().map(|t| (t, 0)).collect(),
        }
    }
}
