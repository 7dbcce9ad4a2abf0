// ── Concurrent device store ──
//
// Sole owner of the device records. A single `RwLock` guards the whole
// inventory, so every operation is linearizable: readers share the lock,
// mutations are exclusive, and nobody observes a half-applied write.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::{debug, error};

use super::stats::DeviceStats;
use crate::error::CoreError;
use crate::model::{Device, DeviceFilter, DeviceId, DevicePatch, NewDevice};

/// Thread-safe in-memory inventory of network devices.
///
/// Callers only ever receive owned copies of records. Listing preserves
/// insertion order. Auto-assigned ids are monotonic and never reissued,
/// even after the device holding one is deleted; an explicitly requested
/// id is accepted whenever no live device holds it.
pub struct DeviceStore {
    inner: RwLock<Inventory>,
}

struct Inventory {
    devices: IndexMap<DeviceId, Device>,
    /// Strictly greater than every id ever issued; `None` once `u64::MAX`
    /// has been handed out and no further automatic id exists.
    next_id: Option<u64>,
}

impl Inventory {
    fn new() -> Self {
        Self {
            devices: IndexMap::new(),
            next_id: Some(1),
        }
    }

    fn allocate_id(&mut self, requested: Option<DeviceId>) -> Result<DeviceId, CoreError> {
        match requested {
            Some(id) if self.devices.contains_key(&id) => Err(CoreError::DuplicateId { id }),
            Some(id) => {
                if self.next_id.is_some_and(|next| id.get() >= next) {
                    self.next_id = id.get().checked_add(1);
                }
                Ok(id)
            }
            None => {
                let raw = self.next_id.ok_or(CoreError::IdsExhausted)?;
                self.next_id = raw.checked_add(1);
                Ok(DeviceId::new(raw))
            }
        }
    }
}

impl DeviceStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inventory::new()),
        }
    }

    /// Build a store pre-populated with `devices`, inserted in order.
    pub fn with_devices(devices: impl IntoIterator<Item = NewDevice>) -> Result<Self, CoreError> {
        let store = Self::new();
        for device in devices {
            store.create(device)?;
        }
        Ok(store)
    }

    // ── Mutations ────────────────────────────────────────────────────

    pub fn create(&self, new: NewDevice) -> Result<Device, CoreError> {
        let mut inventory = self.write()?;
        let id = inventory.allocate_id(new.id)?;
        let device = new.into_device(id);
        inventory.devices.insert(id, device.clone());
        debug!(id = %id, name = %device.name, "device created");
        Ok(device)
    }

    /// Merge `patch` into device `id`. The record is replaced whole.
    pub fn update(&self, id: DeviceId, patch: &DevicePatch) -> Result<Device, CoreError> {
        if patch.is_empty() {
            return self.get(id);
        }
        let mut inventory = self.write()?;
        let current = inventory
            .devices
            .get_mut(&id)
            .ok_or(CoreError::NotFound { id })?;
        let merged = patch.merged(current);
        *current = merged.clone();
        debug!(id = %id, "device updated");
        Ok(merged)
    }

    /// Remove device `id`, returning the record that was removed.
    pub fn delete(&self, id: DeviceId) -> Result<Device, CoreError> {
        let mut inventory = self.write()?;
        let removed = inventory
            .devices
            .shift_remove(&id)
            .ok_or(CoreError::NotFound { id })?;
        debug!(id = %id, name = %removed.name, "device deleted");
        Ok(removed)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn get(&self, id: DeviceId) -> Result<Device, CoreError> {
        self.read()?
            .devices
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound { id })
    }

    pub fn list(&self) -> Result<Vec<Device>, CoreError> {
        Ok(self.read()?.devices.values().cloned().collect())
    }

    pub fn list_filtered(&self, filter: &DeviceFilter) -> Result<Vec<Device>, CoreError> {
        Ok(self
            .read()?
            .devices
            .values()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect())
    }

    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.read()?.devices.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.read()?.devices.is_empty())
    }

    /// Aggregate counts, computed from the current state on every call.
    pub fn stats(&self) -> Result<DeviceStats, CoreError> {
        Ok(DeviceStats::from_devices(self.read()?.devices.values()))
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn read(&self) -> Result<RwLockReadGuard<'_, Inventory>, CoreError> {
        self.inner.read().map_err(|_| {
            error!("device store lock poisoned");
            CoreError::StoreUnavailable
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inventory>, CoreError> {
        self.inner.write().map_err(|_| {
            error!("device store lock poisoned");
            CoreError::StoreUnavailable
        })
    }
}

impl Default for DeviceStore {
    fn default() -> Self {
        Self::new()
    }
}
