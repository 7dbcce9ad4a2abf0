// ── Inventory domain model ──
//
// Canonical records owned by the store, plus the loosely-typed request
// payloads that the validation layer turns into them.

pub mod device;
pub mod device_id;
pub mod requests;

// ── Re-exports ──────────────────────────────────────────────────────

pub use device::{
    Device, DeviceFilter, DevicePatch, DeviceStatus, DeviceType, NewDevice, sample_devices,
};
pub use device_id::DeviceId;
pub use requests::{CreateDeviceRequest, DeviceQuery, UpdateDeviceRequest};
