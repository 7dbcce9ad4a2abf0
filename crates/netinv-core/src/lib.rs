//! Domain core of the netinv network device inventory.
//!
//! - **[`DeviceStore`]**: the single owner of device records. One
//!   `RwLock` around an insertion-ordered map makes every operation
//!   linearizable; callers only receive owned copies.
//!
//! - **Validation** ([`validate`]): pure checks that turn loosely-typed
//!   [`CreateDeviceRequest`] / [`UpdateDeviceRequest`] payloads into a
//!   [`NewDevice`] or a [`DevicePatch`], collecting every field error.
//!
//! - **Domain model** ([`model`]): [`Device`], [`DeviceType`],
//!   [`DeviceStatus`] and the [`DeviceId`] handle.
//!
//! - **[`CoreError`]**: the domain error taxonomy. Transport mapping lives
//!   in `netinv-api`.

pub mod error;
pub mod model;
pub mod store;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::{CoreError, FieldError};
pub use store::{DeviceStats, DeviceStore};
pub use validate::{validate_create, validate_filter, validate_update};

pub use model::{
    CreateDeviceRequest, Device, DeviceFilter, DeviceId, DevicePatch, DeviceQuery, DeviceStatus,
    DeviceType, NewDevice, UpdateDeviceRequest, sample_devices,
};
