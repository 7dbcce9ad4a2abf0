// ── Device store ──
//
// Lock-guarded inventory with on-demand aggregate statistics.

mod device_store;
mod stats;

pub use device_store::DeviceStore;
pub use stats::DeviceStats;
