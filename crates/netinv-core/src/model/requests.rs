// ── Unvalidated request payloads ──
//
// Wire shapes accepted from callers. Every field is an optional raw JSON
// value so that a wrong type (`"name": 5`) is reported by the validation
// layer next to every other bad field instead of failing deserialization.
// `null` deserializes as `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::device::NewDevice;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDeviceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDeviceRequest {
    /// Only tolerated when it names the device being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

/// Query-string constraints for listing devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<&NewDevice> for CreateDeviceRequest {
    fn from(device: &NewDevice) -> Self {
        Self {
            id: device.id.map(Value::from),
            name: Some(Value::from(device.name.as_str())),
            ip_address: Some(Value::from(device.ip_address.to_string())),
            device_type: Some(Value::from(device.device_type.to_string())),
            status: Some(Value::from(device.status.to_string())),
        }
    }
}
