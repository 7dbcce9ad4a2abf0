// ── Validation layer ──
//
// Pure checks that turn loosely-typed request payloads into domain
// values. Every problem is collected so callers get the full list of
// rejected fields in a single round trip. Nothing here touches the store.

use std::fmt::Display;
use std::net::IpAddr;
use std::str::FromStr;

use serde_json::Value;
use strum::IntoEnumIterator;

use crate::error::{CoreError, FieldError};
use crate::model::{
    CreateDeviceRequest, DeviceFilter, DeviceId, DevicePatch, DeviceQuery, DeviceStatus,
    DeviceType, NewDevice, UpdateDeviceRequest,
};

/// Check a create payload and build the device to insert.
pub fn validate_create(request: CreateDeviceRequest) -> Result<NewDevice, CoreError> {
    let mut errors = FieldErrors::default();

    let id = request
        .id
        .and_then(|raw| errors.check(parse_id(&raw)));
    let name = errors
        .required("name", request.name)
        .and_then(|raw| errors.check(parse_name(&raw)));
    let ip_address = errors
        .required("ip_address", request.ip_address)
        .and_then(|raw| errors.check(parse_ip_address(&raw)));
    let device_type = errors
        .required("device_type", request.device_type)
        .and_then(|raw| errors.check(parse_choice::<DeviceType>("device_type", &raw)));
    let status = request
        .status
        .and_then(|raw| errors.check(parse_choice::<DeviceStatus>("status", &raw)));

    match (name, ip_address, device_type) {
        (Some(name), Some(ip_address), Some(device_type)) if errors.is_empty() => Ok(NewDevice {
            id,
            name,
            ip_address,
            device_type,
            status: status.unwrap_or_default(),
        }),
        _ => Err(errors.into_error()),
    }
}

/// Check an update payload for device `target`; only present fields are examined.
pub fn validate_update(
    target: DeviceId,
    request: UpdateDeviceRequest,
) -> Result<DevicePatch, CoreError> {
    let mut errors = FieldErrors::default();

    if let Some(id) = request.id.and_then(|raw| errors.check(parse_id(&raw))) {
        if id != target {
            errors.push(FieldError::new(
                "id",
                format!("is immutable (device is {target}, got {id})"),
            ));
        }
    }

    let patch = DevicePatch {
        name: request
            .name
            .and_then(|raw| errors.check(parse_name(&raw))),
        ip_address: request
            .ip_address
            .and_then(|raw| errors.check(parse_ip_address(&raw))),
        device_type: request
            .device_type
            .and_then(|raw| errors.check(parse_choice::<DeviceType>("device_type", &raw))),
        status: request
            .status
            .and_then(|raw| errors.check(parse_choice::<DeviceStatus>("status", &raw))),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors.into_error())
    }
}

/// Check listing constraints. Empty values mean "no constraint".
pub fn validate_filter(query: DeviceQuery) -> Result<DeviceFilter, CoreError> {
    let mut errors = FieldErrors::default();
    let present = |raw: Option<String>| raw.filter(|v| !v.trim().is_empty());

    let filter = DeviceFilter {
        device_type: present(query.device_type)
            .and_then(|raw| errors.check(parse_choice_str::<DeviceType>("device_type", &raw))),
        status: present(query.status)
            .and_then(|raw| errors.check(parse_choice_str::<DeviceStatus>("status", &raw))),
    };

    if errors.is_empty() {
        Ok(filter)
    } else {
        Err(errors.into_error())
    }
}

// ── Field parsers ───────────────────────────────────────────────────

fn parse_id(raw: &Value) -> Result<DeviceId, FieldError> {
    raw.as_u64()
        .filter(|&id| id > 0)
        .map(DeviceId::new)
        .ok_or_else(|| FieldError::new("id", format!("must be a positive integer, got {raw}")))
}

fn parse_name(raw: &Value) -> Result<String, FieldError> {
    let name = expect_str("name", raw)?;
    if name.trim().is_empty() {
        return Err(FieldError::new("name", "must not be empty"));
    }
    Ok(name.to_owned())
}

fn parse_ip_address(raw: &Value) -> Result<IpAddr, FieldError> {
    let text = expect_str("ip_address", raw)?;
    text.trim().parse().map_err(|_| {
        FieldError::new(
            "ip_address",
            format!("'{text}' is not a valid IPv4 or IPv6 address"),
        )
    })
}

fn parse_choice<T>(field: &str, raw: &Value) -> Result<T, FieldError>
where
    T: FromStr + IntoEnumIterator + Display,
{
    parse_choice_str(field, expect_str(field, raw)?)
}

fn parse_choice_str<T>(field: &str, raw: &str) -> Result<T, FieldError>
where
    T: FromStr + IntoEnumIterator + Display,
{
    raw.trim().parse().map_err(|_| {
        let allowed = T::iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        FieldError::new(field, format!("'{raw}' is not one of: {allowed}"))
    })
}

fn expect_str<'a>(field: &str, raw: &'a Value) -> Result<&'a str, FieldError> {
    raw.as_str().ok_or_else(|| {
        FieldError::new(field, format!("must be a string, got {}", json_kind(raw)))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Error accumulator ───────────────────────────────────────────────

#[derive(Default)]
struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(FieldError::new(field, "is required"));
        }
        value
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_error(self) -> CoreError {
        CoreError::Validation { errors: self.0 }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_request() -> CreateDeviceRequest {
        CreateDeviceRequest {
            id: None,
            name: Some("R1".into()),
            ip_address: Some("10.0.0.1".into()),
            device_type: Some("router".into()),
            status: Some("online".into()),
        }
    }

    fn fields(err: &CoreError) -> Vec<&str> {
        err.field_errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn accepts_complete_request() {
        let device = validate_create(create_request()).unwrap();
        assert_eq!(device.name, "R1");
        assert_eq!(device.ip_address, "10.0.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(device.device_type, DeviceType::Router);
        assert_eq!(device.status, DeviceStatus::Online);
        assert_eq!(device.id, None);
    }

    #[test]
    fn accepts_ipv6_literal() {
        let request = CreateDeviceRequest {
            ip_address: Some("2001:db8::1".into()),
            ..create_request()
        };
        let device = validate_create(request).unwrap();
        assert!(device.ip_address.is_ipv6());
    }

    #[test]
    fn status_defaults_to_unknown_when_omitted() {
        let request = CreateDeviceRequest {
            status: None,
            ..create_request()
        };
        assert_eq!(
            validate_create(request).unwrap().status,
            DeviceStatus::Unknown
        );
    }

    #[test]
    fn reports_every_missing_required_field() {
        let err = validate_create(CreateDeviceRequest::default()).unwrap_err();
        assert_eq!(fields(&err), vec!["name", "ip_address", "device_type"]);
    }

    #[test]
    fn reports_every_malformed_field() {
        let request = CreateDeviceRequest {
            id: Some(DeviceId::new(0).into()),
            name: Some("   ".into()),
            ip_address: Some("300.1.1.1".into()),
            device_type: Some("toaster".into()),
            status: Some("sleepy".into()),
        };
        let err = validate_create(request).unwrap_err();
        assert_eq!(
            fields(&err),
            vec!["id", "name", "ip_address", "device_type", "status"]
        );
    }

    #[test]
    fn bad_status_alone_rejects_create() {
        let request = CreateDeviceRequest {
            status: Some("up".into()),
            ..create_request()
        };
        let err = validate_create(request).unwrap_err();
        assert_eq!(fields(&err), vec!["status"]);
        assert!(err.to_string().contains("online, offline, unknown"));
    }

    #[test]
    fn device_type_error_lists_allowed_values() {
        let request = CreateDeviceRequest {
            device_type: Some("hub".into()),
            ..create_request()
        };
        let err = validate_create(request).unwrap_err();
        assert_eq!(
            err.field_errors()[0].message,
            "'hub' is not one of: router, switch, firewall, access-point, unknown"
        );
    }

    #[test]
    fn wrong_json_types_are_reported_per_field() {
        let request = CreateDeviceRequest {
            id: Some(Value::from(-1)),
            name: Some(Value::from(5)),
            ip_address: Some(Value::from("10.0.0.1")),
            device_type: Some(Value::Array(Vec::new())),
            status: Some(Value::Bool(true)),
        };
        let err = validate_create(request).unwrap_err();
        assert_eq!(fields(&err), vec!["id", "name", "device_type", "status"]);
        assert_eq!(err.field_errors()[1].message, "must be a string, got a number");
        assert_eq!(err.field_errors()[3].message, "must be a string, got a boolean");
    }

    #[test]
    fn update_reports_wrong_types_alongside_bad_values() {
        let request = UpdateDeviceRequest {
            id: Some(Value::from("one")),
            ip_address: Some("not-an-ip".into()),
            status: Some(Value::Bool(true)),
            ..UpdateDeviceRequest::default()
        };
        let err = validate_update(DeviceId::new(1), request).unwrap_err();
        assert_eq!(fields(&err), vec!["id", "ip_address", "status"]);
    }

    #[test]
    fn update_checks_only_present_fields() {
        let request = UpdateDeviceRequest {
            status: Some("offline".into()),
            ..UpdateDeviceRequest::default()
        };
        let patch = validate_update(DeviceId::new(1), request).unwrap();
        assert_eq!(
            patch,
            DevicePatch {
                status: Some(DeviceStatus::Offline),
                ..DevicePatch::default()
            }
        );
    }

    #[test]
    fn empty_update_is_valid() {
        let patch = validate_update(DeviceId::new(1), UpdateDeviceRequest::default()).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn update_rejects_malformed_present_fields() {
        let request = UpdateDeviceRequest {
            name: Some("".into()),
            ip_address: Some("not-an-ip".into()),
            ..UpdateDeviceRequest::default()
        };
        let err = validate_update(DeviceId::new(1), request).unwrap_err();
        assert_eq!(fields(&err), vec!["name", "ip_address"]);
    }

    #[test]
    fn filter_parses_known_values_and_ignores_blanks() {
        let filter = validate_filter(DeviceQuery {
            device_type: Some("Firewall".into()),
            status: Some(String::new()),
        })
        .unwrap();
        assert_eq!(filter.device_type, Some(DeviceType::Firewall));
        assert_eq!(filter.status, None);

        let err = validate_filter(DeviceQuery {
            device_type: None,
            status: Some("up".into()),
        })
        .unwrap_err();
        assert_eq!(fields(&err), vec!["status"]);
    }

    #[test]
    fn update_tolerates_matching_id_only() {
        let same = UpdateDeviceRequest {
            id: Some(DeviceId::new(4).into()),
            ..UpdateDeviceRequest::default()
        };
        assert!(validate_update(DeviceId::new(4), same).is_ok());

        let other = UpdateDeviceRequest {
            id: Some(DeviceId::new(5).into()),
            ..UpdateDeviceRequest::default()
        };
        let err = validate_update(DeviceId::new(4), other).unwrap_err();
        assert_eq!(fields(&err), vec!["id"]);
    }
}
