use serde::{Deserialize, Serialize};

use super::{TransportError, null_as_default};
use crate::domain::{
    DeleteDevice, DeviceId, DeviceInfo, EditDevice, GetDeviceInfo, SimCard, SimSlot,
};

#[derive(Debug, Serialize)]
struct DeviceIdJsonRequest<'a> {
    device_id: &'a str,
}

#[derive(Debug, Serialize)]
struct EditDeviceJsonRequest<'a> {
    device_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SimCardJson {
    #[serde(deserialize_with = "null_as_default")]
    slot_index: i32,
    #[serde(deserialize_with = "null_as_default")]
    display_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DeviceInfoJsonResponse {
    #[serde(deserialize_with = "null_as_default")]
    device_id: String,
    #[serde(deserialize_with = "null_as_default")]
    device_battery_state: i32,
    #[serde(deserialize_with = "null_as_default")]
    device_name: String,
    #[serde(deserialize_with = "null_as_default")]
    is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    is_charging: bool,
    #[serde(deserialize_with = "null_as_default")]
    last_online_date: String,
    #[serde(deserialize_with = "null_as_default")]
    device_name_type: String,
    #[serde(deserialize_with = "null_as_default")]
    low_battery_alert: bool,
    #[serde(deserialize_with = "null_as_default")]
    to_sim: i32,
    #[serde(deserialize_with = "null_as_default")]
    sim_list: Vec<SimCardJson>,
}

pub fn encode_get_device_info_json(request: &GetDeviceInfo) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&DeviceIdJsonRequest {
        device_id: request.device_id.as_str(),
    })
}

pub fn encode_edit_device_json(request: &EditDevice) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&EditDeviceJsonRequest {
        device_id: request.device_id.as_str(),
        is_active: request.is_active,
    })
}

pub fn encode_delete_device_json(request: &DeleteDevice) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&DeviceIdJsonRequest {
        device_id: request.device_id.as_str(),
    })
}

pub fn decode_device_info_json_response(json: &str) -> Result<DeviceInfo, TransportError> {
    let parsed: DeviceInfoJsonResponse = serde_json::from_str(json)?;
    Ok(DeviceInfo {
        device_id: DeviceId::new(parsed.device_id),
        device_name: parsed.device_name,
        device_name_type: parsed.device_name_type,
        device_battery_state: parsed.device_battery_state,
        is_active: parsed.is_active,
        is_charging: parsed.is_charging,
        low_battery_alert: parsed.low_battery_alert,
        last_online_date: parsed.last_online_date,
        to_sim: SimSlot::new(parsed.to_sim),
        sim_list: parsed
            .sim_list
            .into_iter()
            .map(|sim| SimCard {
                slot_index: SimSlot::new(sim.slot_index),
                display_name: sim.display_name,
            })
            .collect(),
    })
}
