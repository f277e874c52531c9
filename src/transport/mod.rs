//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod device;
mod sms;

use serde::{Deserialize, Deserializer};

pub use device::{
    decode_device_info_json_response, encode_delete_device_json, encode_edit_device_json,
    encode_get_device_info_json,
};
pub use sms::{
    append_list_sms_query, decode_list_sms_json_response, decode_send_sms_json_response,
    decode_sms_record_json_response, encode_delete_sms_json, encode_get_sms_json,
    encode_send_sms_json,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode JSON `null` as the field's zero value, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
