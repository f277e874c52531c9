use crate::domain::value::{CallbackId, DeviceId, SimSlot, SmsId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub id: SmsId,
}

/// A single message as reported by `sms/get` and `sms` (list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRecord {
    pub id: SmsId,
    pub message: String,
    pub phone_number: String,
    pub device_id: DeviceId,
    pub callback_id: CallbackId,
    pub status: i32,
    pub message_status: String,
    /// Unix timestamp (seconds).
    pub time_create: i64,
    /// `None` when no slot applies to the record; distinct from slot `0`.
    pub to_sim: Option<SimSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_records: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSmsResponse {
    pub pagination: Pagination,
    pub sms_list: Vec<SmsRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimCard {
    pub slot_index: SimSlot,
    pub display_name: String,
}

/// Device state returned by `devices/get/info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device_id: DeviceId,
    pub device_name: String,
    pub device_name_type: String,
    pub device_battery_state: i32,
    pub is_active: bool,
    pub is_charging: bool,
    pub low_battery_alert: bool,
    pub last_online_date: String,
    /// Default slot used for outgoing messages.
    pub to_sim: SimSlot,
    pub sim_list: Vec<SimCard>,
}
