use crate::domain::validation::ValidationError;
use crate::domain::value::{CallbackId, DeviceId, SimSlot, SmsId};

pub const LIST_SMS_MIN_LIMIT: u32 = 1;
pub const LIST_SMS_MAX_LIMIT: u32 = 100;

/// `POST /sms/send` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    pub message: String,
    pub phone_number: String,
    /// Device that should send the message; the gateway picks one when unset.
    pub device_id: Option<DeviceId>,
    pub to_sim: Option<SimSlot>,
    pub callback_id: Option<CallbackId>,
}

impl SendSms {
    /// Create a request with only the required fields set.
    pub fn new(phone_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            phone_number: phone_number.into(),
            device_id: None,
            to_sim: None,
            callback_id: None,
        }
    }

    pub fn device_id(mut self, device_id: impl Into<DeviceId>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn to_sim(mut self, slot: i32) -> Self {
        self.to_sim = Some(SimSlot::new(slot));
        self
    }

    pub fn callback_id(mut self, callback_id: impl Into<CallbackId>) -> Self {
        self.callback_id = Some(callback_id.into());
        self
    }
}

/// `POST /sms/get` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSms {
    pub id: SmsId,
}

impl GetSms {
    pub fn new(id: impl Into<SmsId>) -> Self {
        Self { id: id.into() }
    }
}

/// `DELETE /sms/del` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSms {
    pub id: SmsId,
}

impl DeleteSms {
    pub fn new(id: impl Into<SmsId>) -> Self {
        Self { id: id.into() }
    }
}

/// `GET /sms` request.
///
/// Invariant checked by [`ListSms::validate`]: `limit` is within
/// `LIST_SMS_MIN_LIMIT..=LIST_SMS_MAX_LIMIT`. `offset == 0` and an empty `search`
/// are left out of the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSms {
    pub limit: u32,
    pub offset: u32,
    pub search: Option<String>,
}

impl ListSms {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            offset: 0,
            search: None,
        }
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Check the page size bound before anything goes on the wire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(LIST_SMS_MIN_LIMIT..=LIST_SMS_MAX_LIMIT).contains(&self.limit) {
            return Err(ValidationError::LimitOutOfRange {
                min: LIST_SMS_MIN_LIMIT,
                max: LIST_SMS_MAX_LIMIT,
                actual: self.limit,
            });
        }
        Ok(())
    }
}

/// `POST /devices/get/info` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDeviceInfo {
    pub device_id: DeviceId,
}

impl GetDeviceInfo {
    pub fn new(device_id: impl Into<DeviceId>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }
}

/// `POST /devices/edit` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDevice {
    pub device_id: DeviceId,
    /// `None` leaves the flag untouched on the gateway side.
    pub is_active: Option<bool>,
}

impl EditDevice {
    pub fn new(device_id: impl Into<DeviceId>) -> Self {
        Self {
            device_id: device_id.into(),
            is_active: None,
        }
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// `POST /devices/del` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDevice {
    pub device_id: DeviceId,
}

impl DeleteDevice {
    pub fn new(device_id: impl Into<DeviceId>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }
}
