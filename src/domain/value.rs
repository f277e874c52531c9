use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
/// GoSMS bearer token sent as `Authorization: Bearer <token>`.
///
/// The value is stored as provided and never refreshed. `Debug` output is redacted.
pub struct Token(String);

impl Token {
    /// Wrap a bearer token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-assigned message id (`id`).
///
/// Opaque: the value is passed through unchanged.
pub struct SmsId(String);

impl SmsId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SmsId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SmsId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Id of a phone registered with the gateway (`device_id`).
///
/// Opaque: the value is passed through unchanged.
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-supplied correlation token echoed back by the gateway (`callback_id`).
pub struct CallbackId(String);

impl CallbackId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CallbackId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CallbackId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SIM slot index on a device (`to_sim`, `slot_index`).
///
/// Slot `0` is a real slot; "no slot" is expressed as `Option<SimSlot>::None`.
/// Devices report an unusable slot as `-1`, which is kept as-is.
pub struct SimSlot(i32);

impl SimSlot {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for SimSlot {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}
