//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    DeleteDevice, DeleteSms, EditDevice, GetDeviceInfo, GetSms, LIST_SMS_MAX_LIMIT,
    LIST_SMS_MIN_LIMIT, ListSms, SendSms,
};
pub use response::{
    DeviceInfo, ListSmsResponse, Pagination, SendSmsResponse, SimCard, SmsRecord,
};
pub use validation::ValidationError;
pub use value::{CallbackId, DeviceId, SimSlot, SmsId, Token};
