//! Typed Rust client for the GoSMS HTTP API.
//!
//! GoSMS turns registered phones ("devices") into SMS modems. This crate covers
//! sending, fetching, listing and deleting messages, and inspecting, editing and
//! deleting devices. It is organised as a domain layer of plain value types, a
//! transport layer for the JSON wire format, and a small client layer issuing one
//! authenticated HTTPS call per operation.
//!
//! ```rust,no_run
//! use gosms::{GoSmsClient, ListSms, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gosms::GoSmsError> {
//!     let client = GoSmsClient::new("...");
//!     let sent = client.send_sms(SendSms::new("79990000000", "hello")).await?;
//!     let page = client.list_sms(ListSms::new(10).search("7999")).await?;
//!     println!("sent {:?}, {} on page", sent.id, page.sms_list.len());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{GoSmsClient, GoSmsClientBuilder, GoSmsError};
pub use domain::{
    CallbackId, DeleteDevice, DeleteSms, DeviceId, DeviceInfo, EditDevice, GetDeviceInfo,
    GetSms, LIST_SMS_MAX_LIMIT, LIST_SMS_MIN_LIMIT, ListSms, ListSmsResponse, Pagination,
    SendSms, SendSmsResponse, SimCard, SimSlot, SmsId, SmsRecord, Token, ValidationError,
};
