//! # Lead Form Contract
//!
//! Wire types shared by the ingest server and the form client.
//!
//! ## Request
//! - `POST /`, `Content-Type: application/json`
//! - Body: `{name, phone, consultation, timestamp}`, all strings
//! - Form-encoded parameters with the same four keys are accepted as well
//!
//! ## Response
//! - Success: `{success: true, message}`
//! - Failure: `{success: false, error, message}`
//! - `GET /`: `{status: "OK", message, timestamp}`
//!
//! ## Sheet
//! Row 1 holds [`HEADERS`] once anything has been written. Every other row is
//! `[name, phone, consultation, timestamp]`.
use chrono::{DateTime, Local, TimeZone};

pub mod consultation;
pub mod messages;
pub mod payloads;

pub use consultation::ConsultationType;
pub use payloads::{StatusResponse, SubmitPayload, SubmitResponse};

pub const HEADERS: [&str; 4] = ["Имя", "Телефон", "Тип консультации", "Дата и время"];

/// ru-RU `toLocaleString` layout.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

pub fn timestamp_now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}
