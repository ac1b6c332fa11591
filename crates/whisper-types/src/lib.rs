//! Shared data types for whisper push notifications.
//!
//! Field names follow the document store the events originate from
//! (camelCase on the wire).

pub mod api;
pub mod models;
pub mod notification;
