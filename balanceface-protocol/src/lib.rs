//! Balance watchface message vocabulary
//!
//! This crate defines the key/value messages exchanged between the watchface
//! and its companion phone app. The host platform owns transport and
//! serialization; the watchface only sees already-parsed dictionaries.
//!
//! # Message Overview
//!
//! ```text
//! Companion ──► Watch   { BALANCE: int32, SPENT_TODAY: int32 }
//! Watch ──► Companion   { REFRESH: int32 }
//! ```
//!
//! Both directions use a 128-byte buffer. A dictionary is sized as:
//! ```text
//! ┌───────┬─────┬──────┬────────┬────────┬─────┐
//! │ COUNT │ KEY │ TYPE │ LENGTH │ VALUE  │ ... │
//! │ 1B    │ 4B  │ 1B   │ 2B     │ LENGTH │     │
//! └───────┴─────┴──────┴────────┴────────┴─────┘
//! ```
//!
//! Delivery is best effort: the host reports dropped inbound messages and
//! failed outbound sends through [`AppMessageEvent`] with an
//! [`AppMessageResult`] reason.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dictionary;
pub mod events;
pub mod messages;
pub mod result;

pub use dictionary::{Dictionary, INBOX_SIZE, MAX_MESSAGE_SIZE, MAX_TUPLES, OUTBOX_SIZE};
pub use events::AppMessageEvent;
pub use messages::{MessageKey, Tuple, TupleValue};
pub use result::AppMessageResult;
