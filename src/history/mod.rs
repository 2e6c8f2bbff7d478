//! Shell history loading.
//!
//! This module reads the user's history file once at startup and keeps it
//! in memory in most-recent-first order, which is the order every filter
//! pass walks it in.

mod store;

pub use store::{History, HistoryError};
