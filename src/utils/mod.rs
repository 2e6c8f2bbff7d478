//! Utility modules for common functionality.
//!
//! This module contains helpers shared by the binary: the logging
//! configuration and the exit code mapping.

pub mod exit;
pub mod logger;
