//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem probes and package-store lookup.
//! This module is the only place where side effects occur.

pub mod packages;
pub mod probe;
