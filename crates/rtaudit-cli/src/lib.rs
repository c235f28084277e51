//! Shared pieces of the audit CLI.
//!
//! The binary lives in `main.rs`; logging setup is exported here so the
//! pipeline and tests can use the same subscriber configuration and URN
//! redaction helpers.

pub mod logging;
