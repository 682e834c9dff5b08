// Rust guideline compliant 2026-10-16

//! Command implementations for the modsched CLI.

pub mod check;
pub mod fields;
pub mod init_config;
pub mod timeline;
pub mod transitions;
