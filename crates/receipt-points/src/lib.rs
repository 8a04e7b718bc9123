//! Core engine for the receipt points service: receipt validation, the
//! points scoring rules, and the HTTP routing surface, together with the
//! configuration, telemetry, and error plumbing the service binary builds on.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
