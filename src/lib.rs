//! VoiceCoil firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod input;
pub mod wave;

pub mod error;
pub mod pins;

// Hardware-facing modules — the actual register access inside is guarded
// by cfg attributes, so the crate compiles and tests on the host.
pub mod adapters;
pub mod drivers;
