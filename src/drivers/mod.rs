//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod dac;
pub mod display;
pub mod hw_init;
