//! Voice-coil DAC output driver.
//!
//! Thin wrapper over the on-chip 8-bit DAC (channel 0, GPIO 25). The coil
//! amplifier is a dumb load: whatever code is written appears as a voltage
//! on the coil. De-energizing writes code 0 so the coil relaxes instead of
//! holding a mid-scale bias current.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real DAC via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DacState {
    /// Output held at 0 V.
    Released,
    /// Actively emitting waveform samples.
    Driving { last_code: u8 },
}

pub struct DacDriver {
    state: DacState,
}

impl DacDriver {
    pub fn new() -> Self {
        Self {
            state: DacState::Released,
        }
    }

    /// Emit one waveform sample.
    pub fn write(&mut self, code: u8) {
        hw_init::dac_write(code);
        self.state = DacState::Driving { last_code: code };
    }

    /// Drive the output to 0 V and mark the coil released.
    pub fn de_energize(&mut self) {
        hw_init::dac_write(0);
        self.state = DacState::Released;
    }

    pub fn state(&self) -> DacState {
        self.state
    }

    pub fn is_driving(&self) -> bool {
        matches!(self.state, DacState::Driving { .. })
    }
}
