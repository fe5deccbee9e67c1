//! System configuration parameters
//!
//! All tunable parameters for the VoiceCoil demonstrator. The firmware runs
//! from compiled-in defaults; nothing is persisted across resets.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Frequency ---
    /// Lowest selectable output frequency (Hz).
    pub freq_min_hz: u8,
    /// Highest selectable output frequency (Hz).
    pub freq_max_hz: u8,
    /// Frequency at power-on (Hz).
    pub initial_freq_hz: u8,

    // --- Waveform ---
    /// Samples emitted per sine cycle. Must divide the 256-entry LUT.
    pub samples_per_cycle: u16,
    /// DAC code at the waveform midpoint.
    pub dac_offset: u8,
    /// Peak deviation from the midpoint, in DAC codes.
    pub dac_amplitude: u8,

    // --- Inputs ---
    /// Minimum time between accepted button toggles (milliseconds).
    pub debounce_ms: u32,

    // --- Timing ---
    /// Idle sleep between polling-loop iterations (microseconds).
    pub poll_interval_us: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Frequency
            freq_min_hz: 1,
            freq_max_hz: 20,
            initial_freq_hz: 1,

            // Waveform
            samples_per_cycle: 64,
            dac_offset: 128,
            dac_amplitude: 127,

            // Inputs
            debounce_ms: 200,

            // Timing: 100 µs keeps the loop well above the 1.28 kHz
            // worst-case sample rate (20 Hz × 64 samples).
            poll_interval_us: 100,
        }
    }
}

impl SystemConfig {
    /// Reject inconsistent values instead of silently clamping them.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.freq_min_hz == 0 {
            return Err("freq_min_hz must be at least 1");
        }
        if self.freq_min_hz > self.freq_max_hz {
            return Err("freq_min_hz must not exceed freq_max_hz");
        }
        if self.initial_freq_hz < self.freq_min_hz || self.initial_freq_hz > self.freq_max_hz {
            return Err("initial_freq_hz outside [freq_min_hz, freq_max_hz]");
        }
        if self.samples_per_cycle == 0 || 256 % self.samples_per_cycle != 0 {
            return Err("samples_per_cycle must divide 256");
        }
        if u16::from(self.dac_offset) + u16::from(self.dac_amplitude) > 255 {
            return Err("dac_offset + dac_amplitude exceeds 8-bit range");
        }
        if self.dac_offset < self.dac_amplitude {
            return Err("dac_offset - dac_amplitude underflows 8-bit range");
        }
        if self.debounce_ms == 0 {
            return Err("debounce_ms must be non-zero");
        }
        Ok(())
    }
}
