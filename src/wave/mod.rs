//! Sine waveform generation — lookup table and real-time sample scheduling.

pub mod lut;
pub mod scheduler;
