//! Deadline-based sample scheduler for sine playback.
//!
//! The scheduler never blocks: the polling loop calls [`SampleScheduler::tick`]
//! every iteration, and a sample is returned only when its deadline has
//! passed. Inter-sample spacing is `1_000_000 / (hz * samples_per_cycle)` µs
//! (rounded down to whole microseconds), and deadlines advance by whole
//! periods, so one full cycle spans `samples_per_cycle` periods regardless
//! of loop jitter. Button and encoder polling therefore continue at full
//! rate during playback, and [`SampleScheduler::stop`] aborts a cycle
//! immediately.

use crate::config::SystemConfig;
use crate::wave::lut::{LUT_SIZE, SINE_LUT};

/// Schedules 8-bit sine samples against a microsecond monotonic clock.
#[derive(Debug, Clone)]
pub struct SampleScheduler {
    samples_per_cycle: u32,
    /// LUT indices skipped per emitted sample.
    stride: usize,
    offset: u8,
    amplitude: u8,
    /// Inter-sample spacing at the current frequency, µs.
    period_us: u64,
    /// Current LUT index (phase within the cycle).
    phase: usize,
    next_due_us: u64,
    running: bool,
}

impl SampleScheduler {
    /// Build from a validated [`SystemConfig`]; `samples_per_cycle` is
    /// assumed to divide the LUT size (enforced by `SystemConfig::validate`).
    pub fn new(config: &SystemConfig) -> Self {
        let spc = u32::from(config.samples_per_cycle);
        Self {
            samples_per_cycle: spc,
            stride: LUT_SIZE / spc as usize,
            offset: config.dac_offset,
            amplitude: config.dac_amplitude,
            period_us: period_us(config.initial_freq_hz, spc),
            phase: 0,
            next_due_us: 0,
            running: false,
        }
    }

    /// Begin playback at `hz`, with the first sample due immediately.
    pub fn start(&mut self, now_us: u64, hz: u8) {
        self.period_us = period_us(hz, self.samples_per_cycle);
        self.phase = 0;
        self.next_due_us = now_us;
        self.running = true;
    }

    /// Stop playback immediately. Pending deadlines are discarded.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Retune mid-cycle; takes effect from the next sample deadline.
    pub fn set_frequency(&mut self, hz: u8) {
        self.period_us = period_us(hz, self.samples_per_cycle);
    }

    /// Emit the next sample iff its deadline has passed.
    ///
    /// At most one sample is returned per call. If the loop has been
    /// starved for more than one full period the schedule re-anchors to
    /// `now` instead of bursting catch-up samples.
    pub fn tick(&mut self, now_us: u64) -> Option<u8> {
        if !self.running || now_us < self.next_due_us {
            return None;
        }

        let sample = self.scale(SINE_LUT[self.phase]);
        self.phase = (self.phase + self.stride) % LUT_SIZE;

        self.next_due_us += self.period_us;
        if now_us.saturating_sub(self.next_due_us) > self.period_us {
            self.next_due_us = now_us + self.period_us;
        }

        Some(sample)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Inter-sample spacing at the current frequency, µs.
    pub fn period_us(&self) -> u64 {
        self.period_us
    }

    fn scale(&self, raw: i16) -> u8 {
        let scaled = i32::from(self.amplitude) * i32::from(raw) / 32767;
        (i32::from(self.offset) + scaled) as u8
    }
}

fn period_us(hz: u8, samples_per_cycle: u32) -> u64 {
    u64::from(1_000_000 / (u32::from(hz.max(1)) * samples_per_cycle))
}
