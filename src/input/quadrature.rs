//! Quadrature decoder for a detented rotary encoder.
//!
//! ## Decoding
//!
//! The two encoder phases form a 2-bit Gray code. Each transition from the
//! previous reading to the current one maps, via a fixed 16-entry table
//! indexed by `(previous << 2) | current`, to a sub-step delta of -1, 0 or
//! +1. Illegal transitions (both bits flipped at once, i.e. a missed
//! sample or contact bounce) map to 0 and are simply dropped.
//!
//! One mechanical detent spans four sub-steps. Deltas accumulate, and only
//! a full ±4 commits a detent; the accumulator then resets to zero. This
//! makes the decoder immune to the half-click jitter a bouncing contact
//! produces while resting between detents.
//!
//! The decoder must be fed at a rate faster than the encoder can produce
//! transitions — the polling loop samples it every iteration, including
//! during waveform playback.

/// A confirmed full click of the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detent {
    Clockwise,
    CounterClockwise,
}

/// Sub-step delta per (previous, current) 2-bit state pair.
///
/// Index layout: `prev_clk << 3 | prev_dt << 2 | clk << 1 | dt`.
/// Clockwise Gray sequence 00 → 01 → 11 → 10 → 00 yields +1 per edge.
pub const TRANSITION_TABLE: [i8; 16] = [
    0, 1, -1, 0, // from 00
    -1, 0, 0, 1, // from 01
    1, 0, 0, -1, // from 10
    0, -1, 1, 0, // from 11
];

/// Sub-steps per mechanical detent.
pub const STEPS_PER_DETENT: i8 = 4;

/// Incremental quadrature decoder with detent confirmation.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    /// Previous 2-bit reading: `clk << 1 | dt`.
    prev: u8,
    /// Signed sub-step accumulator, reset to 0 after each full detent.
    accum: i8,
}

impl QuadratureDecoder {
    /// Seed the decoder with the current pin levels so the first real
    /// transition is decoded against a valid previous state.
    pub fn new(clk: bool, dt: bool) -> Self {
        Self {
            prev: pack(clk, dt),
            accum: 0,
        }
    }

    /// Feed one pin sample. Returns a detent when a full ±4 sub-steps have
    /// accumulated; the accumulator resets to exactly 0 in that case.
    pub fn sample(&mut self, clk: bool, dt: bool) -> Option<Detent> {
        let current = pack(clk, dt);
        let delta = TRANSITION_TABLE[usize::from(self.prev << 2 | current)];
        self.prev = current;

        if delta == 0 {
            return None;
        }

        self.accum += delta;
        if self.accum >= STEPS_PER_DETENT {
            self.accum = 0;
            Some(Detent::Clockwise)
        } else if self.accum <= -STEPS_PER_DETENT {
            self.accum = 0;
            Some(Detent::CounterClockwise)
        } else {
            None
        }
    }

    /// Current sub-step accumulator (for diagnostics and tests).
    pub fn accumulator(&self) -> i8 {
        self.accum
    }
}

fn pack(clk: bool, dt: bool) -> u8 {
    (u8::from(clk) << 1) | u8::from(dt)
}
