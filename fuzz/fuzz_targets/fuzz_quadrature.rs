//! Fuzz the quadrature decoder with arbitrary pin chatter: the accumulator
//! must never escape (-4, 4) and frequency stepping must never leave the
//! configured bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use voicecoil::config::SystemConfig;
use voicecoil::input::quadrature::{Detent, QuadratureDecoder, STEPS_PER_DETENT};

fuzz_target!(|data: &[u8]| {
    let cfg = SystemConfig::default();
    let mut dec = QuadratureDecoder::new(true, true);
    let mut hz = cfg.initial_freq_hz;

    for byte in data {
        let clk = byte & 0b10 != 0;
        let dt = byte & 0b01 != 0;

        if let Some(detent) = dec.sample(clk, dt) {
            hz = match detent {
                Detent::Clockwise => hz.saturating_add(1).min(cfg.freq_max_hz),
                Detent::CounterClockwise => hz.saturating_sub(1).max(cfg.freq_min_hz),
            };
        }

        assert!(dec.accumulator().abs() < STEPS_PER_DETENT);
        assert!(hz >= cfg.freq_min_hz && hz <= cfg.freq_max_hz);
    }
});
