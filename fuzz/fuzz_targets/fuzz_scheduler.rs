//! Fuzz the sample scheduler with arbitrary clock advances, retunes and
//! stop/start sequences: samples must stay in band and emission must stop
//! immediately after stop().

#![no_main]

use libfuzzer_sys::fuzz_target;
use voicecoil::config::SystemConfig;
use voicecoil::wave::scheduler::SampleScheduler;

fuzz_target!(|data: &[u8]| {
    let cfg = SystemConfig::default();
    let lo = cfg.dac_offset - cfg.dac_amplitude;
    let hi = cfg.dac_offset + cfg.dac_amplitude;

    let mut sched = SampleScheduler::new(&cfg);
    let mut now = 0u64;
    sched.start(now, cfg.initial_freq_hz);

    for chunk in data.chunks(2) {
        let op = chunk[0] % 4;
        let arg = *chunk.get(1).unwrap_or(&0);

        match op {
            0 => {
                now += u64::from(arg) * 100;
                if let Some(s) = sched.tick(now) {
                    assert!(s >= lo && s <= hi);
                }
            }
            1 => sched.set_frequency(arg % 20 + 1),
            2 => {
                sched.stop();
                now += u64::from(arg) * 100;
                assert!(sched.tick(now).is_none());
            }
            _ => sched.start(now, arg % 20 + 1),
        }
    }
});
