//! End-to-end service tests: scripted pin levels in, recorded DAC/panel
//! calls out, against a simulated microsecond clock.

use voicecoil::app::events::AppEvent;
use voicecoil::app::service::AppService;
use voicecoil::config::SystemConfig;

use crate::mock_hw::{CaptureSink, HwCall, MockHardware};

/// Gray sequence for one clockwise detent, starting and ending at rest (11).
const CW_DETENT: [(bool, bool); 4] = [(true, false), (false, false), (false, true), (true, true)];
const CCW_DETENT: [(bool, bool); 4] = [(false, true), (false, false), (true, false), (true, true)];

struct Harness {
    app: AppService,
    hw: MockHardware,
    sink: CaptureSink,
    now_us: u64,
}

impl Harness {
    fn new() -> Self {
        let mut h = Self {
            app: AppService::new(SystemConfig::default()),
            hw: MockHardware::new(),
            sink: CaptureSink::new(),
            now_us: 0,
        };
        h.app.start(&mut h.hw, &mut h.sink);
        h
    }

    /// Advance the clock and run one polling iteration.
    fn step(&mut self, dt_us: u64) {
        self.now_us += dt_us;
        self.app.poll(self.now_us, &mut self.hw, &mut self.sink);
    }

    /// Poll at `step_us` cadence until `duration_us` has elapsed.
    fn run_for(&mut self, duration_us: u64, step_us: u64) {
        let end = self.now_us + duration_us;
        while self.now_us < end {
            self.step(step_us);
        }
    }

    /// Press and release the button (one falling edge).
    fn press(&mut self) {
        self.hw.button = false;
        self.step(100);
        self.hw.button = true;
        self.step(100);
    }

    fn detent_cw(&mut self) {
        for &levels in &CW_DETENT {
            self.hw.encoder = levels;
            self.step(100);
        }
    }

    fn detent_ccw(&mut self) {
        for &levels in &CCW_DETENT {
            self.hw.encoder = levels;
            self.step(100);
        }
    }

    fn frequency_changes(&self) -> usize {
        self.sink
            .events
            .iter()
            .filter(|e| matches!(e, AppEvent::FrequencyChanged { .. }))
            .count()
    }
}

// ── Toggle behaviour ──────────────────────────────────────────

#[test]
fn startup_shows_off_and_releases_coil() {
    let h = Harness::new();
    assert!(!h.app.is_on());
    assert_eq!(h.hw.last_panel(), Some(&HwCall::ShowOff));
    assert!(!h.hw.coil_energized());
    assert_eq!(h.sink.events, vec![AppEvent::Started { freq_hz: 1 }]);
}

#[test]
fn press_starts_playback_and_shows_frequency() {
    let mut h = Harness::new();
    h.press();
    assert!(h.app.is_on());
    assert_eq!(h.hw.last_panel(), Some(&HwCall::ShowFrequency(1)));
    // 1 Hz × 64 samples: 15625 µs spacing. Run half a second.
    h.run_for(500_000, 200);
    let n = h.hw.samples().len();
    assert!((30..=34).contains(&n), "got {n} samples in 500 ms at 1 Hz");
}

#[test]
fn press_while_on_aborts_mid_cycle() {
    let mut h = Harness::new();
    h.press();
    h.run_for(300_000, 200); // part-way into the first 1 Hz cycle
    let emitted = h.hw.samples().len();
    assert!(emitted > 0);

    h.press();
    assert!(!h.app.is_on());
    assert!(!h.hw.coil_energized());
    assert_eq!(h.hw.last_panel(), Some(&HwCall::ShowOff));

    // No further samples after the abort.
    h.run_for(500_000, 200);
    assert_eq!(h.hw.samples().len(), emitted);
}

#[test]
fn rapid_second_press_is_debounced() {
    let mut h = Harness::new();
    h.press();
    assert!(h.app.is_on());
    // Bounce 50 ms later — inside the 200 ms window.
    h.run_for(50_000, 1_000);
    h.press();
    assert!(h.app.is_on(), "bounce must not toggle the actuator");

    // A press after the window toggles off.
    h.run_for(250_000, 1_000);
    h.press();
    assert!(!h.app.is_on());
}

// ── Frequency selection ───────────────────────────────────────

#[test]
fn detents_step_frequency_up_and_down() {
    let mut h = Harness::new();
    h.detent_cw();
    h.detent_cw();
    assert_eq!(h.app.frequency_hz(), 3);
    h.detent_ccw();
    assert_eq!(h.app.frequency_hz(), 2);
    assert_eq!(h.frequency_changes(), 3);
}

#[test]
fn frequency_clamps_at_both_bounds() {
    let mut h = Harness::new();
    for _ in 0..30 {
        h.detent_cw();
    }
    assert_eq!(h.app.frequency_hz(), 20);
    // 19 real changes (1 → 20), the rest clamped.
    assert_eq!(h.frequency_changes(), 19);

    for _ in 0..30 {
        h.detent_ccw();
    }
    assert_eq!(h.app.frequency_hz(), 1);

    let clamped = h
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::FrequencyClamped { .. }))
        .count();
    assert_eq!(clamped, 11 + 11);
}

#[test]
fn encoder_stays_responsive_during_playback() {
    let mut h = Harness::new();
    h.press();
    h.run_for(100_000, 200);

    // Turn two detents while the waveform is playing.
    h.detent_cw();
    h.detent_cw();
    assert_eq!(h.app.frequency_hz(), 3);
    assert_eq!(h.hw.last_panel(), Some(&HwCall::ShowFrequency(3)));

    // Playback continues at the new rate.
    let before = h.hw.samples().len();
    h.run_for(100_000, 200);
    assert!(h.hw.samples().len() > before);
}

#[test]
fn panel_untouched_by_detents_while_off() {
    let mut h = Harness::new();
    h.detent_cw();
    assert_eq!(h.app.frequency_hz(), 2);
    // Still the startup OFF screen; no frequency draw while off.
    assert_eq!(h.hw.last_panel(), Some(&HwCall::ShowOff));
}

// ── Waveform shape ────────────────────────────────────────────

#[test]
fn samples_stay_within_configured_band() {
    let cfg = SystemConfig::default();
    let mut h = Harness::new();
    h.press();
    h.run_for(2_000_000, 100);
    let samples = h.hw.samples();
    assert!(!samples.is_empty());
    for s in samples {
        assert!(s >= cfg.dac_offset - cfg.dac_amplitude);
        assert!(s <= cfg.dac_offset + cfg.dac_amplitude);
    }
}

#[test]
fn one_second_at_one_hertz_is_one_full_cycle() {
    let mut h = Harness::new();
    h.press();
    // Fine-grained clock: 64 × 15625 µs = exactly 1 s.
    h.run_for(1_000_000, 25);
    let n = h.hw.samples().len();
    assert!((63..=65).contains(&n), "got {n} samples");
}
