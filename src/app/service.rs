//! Application service — the hexagonal core.
//!
//! [`AppService`] owns all mutable state: the selected frequency, the
//! actuator on/off flag, the quadrature decoder, the button debouncer and
//! the sample scheduler. It exposes a clean, hardware-agnostic API; all
//! I/O flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │         AppService          │
//!    WavePort ◀── │  debounce · quadrature ·    │ ──▶ PanelPort
//!                 │  sample scheduler           │
//!                 └────────────────────────────┘
//! ```

use log::info;

use crate::config::SystemConfig;
use crate::input::button::ToggleButton;
use crate::input::quadrature::{Detent, QuadratureDecoder};
use crate::wave::scheduler::SampleScheduler;

use super::events::AppEvent;
use super::ports::{EventSink, InputPort, PanelPort, WavePort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: SystemConfig,
    freq_hz: u8,
    actuator_on: bool,
    button: ToggleButton,
    decoder: QuadratureDecoder,
    scheduler: SampleScheduler,
    poll_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        let scheduler = SampleScheduler::new(&config);
        // Encoder lines idle HIGH at a detent (pull-ups).
        let decoder = QuadratureDecoder::new(true, true);
        let button = ToggleButton::new(config.debounce_ms);
        let freq_hz = config.initial_freq_hz;

        Self {
            config,
            freq_hz,
            actuator_on: false,
            button,
            decoder,
            scheduler,
            poll_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Initial panel draw and DAC state; emits [`AppEvent::Started`].
    pub fn start(&mut self, hw: &mut (impl WavePort + PanelPort), sink: &mut impl EventSink) {
        hw.de_energize();
        hw.show_off();
        sink.emit(&AppEvent::Started {
            freq_hz: self.freq_hz,
        });
        info!("AppService started at {} Hz, actuator off", self.freq_hz);
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// One cooperative polling iteration: inputs first, then at most one
    /// due waveform sample. Never blocks, so calling this in a tight loop
    /// keeps the button and encoder responsive during playback.
    pub fn poll(
        &mut self,
        now_us: u64,
        hw: &mut (impl InputPort + WavePort + PanelPort),
        sink: &mut impl EventSink,
    ) {
        self.poll_count += 1;
        let now_ms = (now_us / 1_000) as u32;

        // 1. Button → actuator toggle.
        let level = hw.button_level();
        if self.button.poll(level, now_ms) {
            self.toggle(now_us, hw, sink);
        }

        // 2. Encoder → frequency step.
        let (clk, dt) = hw.encoder_levels();
        if let Some(detent) = self.decoder.sample(clk, dt) {
            self.step_frequency(detent, hw, sink);
        }

        // 3. Waveform playback.
        if let Some(code) = self.scheduler.tick(now_us) {
            hw.write_sample(code);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Selected output frequency in Hz.
    pub fn frequency_hz(&self) -> u8 {
        self.freq_hz
    }

    /// Whether the actuator is currently energised.
    pub fn is_on(&self) -> bool {
        self.actuator_on
    }

    /// Total polling iterations since startup.
    pub fn poll_count(&self) -> u64 {
        self.poll_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn toggle(
        &mut self,
        now_us: u64,
        hw: &mut (impl WavePort + PanelPort),
        sink: &mut impl EventSink,
    ) {
        self.actuator_on = !self.actuator_on;

        if self.actuator_on {
            self.scheduler.start(now_us, self.freq_hz);
            hw.show_frequency(self.freq_hz);
        } else {
            // Abort mid-cycle and release the coil immediately.
            self.scheduler.stop();
            hw.de_energize();
            hw.show_off();
        }

        sink.emit(&AppEvent::ActuatorToggled {
            on: self.actuator_on,
            freq_hz: self.freq_hz,
        });
        info!(
            "Actuator {} at {} Hz",
            if self.actuator_on { "ON" } else { "OFF" },
            self.freq_hz
        );
    }

    fn step_frequency(
        &mut self,
        detent: Detent,
        hw: &mut impl PanelPort,
        sink: &mut impl EventSink,
    ) {
        let from = self.freq_hz;
        let to = match detent {
            Detent::Clockwise => from.saturating_add(1).min(self.config.freq_max_hz),
            Detent::CounterClockwise => from.saturating_sub(1).max(self.config.freq_min_hz),
        };

        if to == from {
            sink.emit(&AppEvent::FrequencyClamped { at_hz: from });
            return;
        }

        self.freq_hz = to;
        self.scheduler.set_frequency(to);
        if self.actuator_on {
            hw.show_frequency(to);
        }
        sink.emit(&AppEvent::FrequencyChanged {
            from_hz: from,
            to_hz: to,
        });
        info!("Frequency {} Hz -> {} Hz", from, to);
    }
}
