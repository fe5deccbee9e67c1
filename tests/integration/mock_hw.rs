//! Mock hardware adapter for integration tests.
//!
//! Records every DAC and panel call so tests can assert on the full
//! command history without touching real GPIO/DAC registers, and lets the
//! test script the input pin levels.

use voicecoil::app::events::AppEvent;
use voicecoil::app::ports::{EventSink, InputPort, PanelPort, WavePort};

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    Sample(u8),
    DeEnergize,
    ShowFrequency(u8),
    ShowOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Scripted button level (true = released).
    pub button: bool,
    /// Scripted encoder (clk, dt) levels.
    pub encoder: (bool, bool),
    pub calls: Vec<HwCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            button: true,
            encoder: (true, true),
            calls: Vec::new(),
        }
    }

    pub fn samples(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::Sample(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn last_panel(&self) -> Option<&HwCall> {
        self.calls
            .iter()
            .rev()
            .find(|c| matches!(c, HwCall::ShowFrequency(_) | HwCall::ShowOff))
    }

    pub fn coil_energized(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                HwCall::Sample(_) => Some(true),
                HwCall::DeEnergize => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockHardware {
    fn button_level(&mut self) -> bool {
        self.button
    }

    fn encoder_levels(&mut self) -> (bool, bool) {
        self.encoder
    }
}

impl WavePort for MockHardware {
    fn write_sample(&mut self, code: u8) {
        self.calls.push(HwCall::Sample(code));
    }

    fn de_energize(&mut self) {
        self.calls.push(HwCall::DeEnergize);
    }
}

impl PanelPort for MockHardware {
    fn show_frequency(&mut self, hz: u8) {
        self.calls.push(HwCall::ShowFrequency(hz));
    }

    fn show_off(&mut self) {
        self.calls.push(HwCall::ShowOff);
    }
}

// ── CaptureSink ───────────────────────────────────────────────

pub struct CaptureSink {
    pub events: Vec<AppEvent>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for CaptureSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
