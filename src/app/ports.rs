//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (pin reads, DAC, display, event sinks) implement these
//! traits. The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to sample the user inputs.
/// Must be cheap — it is called on every polling-loop iteration.
pub trait InputPort {
    /// Raw button level (true = HIGH = released; the switch is active-low).
    fn button_level(&mut self) -> bool;

    /// Raw encoder (clk, dt) levels.
    fn encoder_levels(&mut self) -> (bool, bool);
}

// ───────────────────────────────────────────────────────────────
// Waveform port (driven adapter: domain → DAC)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain pushes 8-bit waveform samples through this.
pub trait WavePort {
    /// Emit one DAC code.
    fn write_sample(&mut self, code: u8);

    /// Release the coil: drive the DAC to 0 V and hold it there.
    fn de_energize(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Panel port (driven adapter: domain → character display)
// ───────────────────────────────────────────────────────────────

/// Two-line status panel. Implementations should suppress redundant
/// redraws themselves; the domain calls these whenever state changes.
pub trait PanelPort {
    /// Actuator running at `hz`: show `Frequency: N Hz`.
    fn show_frequency(&mut self, hz: u8);

    /// Actuator stopped: show `Actuator OFF`.
    fn show_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log in
/// production, a capture buffer in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
