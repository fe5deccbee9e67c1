//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — the production adapter writes them to the
//! serial log.

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The application service has started (carries the initial frequency).
    Started { freq_hz: u8 },

    /// The button toggled the actuator.
    ActuatorToggled { on: bool, freq_hz: u8 },

    /// A confirmed encoder detent changed the frequency.
    FrequencyChanged { from_hz: u8, to_hz: u8 },

    /// A detent arrived while the frequency was pinned at a range edge.
    FrequencyClamped { at_hz: u8 },
}
