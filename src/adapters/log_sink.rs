//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { freq_hz } => {
                info!("START  | freq={} Hz, actuator off", freq_hz);
            }
            AppEvent::ActuatorToggled { on, freq_hz } => {
                info!(
                    "TOGGLE | actuator {} at {} Hz",
                    if *on { "ON" } else { "OFF" },
                    freq_hz
                );
            }
            AppEvent::FrequencyChanged { from_hz, to_hz } => {
                info!("FREQ   | {} Hz -> {} Hz", from_hz, to_hz);
            }
            AppEvent::FrequencyClamped { at_hz } => {
                info!("FREQ   | clamped at {} Hz", at_hz);
            }
        }
    }
}
