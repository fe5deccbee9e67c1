//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements       | Connects to                  |
//! |------------|------------------|------------------------------|
//! | `hardware` | InputPort        | ESP32 GPIO (button, encoder) |
//! |            | WavePort         | ESP32 DAC channel 0          |
//! |            | PanelPort        | HD44780 over I²C             |
//! | `log_sink` | EventSink        | Serial log output            |
//! | `time`     | (clock queries)  | ESP32 system timer           |

pub mod hardware;
pub mod log_sink;
pub mod time;
