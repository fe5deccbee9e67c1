//! GPIO / peripheral pin assignments for the VoiceCoil demonstrator board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// User inputs
// ---------------------------------------------------------------------------

/// Momentary push-button toggling the actuator (active-low, external pull-up).
pub const BUTTON_GPIO: i32 = 16;

/// Rotary encoder clock line (A phase). Pulled up; idles HIGH at a detent.
pub const ENCODER_CLK_GPIO: i32 = 17;
/// Rotary encoder data line (B phase). Pulled up.
pub const ENCODER_DT_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// Actuator output (DAC)
// ---------------------------------------------------------------------------

/// On-chip 8-bit DAC channel 1 — fixed to GPIO 25 on the classic ESP32.
/// Drives the voice-coil amplifier input.
pub const DAC_GPIO: i32 = 25;

// ---------------------------------------------------------------------------
// Character display (HD44780 16×2 behind a PCF8574 I²C backpack)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 21;
pub const I2C_SCL_GPIO: i32 = 22;

/// 7-bit I²C address of the PCF8574 backpack (A0–A2 open).
pub const LCD_I2C_ADDR: u8 = 0x27;

/// I²C bus clock. The PCF8574 tops out at 100 kHz.
pub const I2C_FREQ_HZ: u32 = 100_000;
