//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO input directions and the on-chip DAC channel using raw
//! ESP-IDF sys calls. Called once from `main()` before the polling loop
//! starts. The I²C bus for the display is brought up separately in `main`
//! through `esp-idf-hal` (the display driver wants `embedded-hal` traits).

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    DacInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::DacInitFailed(rc) => write!(f, "DAC channel init failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the polling loop; single-threaded.
    unsafe {
        init_gpio_inputs()?;
        init_dac()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    // Button and both encoder phases: plain inputs with pull-ups, no
    // interrupts — the polling loop samples them directly.
    let input_pins = [
        pins::BUTTON_GPIO,
        pins::ENCODER_CLK_GPIO,
        pins::ENCODER_DT_GPIO,
    ];

    for &pin in &input_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
    }

    info!("hw_init: GPIO inputs configured (button, encoder clk/dt)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    true
}

// ── DAC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut DAC_HANDLE: dac_oneshot_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe fn init_dac() -> Result<(), HwInitError> {
    let cfg = dac_oneshot_config_t {
        chan_id: dac_channel_t_DAC_CHAN_0, // GPIO 25
    };
    // SAFETY: DAC_HANDLE is only written here, once at boot.
    let ret = unsafe { dac_oneshot_new_channel(&cfg, &raw mut DAC_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::DacInitFailed(ret));
    }
    info!("hw_init: DAC channel 0 configured (GPIO {})", pins::DAC_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn dac_write(code: u8) {
    // SAFETY: DAC_HANDLE is written once during init_dac() before this is
    // called; single-threaded polling-loop access guaranteed.
    unsafe {
        dac_oneshot_output_voltage(DAC_HANDLE, code);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn dac_write(_code: u8) {}
