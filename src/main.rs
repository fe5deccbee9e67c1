//! VoiceCoil Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single-threaded cooperative polling loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter          LogEventSink   Esp32Time       │
//! │  (Input+Wave+PanelPort)   (EventSink)    (clock)         │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)             │      │
//! │  │  debounce · quadrature · sample scheduler      │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```

use anyhow::{anyhow, Result};
use log::{info, warn};

use voicecoil::adapters::hardware::HardwareAdapter;
use voicecoil::adapters::log_sink::LogEventSink;
use voicecoil::adapters::time::Esp32TimeAdapter;
use voicecoil::app::service::AppService;
use voicecoil::config::SystemConfig;
use voicecoil::drivers::dac::DacDriver;
use voicecoil::drivers::display::Hd44780;
use voicecoil::drivers::hw_init;
use voicecoil::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("VoiceCoil v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compiled-in; nothing is persisted) ──
    let config = SystemConfig::default();
    config.validate().map_err(|msg| anyhow!("config: {msg}"))?;

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(|e| anyhow!("hw_init: {e}"))?;

    let peripherals = esp_idf_hal::peripherals::Peripherals::take()?;
    let i2c = esp_idf_hal::i2c::I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio22,
        &esp_idf_hal::i2c::I2cConfig::new()
            .baudrate(esp_idf_hal::units::Hertz(pins::I2C_FREQ_HZ)),
    )?;
    let lcd = Hd44780::new(
        i2c,
        esp_idf_hal::delay::Delay::new_default(),
        pins::LCD_I2C_ADDR,
    );

    let mut hw = HardwareAdapter::new(DacDriver::new(), lcd);
    if let Err(e) = hw.init_panel() {
        // A dead display is not fatal; the serial log still shows state.
        warn!("display init failed: {} — continuing headless", e);
    }

    // ── 4. Construct the application core ─────────────────────
    let time = Esp32TimeAdapter::new();
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(config.clone());
    app.start(&mut hw, &mut sink);

    info!("System ready. Entering polling loop.");

    // ── 5. Polling loop ───────────────────────────────────────
    loop {
        let now_us = time.uptime_us();
        app.poll(now_us, &mut hw, &mut sink);

        if app.is_on() {
            // Sample deadlines are sub-millisecond (1.28 kHz at 20 Hz ×
            // 64 samples), far below the RTOS tick — short busy-wait
            // between iterations keeps inputs polled at full rate.
            #[cfg(target_os = "espidf")]
            unsafe {
                esp_idf_svc::sys::esp_rom_delay_us(config.poll_interval_us);
            }
        } else {
            // One RTOS tick keeps the idle task fed while the coil is off.
            #[cfg(target_os = "espidf")]
            unsafe {
                esp_idf_svc::sys::vTaskDelay(1);
            }
        }

        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_micros(u64::from(
            config.poll_interval_us,
        )));
    }
}
