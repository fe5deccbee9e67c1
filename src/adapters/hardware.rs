//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the DAC driver and the character display, exposing them through
//! [`WavePort`] and [`PanelPort`], and reads the raw input pins for
//! [`InputPort`]. This is the only module in the system that touches
//! actual hardware. On non-espidf targets the underlying drivers use
//! cfg-gated simulation stubs.

use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::{InputPort, PanelPort, WavePort};
use crate::drivers::dac::DacDriver;
use crate::drivers::display::Hd44780;
use crate::error::Result;
use crate::pins;

/// What the panel currently shows; cached to suppress redundant redraws
/// at polling rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelView {
    Off,
    Frequency(u8),
}

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I2C, D> {
    dac: DacDriver,
    lcd: Hd44780<I2C, D>,
    shown: Option<PanelView>,
}

impl<I2C: I2c, D: DelayNs> HardwareAdapter<I2C, D> {
    pub fn new(dac: DacDriver, lcd: Hd44780<I2C, D>) -> Self {
        Self {
            dac,
            lcd,
            shown: None,
        }
    }

    /// Initialise the display and draw the banner line.
    pub fn init_panel(&mut self) -> Result<()> {
        self.lcd.init()?;
        self.lcd.write_line(0, "VoiceCoil")?;
        Ok(())
    }

    fn draw(&mut self, view: PanelView) {
        if self.shown == Some(view) {
            return;
        }

        let mut line = heapless::String::<16>::new();
        let result = match view {
            PanelView::Off => self.lcd.write_line(1, "Actuator OFF"),
            PanelView::Frequency(hz) => {
                // 16 chars at worst: "Frequency: 20 Hz".
                let _ = write!(line, "Frequency: {} Hz", hz);
                self.lcd.write_line(1, &line)
            }
        };

        match result {
            Ok(()) => self.shown = Some(view),
            Err(e) => {
                // Drop the cache so the next state change retries.
                warn!("panel redraw failed: {}", e);
                self.shown = None;
            }
        }
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I2C: I2c, D: DelayNs> InputPort for HardwareAdapter<I2C, D> {
    fn button_level(&mut self) -> bool {
        crate::drivers::hw_init::gpio_read(pins::BUTTON_GPIO)
    }

    fn encoder_levels(&mut self) -> (bool, bool) {
        (
            crate::drivers::hw_init::gpio_read(pins::ENCODER_CLK_GPIO),
            crate::drivers::hw_init::gpio_read(pins::ENCODER_DT_GPIO),
        )
    }
}

// ── WavePort implementation ───────────────────────────────────

impl<I2C: I2c, D: DelayNs> WavePort for HardwareAdapter<I2C, D> {
    fn write_sample(&mut self, code: u8) {
        self.dac.write(code);
    }

    fn de_energize(&mut self) {
        self.dac.de_energize();
    }
}

// ── PanelPort implementation ──────────────────────────────────

impl<I2C: I2c, D: DelayNs> PanelPort for HardwareAdapter<I2C, D> {
    fn show_frequency(&mut self, hz: u8) {
        self.draw(PanelView::Frequency(hz));
    }

    fn show_off(&mut self) {
        self.draw(PanelView::Off);
    }
}
