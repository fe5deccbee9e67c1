//! HD44780 16×2 character display behind a PCF8574 I²C backpack.
//!
//! The backpack wires the expander pins as `P0=RS, P1=RW, P2=EN,
//! P3=backlight, P4–P7=D4–D7`, so the controller runs in 4-bit mode and
//! every byte reaches it as two strobed nibbles.
//!
//! Generic over [`embedded_hal::i2c::I2c`] and
//! [`embedded_hal::delay::DelayNs`]: on target this is an
//! `esp-idf-hal` I²C driver, in tests a recording mock.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::DisplayError;

/// Characters per line.
pub const LINE_WIDTH: usize = 16;

// PCF8574 control bits.
const RS: u8 = 0b0000_0001;
const EN: u8 = 0b0000_0100;
const BACKLIGHT: u8 = 0b0000_1000;

// HD44780 commands.
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // increment, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5×8 font
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM base address per row.
const ROW_OFFSET: [u8; 2] = [0x00, 0x40];

/// Minimal HD44780 driver, write-only (RW is tied low by the backpack).
pub struct Hd44780<I2C, D> {
    i2c: I2C,
    delay: D,
    addr: u8,
}

impl<I2C: I2c, D: DelayNs> Hd44780<I2C, D> {
    pub fn new(i2c: I2C, delay: D, addr: u8) -> Self {
        Self { i2c, delay, addr }
    }

    /// Power-on init: force 8-bit mode three times, drop to 4-bit, then
    /// configure. Timing per the HD44780 datasheet.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(50);

        for _ in 0..3 {
            self.write_nibble(0x03, false)?;
            self.delay.delay_us(4_500);
        }
        self.write_nibble(0x02, false)?;
        self.delay.delay_us(150);

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        // Clear is the one slow command.
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Write `text` to `row` (0 or 1), space-padded to the full line so
    /// stale characters never survive a shorter redraw.
    pub fn write_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        let row = usize::from(row).min(ROW_OFFSET.len() - 1);
        self.command(CMD_SET_DDRAM | ROW_OFFSET[row])?;

        let mut written = 0;
        for byte in text.bytes().take(LINE_WIDTH) {
            self.data(byte)?;
            written += 1;
        }
        for _ in written..LINE_WIDTH {
            self.data(b' ')?;
        }
        Ok(())
    }

    // ── Internal ──────────────────────────────────────────────

    fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_byte(byte, false)
    }

    fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_byte(byte, true)
    }

    fn write_byte(&mut self, byte: u8, is_data: bool) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4, is_data)?;
        self.write_nibble(byte & 0x0F, is_data)?;
        // Most commands complete in 37 µs; leave margin.
        self.delay.delay_us(50);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8, is_data: bool) -> Result<(), DisplayError> {
        let base = (nibble << 4) | BACKLIGHT | if is_data { RS } else { 0 };
        self.expander_write(base | EN)?;
        self.delay.delay_us(1);
        self.expander_write(base)?;
        Ok(())
    }

    fn expander_write(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.addr, &[byte])
            .map_err(|_| DisplayError::BusWriteFailed)
    }
}
