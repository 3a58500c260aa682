//! Keypad entry
//!
//! Drives a calculator from key presses the way a keymap binding does:
//! digits and the decimal point build up an entry line, Enter pushes it,
//! and operation keys push any pending entry before operating.
//!
//! Key codes 0 through 13 are operations (see [`Operation`]). Digits and
//! editing keys use their HID usage IDs, so the keyboard's own number row
//! and keypad can be bound directly.

use crate::calculator::Calculator;
use crate::display::{format_lines, format_status, truncate_str};
use crate::ops::Operation;
use num_complex::Complex64;
use thiserror::Error;

/// Maximum characters held in the entry line
pub const LINE_WIDTH: usize = 10;

const HID_ENTER: u32 = 0x28;
const HID_BACKSPACE: u32 = 0x2A;
const HID_PERIOD: u32 = 0x37;
const HID_KP_ENTER: u32 = 0x58;
const HID_KP_DOT: u32 = 0x63;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyError {
    #[error("Unmapped key code: 0x{0:02X}")]
    Unmapped(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key {
    Digit(u8),
    Point,
    Enter,
    Backspace,
    Operation(Operation),
}

impl TryFrom<u32> for Key {
    type Error = KeyError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0..=13 => Operation::try_from(code as u8)
                .map(Key::Operation)
                .map_err(|_| KeyError::Unmapped(code)),
            // number row: 1..9 then 0
            0x1E..=0x26 => Ok(Key::Digit((code - 0x1E + 1) as u8)),
            0x27 => Ok(Key::Digit(0)),
            // keypad: 1..9 then 0
            0x59..=0x61 => Ok(Key::Digit((code - 0x59 + 1) as u8)),
            0x62 => Ok(Key::Digit(0)),
            HID_PERIOD | HID_KP_DOT => Ok(Key::Point),
            HID_ENTER | HID_KP_ENTER => Ok(Key::Enter),
            HID_BACKSPACE => Ok(Key::Backspace),
            _ => Err(KeyError::Unmapped(code)),
        }
    }
}

/// Key-driven front end over a calculator
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    calculator: Calculator,
    /// Text typed since the last commit
    line: String,
}

impl Keypad {
    pub fn new(calculator: Calculator) -> Self {
        Keypad {
            calculator,
            line: String::new(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Pending entry text
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Handle a raw key code
    pub fn press_code(&mut self, code: u32) -> Result<(), KeyError> {
        let key = Key::try_from(code)?;
        self.press(key);
        Ok(())
    }

    /// Handle a key press
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => {
                if self.line.len() < LINE_WIDTH && d <= 9 {
                    self.line.push(char::from(b'0' + d));
                }
            }
            Key::Point => {
                if self.line.len() < LINE_WIDTH && !self.line.contains('.') {
                    self.line.push('.');
                }
            }
            Key::Backspace => {
                self.line.pop();
            }
            Key::Enter => {
                self.commit();
            }
            Key::Operation(op) => {
                self.commit();
                self.calculator.perform(op);
            }
        }
    }

    /// Push the pending entry, if any
    fn commit(&mut self) {
        if self.line.is_empty() {
            return;
        }
        // A lone "." reads as zero
        let value = self.line.parse::<f64>().unwrap_or(0.0);
        self.calculator.push(Complex64::new(value, 0.0));
        self.line.clear();
    }

    /// Two display lines: the pending entry (or the top of the stack), then
    /// the stack status.
    pub fn display_lines(&self, precision: usize, width: usize) -> [String; 2] {
        let [top, status] = format_lines(self.calculator.stack(), precision, width);
        if self.line.is_empty() {
            [top, status]
        } else {
            [truncate_str(&self.line, width), status]
        }
    }

    /// Stack status as `depth/capacity`
    pub fn status(&self) -> String {
        format_status(self.calculator.stack())
    }
}
