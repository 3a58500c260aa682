//! Integration tests for key-driven entry

use rpnc::keypad::LINE_WIDTH;
use rpnc::{Calculator, Complex64, Key, KeyError, Keypad, Operation};

const KP_ENTER: u32 = 0x58;
const KP_DOT: u32 = 0x63;

fn kp_digit(d: u32) -> u32 {
    if d == 0 {
        0x62
    } else {
        0x58 + d
    }
}

fn type_number(keypad: &mut Keypad, text: &str) {
    for c in text.chars() {
        let code = match c {
            '.' => KP_DOT,
            d => kp_digit(d.to_digit(10).unwrap()),
        };
        keypad.press_code(code).unwrap();
    }
}

#[test]
fn test_keyed_division() {
    let mut keypad = Keypad::default();
    type_number(&mut keypad, "7.5");
    keypad.press_code(KP_ENTER).unwrap();
    type_number(&mut keypad, "3");
    keypad.press_code(Operation::Divide.code() as u32).unwrap();
    assert_eq!(keypad.calculator().top(), Some(Complex64::new(2.5, 0.0)));
    assert_eq!(keypad.display_lines(10, 16)[0], "2.5");
}

#[test]
fn test_every_operation_code_maps() {
    for op in Operation::ALL {
        assert_eq!(Key::try_from(op.code() as u32), Ok(Key::Operation(op)));
    }
}

#[test]
fn test_unmapped_code_leaves_stack_alone() {
    let mut keypad = Keypad::default();
    type_number(&mut keypad, "4");
    assert_eq!(keypad.press_code(0xE0), Err(KeyError::Unmapped(0xE0)));
    assert_eq!(keypad.line(), "4");
    assert!(keypad.calculator().stack().is_empty());
}

#[test]
fn test_long_entry_is_clipped() {
    let mut keypad = Keypad::default();
    type_number(&mut keypad, "123456789012345");
    assert_eq!(keypad.line(), "1234567890");
    assert_eq!(keypad.line().len(), LINE_WIDTH);
}

#[test]
fn test_keypad_on_small_calculator() {
    let mut keypad = Keypad::new(Calculator::with_capacity(2));
    for d in ["1", "2", "3"] {
        type_number(&mut keypad, d);
        keypad.press(Key::Enter);
    }
    assert_eq!(keypad.status(), "2/2");
    keypad.press(Key::Operation(Operation::Add));
    assert_eq!(keypad.calculator().top(), Some(Complex64::new(5.0, 0.0)));
}
