// Keyboard-driven color picker living in the HUD strip.
// Visual: the HUD shows a swatch plus "#rrggbb"; press H, type six hex
// digits, Enter to apply (Escape cancels). Samples from right-click show up
// here too.

use crate::color::{hex_to_rgb, DEFAULT_PICKER_HEX};
use crate::controller::ColorPicker;
use image::Rgb;
use minifb::Key;

pub struct HexPicker {
    value: String,         // what the widget currently displays
    entry: Option<String>, // digits typed so far while editing
}

impl Default for HexPicker {
    fn default() -> Self {
        Self { value: DEFAULT_PICKER_HEX.to_string(), entry: None }
    }
}

impl HexPicker {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Swatch color for the HUD; falls back to black if the value is junk.
    pub fn swatch(&self) -> Rgb<u8> {
        hex_to_rgb(&self.value).unwrap_or(Rgb([0, 0, 0]))
    }

    pub fn is_editing(&self) -> bool {
        self.entry.is_some()
    }

    /// Text for the HUD: the value, or the partial entry with a cursor.
    pub fn label(&self) -> String {
        match &self.entry {
            Some(digits) => format!("HEX #{digits}_"),
            None => self.value.clone(),
        }
    }

    /// Feed one key press. Returns the typed value when the user commits one;
    /// the caller forwards it to the controller as a color change and calls
    /// `show` once it is accepted.
    pub fn on_key(&mut self, key: Key) -> Option<String> {
        let Some(digits) = self.entry.as_mut() else {
            if key == Key::H {
                self.entry = Some(String::new());
            }
            return None;
        };
        match key {
            Key::Escape => self.entry = None,
            Key::Backspace => {
                digits.pop();
            }
            Key::Enter | Key::NumPadEnter => {
                let committed = format!("#{digits}");
                self.entry = None;
                return Some(committed);
            }
            other => {
                if let Some(c) = hex_digit(other)
                    && digits.len() < 6
                {
                    digits.push(c);
                }
            }
        }
        None
    }
}

impl ColorPicker for HexPicker {
    fn show(&mut self, hex: &str) {
        self.value = hex.to_string();
    }
}

fn hex_digit(key: Key) -> Option<char> {
    let c = match key {
        Key::Key0 | Key::NumPad0 => '0',
        Key::Key1 | Key::NumPad1 => '1',
        Key::Key2 | Key::NumPad2 => '2',
        Key::Key3 | Key::NumPad3 => '3',
        Key::Key4 | Key::NumPad4 => '4',
        Key::Key5 | Key::NumPad5 => '5',
        Key::Key6 | Key::NumPad6 => '6',
        Key::Key7 | Key::NumPad7 => '7',
        Key::Key8 | Key::NumPad8 => '8',
        Key::Key9 | Key::NumPad9 => '9',
        Key::A => 'a',
        Key::B => 'b',
        Key::C => 'c',
        Key::D => 'd',
        Key::E => 'e',
        Key::F => 'f',
        _ => return None,
    };
    Some(c)
}
