use std::sync::OnceLock;

use regex::Regex;

use crate::{input::InputError, math::hue_to_rgb};

/// Hue step between generated colours, the golden ratio conjugate keeps
/// consecutive colours far apart.
const HUE_STEP: f32 = 0.618_034;

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

/// Chooses the colour given to each new contact.
///
/// A colour selected from outside (a picker, a command line flag) is used
/// for every press. Without a selection each press gets the next colour of a
/// deterministic hue walk.
#[derive(Clone, Debug)]
pub struct Palette {
    selected: Option<[f32; 3]>,
    hue: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            selected: None,
            hue: 0.0,
        }
    }
}

impl Palette {
    /// Use a fixed colour for every press. Channels are clamped to [0, 1].
    pub fn select(&mut self, color: [f32; 3]) {
        self.selected = Some(color.map(|c| c.clamp(0.0, 1.0)));
    }

    /// Select a colour from a `#rrggbb` string.
    pub fn select_hex(&mut self, hex: &str) -> Result<(), InputError> {
        let color = parse_hex(hex)?;
        self.select(color);
        Ok(())
    }

    /// Go back to generated colours.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<[f32; 3]> {
        self.selected
    }

    /// The colour for the next press.
    pub fn next_color(&mut self) -> [f32; 3] {
        if let Some(color) = self.selected {
            return color;
        }
        let color = hue_to_rgb(self.hue, 0.85, 1.0);
        self.hue = (self.hue + HUE_STEP).rem_euclid(1.0);
        color.map(|c| c.clamp(0.0, 1.0))
    }
}

/// Parse `#rrggbb` (the leading `#` is optional) into channels in [0, 1].
pub fn parse_hex(hex: &str) -> Result<[f32; 3], InputError> {
    let matcher = HEX_COLOR.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("the colour pattern is a valid regex")
    });
    let invalid = || InputError::InvalidColor(hex.to_owned());
    let captures = matcher.captures(hex.trim()).ok_or_else(invalid)?;

    let mut color = [0.0; 3];
    for (channel, value) in color.iter_mut().enumerate() {
        let digits = captures.get(channel + 1).ok_or_else(invalid)?.as_str();
        let byte = u8::from_str_radix(digits, 16).map_err(|_| invalid())?;
        *value = byte as f32 / 255.0;
    }
    Ok(color)
}
