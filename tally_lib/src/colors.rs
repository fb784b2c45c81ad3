use crate::errors::Error;
use crate::flow_signs::FlowSign;

/// The color family used to display an amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Tone {
    Affirmative,
    Warning,
    Muted,
}

impl From<FlowSign> for Tone {
    fn from(sign: FlowSign) -> Self {
        match sign {
            FlowSign::Credit => Tone::Affirmative,
            FlowSign::Debit => Tone::Warning,
            FlowSign::Neutral => Tone::Muted,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    /// Parse "#rrggbb", "rrggbb" or the short form "#rgb".
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Rgb {
                r: channel(digits.get(0..2).ok_or_else(invalid)?)?,
                g: channel(digits.get(2..4).ok_or_else(invalid)?)?,
                b: channel(digits.get(4..6).ok_or_else(invalid)?)?,
            }),
            3 => {
                let short = |idx: usize| -> Result<u8, Error> {
                    Ok(channel(digits.get(idx..idx + 1).ok_or_else(invalid)?)?
                        * 17)
                };
                Ok(Rgb { r: short(0)?, g: short(1)?, b: short(2)? })
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance, in [0, 1].
    pub fn luminance(&self) -> f64 {
        let linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// WCAG contrast ratio between two colors, in [1, 21].
    pub fn contrast_ratio(&self, other: &Rgb) -> f64 {
        let (l1, l2) = (self.luminance(), other.luminance());
        let (light, dark) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Black or white, whichever reads better on this background.
    pub fn contrast_text(&self) -> Rgb {
        if self.contrast_ratio(&Rgb::BLACK) >= self.contrast_ratio(&Rgb::WHITE) {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}
