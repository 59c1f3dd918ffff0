use crate::error::{Error, Result};

/// 8-bit RGBA color, straight (non-premultiplied) alpha
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// with alpha builder method
    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || Error::InvalidColor(hex.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// The three colors a widget uses in one interaction state
///
/// `outer` fills the rounded outline, `inner` the body, and `accent` the
/// slider progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateColors {
    pub outer: Color,
    pub inner: Color,
    pub accent: Color,
}

impl StateColors {
    pub const fn new(outer: Color, inner: Color, accent: Color) -> Self {
        Self {
            outer,
            inner,
            accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#0000ff").unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::from_hex("#10203040").unwrap(),
            Color::rgba(16, 32, 48, 64)
        );
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(Error::InvalidColor(_))
        ));
        assert!(Color::from_hex("#gg0000").is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_tuple_conversions() {
        let c: Color = (10, 14, 17, 120).into();
        assert_eq!(c, Color::rgb(10, 14, 17).with_alpha(120));
        assert!(!c.is_opaque());
    }
}
