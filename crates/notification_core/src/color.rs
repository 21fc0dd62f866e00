use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Accent colour with one byte per channel, packed alpha-first when stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Argb {
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Fully opaque colour.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(0xff, red, green, blue)
    }

    pub fn pack(self) -> i32 {
        u32::from_be_bytes([self.alpha, self.red, self.green, self.blue]) as i32
    }

    pub fn unpack(packed: i32) -> Self {
        let [alpha, red, green, blue] = (packed as u32).to_be_bytes();
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }
}

impl From<Argb> for i32 {
    fn from(color: Argb) -> Self {
        color.pack()
    }
}

impl From<i32> for Argb {
    fn from(packed: i32) -> Self {
        Argb::unpack(packed)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.alpha, self.red, self.green, self.blue
        )
    }
}

impl FromStr for Argb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Argb::unpack((0xff00_0000 | value) as i32)),
            8 => Ok(Argb::unpack(value as i32)),
            _ => Err(invalid()),
        }
    }
}
