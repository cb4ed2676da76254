// base.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{CommandError, ConvertError};

/// Digit symbols, index = digit value.
pub const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Radix values accepted anywhere in the crate.
pub const SUPPORTED_BASES: [u32; 4] = [2, 8, 10, 16];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Base {
    Base2,
    Base8,
    Base10,
    Base16,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Base2, Base::Base8, Base::Base10, Base::Base16];

    pub fn radix(self) -> u32 {
        match self {
            Base::Base2 => 2,
            Base::Base8 => 8,
            Base::Base10 => 10,
            Base::Base16 => 16,
        }
    }

    /// The legal prefix of [`DIGITS`] for this base.
    pub fn alphabet(self) -> &'static [u8] {
        &DIGITS[..self.radix() as usize]
    }

    /// Value of `ch` in this base, ignoring case.
    pub fn digit_value(self, ch: char) -> Option<u32> {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii() {
            return None;
        }
        self.alphabet()
            .iter()
            .position(|&d| d == upper as u8)
            .map(|i| i as u32)
    }

    /// Human description of the legal digits, used in error messages.
    pub fn allowed(self) -> &'static str {
        match self {
            Base::Base2 => "only 0 and 1",
            Base::Base8 => "digits 0-7",
            Base::Base10 => "digits 0-9",
            Base::Base16 => "digits 0-9 and letters A-F",
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = ConvertError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Base::Base2),
            8 => Ok(Base::Base8),
            10 => Ok(Base::Base10),
            16 => Ok(Base::Base16),
            other => Err(ConvertError::UnsupportedBase(other)),
        }
    }
}

impl FromStr for Base {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(|radix| Base::try_from(radix).ok())
            .ok_or_else(|| CommandError::InvalidBase(s.to_string()))
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}
