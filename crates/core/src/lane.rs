//! Lane codes: the two-character identifiers of dispensing lanes.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::VendingError;
use crate::value_object::ValueObject;

/// Identifier of a dispensing lane, e.g. `A1`.
///
/// Exactly two ASCII characters: a letter followed by a digit. The letter is
/// stored upper-cased, so `"a1"` and `"A1"` parse to the same lane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LaneCode(String);

impl LaneCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Row letter of the lane (upper-case).
    pub fn row(&self) -> char {
        self.0.chars().next().unwrap_or_default()
    }

    /// Column digit of the lane.
    pub fn column(&self) -> u8 {
        self.0
            .chars()
            .nth(1)
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
            .unwrap_or_default()
    }

    /// Returns true if `raw` satisfies the letter + digit format rule.
    pub fn is_valid(raw: &str) -> bool {
        let mut chars = raw.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(letter), Some(digit), None)
                if letter.is_ascii_alphabetic() && digit.is_ascii_digit()
        )
    }
}

impl ValueObject for LaneCode {}

impl core::fmt::Display for LaneCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LaneCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for LaneCode {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(VendingError::invalid_lane(s));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for LaneCode {
    type Error = VendingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LaneCode> for String {
    fn from(value: LaneCode) -> Self {
        value.0
    }
}
