// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Validated order keys.
//!
//! An `OrderKey` is an immutable string with one integer part followed by
//! zero or more fractional digits. Keys are totally ordered by plain string
//! comparison; the whole point of the encoding is to make that comparison
//! agree with the intended position order.
//!
//! Construction always validates, so any `OrderKey` in hand is well-formed:
//! the integer part is exactly as long as its head implies, every character
//! is an alphabet digit, the fraction does not end in the minimum digit
//! (that form would be reducible to a shorter equivalent), and the key is
//! not the reserved minimum on its own.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::digit;
use crate::integer::IntegerPart;

/// Why a string is not a valid order key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyError {
    /// The key is the empty string.
    Empty,
    /// The first character is not a letter, so it encodes no length.
    InvalidHead(char),
    /// The key is shorter than its head implies.
    Truncated,
    /// A character outside the base-62 alphabet.
    InvalidDigit(char),
    /// The fractional part ends in the minimum digit.
    TrailingMinDigit,
    /// The reserved minimum integer part with no fraction.
    ReservedMinimum,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            KeyError::Empty => write!(f, "empty order key"),
            KeyError::InvalidHead(head) => write!(f, "invalid order key head: {head}"),
            KeyError::Truncated => write!(f, "order key shorter than its head implies"),
            KeyError::InvalidDigit(digit) => write!(f, "invalid order key digit: {digit}"),
            KeyError::TrailingMinDigit => {
                write!(f, "order key fraction ends in the minimum digit")
            }
            KeyError::ReservedMinimum => write!(f, "the reserved minimum order key"),
        };
    }
}

impl std::error::Error for KeyError {}

/// A validated order key.
///
/// Ordered, hashed, and compared as its string form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey(String);

impl OrderKey {
    /// Parse and validate an order key.
    pub fn parse(key: &str) -> Result<OrderKey, KeyError> {
        let integer = IntegerPart::decode(key)?;
        let fraction = &key.as_bytes()[integer.encoded_len()..];
        for &byte in fraction {
            if digit::rank(byte).is_none() {
                return Err(KeyError::InvalidDigit(byte as char));
            }
        }
        if fraction.last() == Some(&digit::DIGITS[0]) {
            return Err(KeyError::TrailingMinDigit);
        }
        if fraction.is_empty() && integer.is_minimum() {
            return Err(KeyError::ReservedMinimum);
        }
        return Ok(OrderKey(key.to_string()));
    }

    /// Wrap a string the generator has already built in canonical form.
    pub(crate) fn from_raw(key: String) -> OrderKey {
        debug_assert!(OrderKey::parse(&key).is_ok(), "non-canonical key: {key:?}");
        return OrderKey(key);
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    /// Split into the decoded integer part and the fractional tail.
    pub(crate) fn split(&self) -> (IntegerPart, &str) {
        let integer = IntegerPart::decode(&self.0).expect("validated at construction");
        let fraction = &self.0[integer.encoded_len()..];
        return (integer, fraction);
    }

    /// The integer part of the key, as a string slice.
    pub fn integer(&self) -> &str {
        let (integer, _) = self.split();
        return &self.0[..integer.encoded_len()];
    }

    /// The fractional part of the key; may be empty.
    pub fn fraction(&self) -> &str {
        let (_, fraction) = self.split();
        return fraction;
    }
}

impl FromStr for OrderKey {
    type Err = KeyError;

    fn from_str(key: &str) -> Result<OrderKey, KeyError> {
        return OrderKey::parse(key);
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.0);
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OrderKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return serializer.serialize_str(&self.0);
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OrderKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<OrderKey, D::Error> {
        let raw = String::deserialize(deserializer)?;
        return OrderKey::parse(&raw).map_err(serde::de::Error::custom);
    }
}
