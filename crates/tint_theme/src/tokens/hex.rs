//! Hex color validation
//!
//! Only the long forms are recognized: `RRGGBB` and `RRGGBBAA`, with or
//! without a leading `#`. Short `#RGB` notation is rejected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Fallback used when a reference cannot be resolved
pub const FALLBACK_UNRESOLVED: &str = "#FF00FF";

/// Light half used by the merger when neither document defines a key
pub const FALLBACK_LIGHT: &str = "#000000";

/// Dark half used by the merger when neither document defines a key
pub const FALLBACK_DARK: &str = "#FFFFFF";

/// Check a string against the hex rules and return its uppercase digits.
///
/// Surrounding whitespace and a single leading `#` are stripped first.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 && digits.len() != 8 {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(digits.to_ascii_uppercase())
}

/// Same as [`normalize_hex`] for a value of unknown JSON type.
pub fn normalize_hex_value(value: &Value) -> Option<String> {
    value.as_str().and_then(normalize_hex)
}

/// A validated color in canonical `#RRGGBB` / `#RRGGBBAA` form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse and normalize a hex string
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_hex(raw).map(|digits| Self(format!("#{digits}")))
    }

    /// Parse a JSON value, accepting only strings
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }

    /// Magenta marker for unresolved references
    pub fn unresolved() -> Self {
        Self(FALLBACK_UNRESOLVED.to_string())
    }

    pub fn fallback_light() -> Self {
        Self(FALLBACK_LIGHT.to_string())
    }

    pub fn fallback_dark() -> Self {
        Self(FALLBACK_DARK.to_string())
    }

    /// Canonical form including the leading `#`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digits without the leading `#`
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// True for the 8-digit form
    pub fn has_alpha(&self) -> bool {
        self.digits().len() == 8
    }

    /// Packed `0xRRGGBB` or `0xRRGGBBAA` value.
    ///
    /// Digits are validated on construction, so parsing cannot fail.
    pub fn to_u32(&self) -> u32 {
        u32::from_str_radix(self.digits(), 16).unwrap_or(0)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{raw}`")))
    }
}
