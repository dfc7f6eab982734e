use std::fmt;

use crate::error::CoreError;

/// A parsed protocol code such as `A-1` or `K-12`: a category letter
/// prefix followed by the protocol's number within that category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolCode {
    pub category: String,
    pub number: u32,
}

impl ProtocolCode {
    pub fn parse(code: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidCode(code.to_string());

        let (prefix, number) = code.split_once('-').ok_or_else(invalid)?;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(invalid());
        }
        // Digits only, no sign and no leading zero.
        if number.is_empty()
            || number.starts_with('0')
            || !number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let number: u32 = number.parse().map_err(|_| invalid())?;

        Ok(Self {
            category: prefix.to_string(),
            number,
        })
    }
}

impl fmt::Display for ProtocolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.number)
    }
}
