//! Accession parsing — split into a non-digit prefix and a digit suffix.

use crate::error::AccessionError;

/// An accession split at its first non-digit → digit boundary.
///
/// `prefix + digits` always reproduces the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAccession<'a> {
    pub prefix: &'a str,
    pub digits: &'a str,
    pub value: u64,
}

impl<'a> ParsedAccession<'a> {
    pub fn parse(accession: &'a str) -> Result<Self, AccessionError> {
        let split = boundary(accession).ok_or_else(|| AccessionError::MissingDigits {
            accession: accession.to_string(),
        })?;
        let (prefix, digits) = accession.split_at(split);

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccessionError::NonNumeric {
                accession: accession.to_string(),
                digits: digits.to_string(),
            });
        }
        // Non-empty and all ASCII digits, so only overflow can fail here.
        let value = digits.parse::<u64>().map_err(|_| AccessionError::Overflow {
            accession: accession.to_string(),
            digits: digits.to_string(),
        })?;

        Ok(Self { prefix, digits, value })
    }

    /// Padded width of the digit suffix.
    pub fn width(&self) -> usize {
        self.digits.len()
    }
}

/// Byte offset of the first digit that directly follows a non-digit.
fn boundary(accession: &str) -> Option<usize> {
    // A leading digit has no non-digit before it.
    let mut prev_is_digit = true;
    for (idx, ch) in accession.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if is_digit && !prev_is_digit {
            return Some(idx);
        }
        prev_is_digit = is_digit;
    }
    None
}
