//! Spreadsheet column letter codec.
//!
//! Column labels are bijective base-26: there is no symbol for zero, so
//! A=1 .. Z=26, AA=27, and every positive integer has exactly one label.
//! This is what distinguishes the scheme from ordinary base-26 conversion
//! (and why the encode loop subtracts one before each division).

use crate::error::{OfficeError, Result};

/// Convert a 1-based column index to its letter label (1 = A, 26 = Z, 27 = AA).
///
/// # Errors
/// Returns [`OfficeError::InvalidIndex`] when `index` is zero.
pub fn encode_column(index: u32) -> Result<String> {
    if index < 1 {
        return Err(OfficeError::InvalidIndex(index));
    }

    let mut label = String::new();
    let mut n = index;
    while n > 0 {
        n -= 1;
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    Ok(label)
}

/// Convert a letter label back to its 1-based column index (A = 1, AA = 27).
///
/// Case-insensitive. Non-letter characters are skipped rather than rejected,
/// so an A1-style fragment like `"$AB$3"` decodes the same as `"ab"`.
///
/// # Errors
/// Returns [`OfficeError::MalformedLabel`] when the input contains no letters,
/// and [`OfficeError::LabelOutOfRange`] when the label decodes past the
/// largest representable column index (seven letters overflow a `u32`).
pub fn decode_column(label: &str) -> Result<u32> {
    let mut index: u32 = 0;
    for c in label.chars() {
        if c.is_ascii_alphabetic() {
            let value = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
            index = index
                .checked_mul(26)
                .and_then(|n| n.checked_add(value))
                .ok_or_else(|| OfficeError::LabelOutOfRange(label.to_string()))?;
        }
    }

    if index == 0 {
        return Err(OfficeError::MalformedLabel(label.to_string()));
    }
    Ok(index)
}
