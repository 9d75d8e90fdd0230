//! Error types for SUAVE transactions.
//!
//! The payload accessors themselves never fail. Errors only arise at the
//! edges: decoding a discriminant byte, computing a tip against a base fee,
//! or addressing a signature layer a variant does not have.

use core::fmt;

/// Transaction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxError {
    /// Discriminant byte does not name any known variant.
    UnknownType(u8),

    /// Fee cap is below the proposed base fee.
    GasFeeCapTooLow,

    /// The wrapped request layer was addressed on a non-envelope variant.
    NotAnEnvelope,
}

impl TxError {
    /// Returns a stable numeric code for the error.
    #[inline]
    pub fn code(self) -> u32 {
        match self {
            TxError::UnknownType(_) => 0x01,
            TxError::GasFeeCapTooLow => 0x02,
            TxError::NotAnEnvelope => 0x03,
        }
    }
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxError::UnknownType(byte) => write!(f, "Unknown transaction type 0x{:02x}", byte),
            TxError::GasFeeCapTooLow => write!(f, "Fee cap less than base fee"),
            TxError::NotAnEnvelope => write!(f, "Not an envelope transaction"),
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for TxError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_codes() {
        assert_eq!(TxError::UnknownType(0x7f).code(), 0x01);
        assert_eq!(TxError::GasFeeCapTooLow.code(), 0x02);
        assert_eq!(TxError::NotAnEnvelope.code(), 0x03);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TxError::UnknownType(0x7f).to_string(),
            "Unknown transaction type 0x7f"
        );
        assert_eq!(
            TxError::GasFeeCapTooLow.to_string(),
            "Fee cap less than base fee"
        );
    }
}
