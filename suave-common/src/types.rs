//! Core types shared by every transaction variant.
//!
//! These are plain values: copying one never shares state with the
//! original, so they can cross subsystem boundaries freely.

use alloc::vec::Vec;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

use crate::error::TxError;

/// Blob gas consumed by each blob referenced from a blob transaction.
pub const BLOB_TX_BLOB_GAS_PER_BLOB: u64 = 1 << 17;

/// Ethereum address (20 bytes).
pub type Address = [u8; 20];

/// Keccak256 hash (32 bytes).
pub type Hash256 = [u8; 32];

// =============================================================================
// Access Lists
// =============================================================================

/// A single access list entry: an address and the storage slots it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessTuple {
    /// Accessed account.
    pub address: Address,
    /// Accessed storage keys of that account.
    pub storage_keys: Vec<Hash256>,
}

/// EIP-2930 access list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessList(pub Vec<AccessTuple>);

impl AccessList {
    /// Creates an empty access list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of accessed addresses.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no address is listed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the total number of storage keys across all entries.
    pub fn storage_key_count(&self) -> usize {
        self.0.iter().map(|tuple| tuple.storage_keys.len()).sum()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, AccessTuple> {
        self.0.iter()
    }
}

impl From<Vec<AccessTuple>> for AccessList {
    fn from(tuples: Vec<AccessTuple>) -> Self {
        Self(tuples)
    }
}

// =============================================================================
// Transaction Types
// =============================================================================

/// Discriminant byte identifying each transaction variant (EIP-2718 type).
///
/// The byte is fixed per variant and never derived from field contents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive, ToPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TxType {
    /// Legacy transaction (pre-EIP-2718).
    #[default]
    Legacy = 0x00,
    /// EIP-2930 access list transaction.
    AccessList = 0x01,
    /// EIP-1559 fee market transaction.
    DynamicFee = 0x02,
    /// EIP-4844 blob transaction.
    Blob = 0x03,
    /// Confidential compute request, signed by the requester.
    ConfidentialComputeRequest = 0x42,
    /// Confidential compute result envelope, signed by the execution node.
    Suave = 0x50,
}

impl TxType {
    /// Every variant of the closed set, in discriminant order.
    pub const ALL: [TxType; 6] = [
        TxType::Legacy,
        TxType::AccessList,
        TxType::DynamicFee,
        TxType::Blob,
        TxType::ConfidentialComputeRequest,
        TxType::Suave,
    ];

    /// Returns the discriminant byte.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns true for EIP-2718 typed transactions (everything but legacy).
    #[inline]
    pub fn is_typed(self) -> bool {
        !matches!(self, TxType::Legacy)
    }
}

impl TryFrom<u8> for TxType {
    type Error = TxError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TxType::from_u8(value).ok_or(TxError::UnknownType(value))
    }
}

impl From<TxType> for u8 {
    fn from(tx_type: TxType) -> Self {
        tx_type.as_u8()
    }
}

impl core::fmt::Display for TxType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            TxType::Legacy => "legacy",
            TxType::AccessList => "access-list",
            TxType::DynamicFee => "dynamic-fee",
            TxType::Blob => "blob",
            TxType::ConfidentialComputeRequest => "confidential-compute-request",
            TxType::Suave => "suave",
        };
        write!(f, "{} (0x{:02x})", name, self.as_u8())
    }
}
