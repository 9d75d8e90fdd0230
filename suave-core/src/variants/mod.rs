//! Transaction payload variants.
//!
//! Each variant is a plain record implementing [`TxData`]. The closed set
//! of variants is collected in [`TxInner`], which is what [`TxData::copy`]
//! returns and what a [`Transaction`](crate::Transaction) owns.
//!
//! Supported variants:
//! - Legacy transactions (pre-EIP-2718)
//! - EIP-2930 access list transactions (type 0x01)
//! - EIP-1559 fee market transactions (type 0x02)
//! - EIP-4844 blob transactions (type 0x03)
//! - Confidential compute requests (type 0x42)
//! - SUAVE result envelopes (type 0x50)

use core::fmt;

use num_bigint::BigUint;
use suave_common::{AccessList, Address, Hash256, TxType};

use crate::envelope::SuaveTransaction;

pub mod access_list;
pub mod blob;
pub mod confidential;
pub mod dynamic_fee;
pub mod legacy;

pub use access_list::AccessListTx;
pub use blob::BlobTx;
pub use confidential::ConfidentialComputeRequest;
pub use dynamic_fee::DynamicFeeTx;
pub use legacy::LegacyTx;

/// Capability contract implemented by every transaction payload.
///
/// All accessors are pure reads. [`TxData::set_signature_values`] is the
/// only mutator; everything else that needs a modified payload works on a
/// [`TxData::copy`].
pub trait TxData: fmt::Debug + Send + Sync {
    /// Discriminant byte of this variant. Fixed per type.
    fn tx_type(&self) -> TxType;

    /// Deep copy sharing no state with `self`.
    fn copy(&self) -> TxInner;

    fn chain_id(&self) -> BigUint;
    fn access_list(&self) -> Option<&AccessList>;
    fn data(&self) -> &[u8];
    fn gas(&self) -> u64;
    fn gas_price(&self) -> &BigUint;
    fn gas_tip_cap(&self) -> &BigUint;
    fn gas_fee_cap(&self) -> &BigUint;
    fn value(&self) -> &BigUint;
    fn nonce(&self) -> u64;

    /// Recipient, or `None` for contract creation.
    fn to(&self) -> Option<Address>;

    fn blob_gas(&self) -> u64 {
        0
    }

    fn blob_gas_fee_cap(&self) -> Option<&BigUint> {
        None
    }

    fn blob_hashes(&self) -> Option<&[Hash256]> {
        None
    }

    /// Writes the price per gas actually payable under `base_fee` into
    /// `dst` and returns it.
    fn effective_gas_price<'a>(
        &self,
        dst: &'a mut BigUint,
        base_fee: Option<&BigUint>,
    ) -> &'a BigUint;

    /// Raw `(v, r, s)` as stored, without chain-id adjustments.
    fn raw_signature_values(&self) -> (&BigUint, &BigUint, &BigUint);

    /// Overwrites the chain id and signature triple in place.
    fn set_signature_values(&mut self, chain_id: BigUint, v: BigUint, r: BigUint, s: BigUint);
}

/// Copies an optional address. Absent stays absent.
#[inline]
pub fn copy_address(addr: Option<&Address>) -> Option<Address> {
    addr.map(|addr| {
        let mut copy = [0u8; 20];
        copy.copy_from_slice(addr);
        copy
    })
}

/// Flat-price payloads pay their stored gas price regardless of base fee.
pub(crate) fn flat_effective_gas_price<'a>(
    dst: &'a mut BigUint,
    gas_price: &BigUint,
) -> &'a BigUint {
    dst.clone_from(gas_price);
    dst
}

/// Fee market payloads pay `min(fee_cap, base_fee + tip_cap)`.
pub(crate) fn dynamic_effective_gas_price<'a>(
    dst: &'a mut BigUint,
    gas_tip_cap: &BigUint,
    gas_fee_cap: &BigUint,
    base_fee: Option<&BigUint>,
) -> &'a BigUint {
    match base_fee {
        None => dst.clone_from(gas_fee_cap),
        Some(base_fee) => {
            let capped = base_fee + gas_tip_cap;
            if &capped < gas_fee_cap {
                *dst = capped;
            } else {
                dst.clone_from(gas_fee_cap);
            }
        }
    }
    dst
}

// =============================================================================
// Closed variant set
// =============================================================================

/// One case per transaction variant.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TxInner {
    Legacy(LegacyTx),
    AccessList(AccessListTx),
    DynamicFee(DynamicFeeTx),
    Blob(BlobTx),
    ConfidentialComputeRequest(ConfidentialComputeRequest),
    Suave(SuaveTransaction),
}

macro_rules! dispatch {
    ($self:expr, $tx:ident => $body:expr) => {
        match $self {
            TxInner::Legacy($tx) => $body,
            TxInner::AccessList($tx) => $body,
            TxInner::DynamicFee($tx) => $body,
            TxInner::Blob($tx) => $body,
            TxInner::ConfidentialComputeRequest($tx) => $body,
            TxInner::Suave($tx) => $body,
        }
    };
}

impl TxInner {
    /// Returns the request payload if this is a confidential compute request.
    pub fn as_confidential_compute_request(&self) -> Option<&ConfidentialComputeRequest> {
        match self {
            TxInner::ConfidentialComputeRequest(tx) => Some(tx),
            _ => None,
        }
    }

    /// Returns the envelope if this is a SUAVE result envelope.
    pub fn as_suave(&self) -> Option<&SuaveTransaction> {
        match self {
            TxInner::Suave(tx) => Some(tx),
            _ => None,
        }
    }

    pub(crate) fn as_suave_mut(&mut self) -> Option<&mut SuaveTransaction> {
        match self {
            TxInner::Suave(tx) => Some(tx),
            _ => None,
        }
    }
}

impl TxData for TxInner {
    fn tx_type(&self) -> TxType {
        dispatch!(self, tx => tx.tx_type())
    }

    fn copy(&self) -> TxInner {
        dispatch!(self, tx => tx.copy())
    }

    fn chain_id(&self) -> BigUint {
        dispatch!(self, tx => tx.chain_id())
    }

    fn access_list(&self) -> Option<&AccessList> {
        dispatch!(self, tx => tx.access_list())
    }

    fn data(&self) -> &[u8] {
        dispatch!(self, tx => tx.data())
    }

    fn gas(&self) -> u64 {
        dispatch!(self, tx => tx.gas())
    }

    fn gas_price(&self) -> &BigUint {
        dispatch!(self, tx => tx.gas_price())
    }

    fn gas_tip_cap(&self) -> &BigUint {
        dispatch!(self, tx => tx.gas_tip_cap())
    }

    fn gas_fee_cap(&self) -> &BigUint {
        dispatch!(self, tx => tx.gas_fee_cap())
    }

    fn value(&self) -> &BigUint {
        dispatch!(self, tx => tx.value())
    }

    fn nonce(&self) -> u64 {
        dispatch!(self, tx => tx.nonce())
    }

    fn to(&self) -> Option<Address> {
        dispatch!(self, tx => tx.to())
    }

    fn blob_gas(&self) -> u64 {
        dispatch!(self, tx => tx.blob_gas())
    }

    fn blob_gas_fee_cap(&self) -> Option<&BigUint> {
        dispatch!(self, tx => tx.blob_gas_fee_cap())
    }

    fn blob_hashes(&self) -> Option<&[Hash256]> {
        dispatch!(self, tx => tx.blob_hashes())
    }

    fn effective_gas_price<'a>(
        &self,
        dst: &'a mut BigUint,
        base_fee: Option<&BigUint>,
    ) -> &'a BigUint {
        dispatch!(self, tx => tx.effective_gas_price(dst, base_fee))
    }

    fn raw_signature_values(&self) -> (&BigUint, &BigUint, &BigUint) {
        dispatch!(self, tx => tx.raw_signature_values())
    }

    fn set_signature_values(&mut self, chain_id: BigUint, v: BigUint, r: BigUint, s: BigUint) {
        dispatch!(self, tx => tx.set_signature_values(chain_id, v, r, s))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TxInner {
                fn from(tx: $ty) -> Self {
                    TxInner::$variant(tx)
                }
            }
        )*
    };
}

impl_from_variant! {
    Legacy => LegacyTx,
    AccessList => AccessListTx,
    DynamicFee => DynamicFeeTx,
    Blob => BlobTx,
    ConfidentialComputeRequest => ConfidentialComputeRequest,
    Suave => SuaveTransaction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_address_absent() {
        assert_eq!(copy_address(None), None);
    }

    #[test]
    fn test_copy_address_present() {
        let addr = [0xde; 20];
        let mut copy = copy_address(Some(&addr)).unwrap();
        copy[0] = 0x00;
        assert_eq!(addr[0], 0xde);
    }

    #[test]
    fn test_flat_price_ignores_base_fee() {
        let mut dst = BigUint::from(7u32);
        let price = BigUint::from(100u32);
        assert_eq!(
            flat_effective_gas_price(&mut dst, &price),
            &BigUint::from(100u32)
        );
    }

    #[test]
    fn test_dynamic_price_without_base_fee_is_fee_cap() {
        let mut dst = BigUint::default();
        let tip = BigUint::from(2u32);
        let cap = BigUint::from(50u32);
        assert_eq!(
            dynamic_effective_gas_price(&mut dst, &tip, &cap, None),
            &BigUint::from(50u32)
        );
    }

    #[test]
    fn test_dynamic_price_is_capped() {
        let tip = BigUint::from(2u32);
        let cap = BigUint::from(50u32);

        let mut dst = BigUint::default();
        let low_base = BigUint::from(10u32);
        assert_eq!(
            dynamic_effective_gas_price(&mut dst, &tip, &cap, Some(&low_base)),
            &BigUint::from(12u32)
        );

        let high_base = BigUint::from(60u32);
        assert_eq!(
            dynamic_effective_gas_price(&mut dst, &tip, &cap, Some(&high_base)),
            &BigUint::from(50u32)
        );
    }

    #[test]
    fn test_from_variant() {
        let inner = TxInner::from(LegacyTx::default());
        assert_eq!(inner.tx_type(), TxType::Legacy);
        assert!(inner.as_suave().is_none());
        assert!(inner.as_confidential_compute_request().is_none());
    }
}
