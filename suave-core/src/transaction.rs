//! The immutable transaction wrapper.
//!
//! A [`Transaction`] owns one payload variant and only hands out reads.
//! Construction always deep-copies the payload, and signing produces a new
//! transaction instead of mutating the existing one.
//!
//! Signers must say which layer they target. For a SUAVE envelope the
//! [`SignatureLayer::Outer`] layer is the execution node's attestation and
//! the [`SignatureLayer::Request`] layer is the requester's authorization.

use alloc::boxed::Box;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use suave_common::{AccessList, Address, Hash256, TxError, TxType};

use crate::envelope::SuaveTransaction;
use crate::variants::{ConfidentialComputeRequest, TxData, TxInner};

/// Signature layer addressed by a signer or verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureLayer {
    /// The transaction's own signature.
    Outer,
    /// The signature of the request wrapped by a SUAVE envelope.
    Request,
}

/// A transaction of any variant.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    inner: Box<TxInner>,
}

impl Transaction {
    /// Builds a transaction from a copy of `inner`.
    pub fn new(inner: TxInner) -> Self {
        log::trace!("suave: new {} transaction", inner.tx_type());
        Self {
            inner: Box::new(inner.copy()),
        }
    }

    /// Builds a transaction from a copy of any payload.
    pub fn from_data(data: &dyn TxData) -> Self {
        Self {
            inner: Box::new(data.copy()),
        }
    }

    /// Returns the payload, for variant-aware callers.
    #[inline]
    pub fn inner(&self) -> &TxInner {
        &self.inner
    }

    /// Returns the request payload if this is a confidential compute request.
    pub fn as_confidential_compute_request(&self) -> Option<&ConfidentialComputeRequest> {
        self.inner.as_confidential_compute_request()
    }

    /// Returns the envelope if this is a SUAVE result envelope.
    pub fn as_suave(&self) -> Option<&SuaveTransaction> {
        self.inner.as_suave()
    }

    pub fn tx_type(&self) -> TxType {
        self.inner.tx_type()
    }

    pub fn chain_id(&self) -> BigUint {
        self.inner.chain_id()
    }

    /// Payload bytes. For an envelope this is the computation result.
    pub fn data(&self) -> &[u8] {
        self.inner.data()
    }

    pub fn access_list(&self) -> Option<&AccessList> {
        self.inner.access_list()
    }

    pub fn gas(&self) -> u64 {
        self.inner.gas()
    }

    pub fn gas_price(&self) -> &BigUint {
        self.inner.gas_price()
    }

    pub fn gas_tip_cap(&self) -> &BigUint {
        self.inner.gas_tip_cap()
    }

    pub fn gas_fee_cap(&self) -> &BigUint {
        self.inner.gas_fee_cap()
    }

    pub fn value(&self) -> &BigUint {
        self.inner.value()
    }

    pub fn nonce(&self) -> u64 {
        self.inner.nonce()
    }

    pub fn to(&self) -> Option<Address> {
        self.inner.to()
    }

    pub fn blob_gas(&self) -> u64 {
        self.inner.blob_gas()
    }

    pub fn blob_gas_fee_cap(&self) -> Option<&BigUint> {
        self.inner.blob_gas_fee_cap()
    }

    pub fn blob_hashes(&self) -> Option<&[Hash256]> {
        self.inner.blob_hashes()
    }

    pub fn effective_gas_price<'a>(
        &self,
        dst: &'a mut BigUint,
        base_fee: Option<&BigUint>,
    ) -> &'a BigUint {
        self.inner.effective_gas_price(dst, base_fee)
    }

    /// Raw `(v, r, s)` of the outer layer.
    pub fn raw_signature_values(&self) -> (&BigUint, &BigUint, &BigUint) {
        self.inner.raw_signature_values()
    }

    /// Returns true if this is a contract creation.
    pub fn is_contract_creation(&self) -> bool {
        self.to().is_none()
    }

    /// Returns true if the signature is bound to a chain id.
    ///
    /// Only legacy transactions can be unprotected (v of 0, 1, 27 or 28).
    pub fn is_protected(&self) -> bool {
        match self.inner.as_ref() {
            TxInner::Legacy(tx) => tx
                .v
                .to_u64()
                .map_or(true, |v| !matches!(v, 0 | 1 | 27 | 28)),
            _ => true,
        }
    }

    /// Maximum amount the sender can be charged: `gas * fee_cap + value`,
    /// plus `blob_gas * blob_fee_cap` for blob transactions.
    pub fn cost(&self) -> BigUint {
        let mut total = self.gas_fee_cap() * BigUint::from(self.gas());
        if self.tx_type() == TxType::Blob {
            if let Some(blob_fee_cap) = self.blob_gas_fee_cap() {
                total += blob_fee_cap * BigUint::from(self.blob_gas());
            }
        }
        total += self.value();
        total
    }

    /// Miner tip per gas under `base_fee`.
    ///
    /// Fails if the fee cap does not cover the base fee.
    pub fn effective_gas_tip(&self, base_fee: Option<&BigUint>) -> Result<BigUint, TxError> {
        let Some(base_fee) = base_fee else {
            return Ok(self.gas_tip_cap().clone());
        };

        let gas_fee_cap = self.gas_fee_cap();
        if gas_fee_cap < base_fee {
            return Err(TxError::GasFeeCapTooLow);
        }

        let headroom = gas_fee_cap - base_fee;
        Ok(headroom.min(self.gas_tip_cap().clone()))
    }

    /// Returns a signed copy. `self` is left untouched.
    pub fn with_signature_values(
        &self,
        chain_id: BigUint,
        v: BigUint,
        r: BigUint,
        s: BigUint,
    ) -> Transaction {
        log::debug!("suave: signing {} transaction", self.tx_type());

        let mut inner = self.inner.copy();
        inner.set_signature_values(chain_id, v, r, s);
        Self {
            inner: Box::new(inner),
        }
    }

    /// Raw `(v, r, s)` of the given layer.
    pub fn raw_signature_values_at(
        &self,
        layer: SignatureLayer,
    ) -> Result<(&BigUint, &BigUint, &BigUint), TxError> {
        match layer {
            SignatureLayer::Outer => Ok(self.raw_signature_values()),
            SignatureLayer::Request => self
                .as_suave()
                .map(|envelope| envelope.confidential_compute_request.raw_signature_values())
                .ok_or(TxError::NotAnEnvelope),
        }
    }

    /// Returns a copy with the given layer signed.
    ///
    /// Signing the request layer leaves the envelope's own signature as is.
    pub fn with_signature_values_at(
        &self,
        layer: SignatureLayer,
        chain_id: BigUint,
        v: BigUint,
        r: BigUint,
        s: BigUint,
    ) -> Result<Transaction, TxError> {
        match layer {
            SignatureLayer::Outer => Ok(self.with_signature_values(chain_id, v, r, s)),
            SignatureLayer::Request => {
                let mut inner = self.inner.copy();
                let envelope = inner.as_suave_mut().ok_or(TxError::NotAnEnvelope)?;

                log::debug!("suave: signing wrapped request of envelope");
                envelope.confidential_compute_request = envelope
                    .confidential_compute_request
                    .with_signature_values(chain_id, v, r, s);

                Ok(Self {
                    inner: Box::new(inner),
                })
            }
        }
    }
}

impl Clone for Transaction {
    fn clone(&self) -> Self {
        Self {
            inner: Box::new(self.inner.copy()),
        }
    }
}

impl From<TxInner> for Transaction {
    fn from(inner: TxInner) -> Self {
        Transaction::new(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{BlobTx, DynamicFeeTx, LegacyTx};
    use alloc::vec;
    use num_traits::Zero;

    fn dynamic_fee() -> Transaction {
        Transaction::new(TxInner::DynamicFee(DynamicFeeTx {
            chain_id: BigUint::from(1u32),
            gas_tip_cap: BigUint::from(2u32),
            gas_fee_cap: BigUint::from(40u32),
            gas: 21000,
            value: BigUint::from(5u32),
            ..Default::default()
        }))
    }

    #[test]
    fn test_new_copies_payload() {
        let payload = TxInner::Legacy(LegacyTx {
            nonce: 1,
            ..Default::default()
        });
        let tx = Transaction::new(payload.copy());
        assert_eq!(tx.inner(), &payload);
        assert_eq!(tx.tx_type(), TxType::Legacy);
    }

    #[test]
    fn test_from_data() {
        let payload = LegacyTx {
            gas: 7,
            ..Default::default()
        };
        let tx = Transaction::from_data(&payload);
        assert_eq!(tx.gas(), 7);
    }

    #[test]
    fn test_contract_creation() {
        assert!(dynamic_fee().is_contract_creation());

        let call = Transaction::new(TxInner::Blob(BlobTx::default()));
        assert!(!call.is_contract_creation());
    }

    #[test]
    fn test_is_protected() {
        let unprotected = Transaction::new(TxInner::Legacy(LegacyTx {
            v: BigUint::from(27u32),
            ..Default::default()
        }));
        assert!(!unprotected.is_protected());

        let protected = Transaction::new(TxInner::Legacy(LegacyTx {
            v: BigUint::from(37u32),
            ..Default::default()
        }));
        assert!(protected.is_protected());
        assert!(dynamic_fee().is_protected());
    }

    #[test]
    fn test_cost() {
        // 21000 * 40 + 5
        assert_eq!(dynamic_fee().cost(), BigUint::from(840_005u32));

        let blob = Transaction::new(TxInner::Blob(BlobTx {
            gas_fee_cap: BigUint::from(1u32),
            gas: 100,
            blob_fee_cap: BigUint::from(2u32),
            blob_hashes: vec![[0x01; 32]],
            ..Default::default()
        }));
        assert_eq!(blob.cost(), BigUint::from(100u32 + 2 * 131072));
    }

    #[test]
    fn test_effective_gas_tip() {
        let tx = dynamic_fee();
        assert_eq!(tx.effective_gas_tip(None), Ok(BigUint::from(2u32)));
        assert_eq!(
            tx.effective_gas_tip(Some(&BigUint::from(39u32))),
            Ok(BigUint::from(1u32))
        );
        assert_eq!(
            tx.effective_gas_tip(Some(&BigUint::from(10u32))),
            Ok(BigUint::from(2u32))
        );
        assert_eq!(
            tx.effective_gas_tip(Some(&BigUint::from(41u32))),
            Err(TxError::GasFeeCapTooLow)
        );
    }

    #[test]
    fn test_with_signature_values_leaves_original() {
        let tx = dynamic_fee();
        let signed = tx.with_signature_values(
            BigUint::from(1u32),
            BigUint::from(1u32),
            BigUint::from(2u32),
            BigUint::from(3u32),
        );
        assert!(tx.raw_signature_values().1.is_zero());
        assert_eq!(signed.raw_signature_values().1, &BigUint::from(2u32));
    }

    #[test]
    fn test_request_layer_requires_envelope() {
        let tx = dynamic_fee();
        assert_eq!(
            tx.raw_signature_values_at(SignatureLayer::Request),
            Err(TxError::NotAnEnvelope)
        );
        assert!(matches!(
            tx.with_signature_values_at(
                SignatureLayer::Request,
                BigUint::zero(),
                BigUint::zero(),
                BigUint::zero(),
                BigUint::zero(),
            ),
            Err(TxError::NotAnEnvelope)
        ));
        assert!(tx.raw_signature_values_at(SignatureLayer::Outer).is_ok());
    }

    #[test]
    fn test_clone_is_deep() {
        let tx = dynamic_fee();
        let clone = tx.clone();
        assert_eq!(clone, tx);
        assert!(!core::ptr::eq(clone.inner(), tx.inner()));
    }
}
