//! SUAVE result envelopes.
//!
//! A [`SuaveTransaction`] wraps a complete request transaction together
//! with the result an execution node computed for it. The envelope carries
//! its own signature, made by the execution node, which is independent of
//! the requester's signature inside the wrapped request.
//!
//! Accessor policy:
//! - `tx_type` is the envelope's own discriminant
//! - `data` is the computation result, not the request payload
//! - `chain_id`, `raw_signature_values` and `set_signature_values` use the
//!   envelope's own signature fields
//! - everything else is forwarded to the wrapped request
//!
//! The envelope does not check that its execution node matches the one
//! named inside the request.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Zero;
use suave_common::{AccessList, Address, Hash256, TxType};

use crate::transaction::Transaction;
use crate::variants::{TxData, TxInner};

/// Confidential compute result, signed by the execution node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuaveTransaction {
    /// Operator that produced the result.
    pub execution_node: Address,
    /// The complete request transaction, with the requester's signature.
    pub confidential_compute_request: Transaction,
    /// Off-chain computation output.
    pub confidential_compute_result: Vec<u8>,

    // Execution node's signature
    pub chain_id: BigUint,
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
}

impl SuaveTransaction {
    /// Creates an unsigned envelope around a copy of `request`.
    pub fn new(execution_node: Address, request: &Transaction, result: Vec<u8>) -> Self {
        log::debug!(
            "suave: wrapping {} request for execution node 0x{} ({} result bytes)",
            request.tx_type(),
            hex::encode(execution_node),
            result.len()
        );

        Self {
            execution_node,
            confidential_compute_request: Transaction::new(request.inner().copy()),
            confidential_compute_result: result,
            chain_id: BigUint::zero(),
            v: BigUint::zero(),
            r: BigUint::zero(),
            s: BigUint::zero(),
        }
    }

    /// Execution node named inside the wrapped request, if the request is a
    /// [`ConfidentialComputeRequest`](crate::ConfidentialComputeRequest).
    pub fn request_execution_node(&self) -> Option<Address> {
        self.confidential_compute_request
            .as_confidential_compute_request()
            .map(|request| request.execution_node)
    }

    /// Returns true once the execution node's signature has been attached.
    pub fn is_signed(&self) -> bool {
        !self.r.is_zero() || !self.s.is_zero()
    }

    fn request(&self) -> &TxInner {
        self.confidential_compute_request.inner()
    }
}

impl TxData for SuaveTransaction {
    fn tx_type(&self) -> TxType {
        TxType::Suave
    }

    fn copy(&self) -> TxInner {
        log::trace!("suave: copying envelope");

        TxInner::Suave(SuaveTransaction {
            execution_node: self.execution_node,
            confidential_compute_request: Transaction::new(self.request().copy()),
            confidential_compute_result: self.confidential_compute_result.clone(),
            chain_id: self.chain_id.clone(),
            v: self.v.clone(),
            r: self.r.clone(),
            s: self.s.clone(),
        })
    }

    fn chain_id(&self) -> BigUint {
        self.chain_id.clone()
    }

    fn data(&self) -> &[u8] {
        &self.confidential_compute_result
    }

    // Rest is carried over from the wrapped request

    fn access_list(&self) -> Option<&AccessList> {
        self.request().access_list()
    }

    fn gas(&self) -> u64 {
        self.request().gas()
    }

    fn gas_price(&self) -> &BigUint {
        self.request().gas_fee_cap()
    }

    fn gas_tip_cap(&self) -> &BigUint {
        self.request().gas_tip_cap()
    }

    fn gas_fee_cap(&self) -> &BigUint {
        self.request().gas_fee_cap()
    }

    fn value(&self) -> &BigUint {
        self.request().value()
    }

    fn nonce(&self) -> u64 {
        self.request().nonce()
    }

    fn to(&self) -> Option<Address> {
        self.request().to()
    }

    fn blob_gas(&self) -> u64 {
        self.request().blob_gas()
    }

    fn blob_gas_fee_cap(&self) -> Option<&BigUint> {
        self.request().blob_gas_fee_cap()
    }

    fn blob_hashes(&self) -> Option<&[Hash256]> {
        self.request().blob_hashes()
    }

    fn effective_gas_price<'a>(
        &self,
        dst: &'a mut BigUint,
        base_fee: Option<&BigUint>,
    ) -> &'a BigUint {
        self.request().effective_gas_price(dst, base_fee)
    }

    fn raw_signature_values(&self) -> (&BigUint, &BigUint, &BigUint) {
        (&self.v, &self.r, &self.s)
    }

    fn set_signature_values(&mut self, chain_id: BigUint, v: BigUint, r: BigUint, s: BigUint) {
        self.chain_id = chain_id;
        self.v = v;
        self.r = r;
        self.s = s;
    }
}
