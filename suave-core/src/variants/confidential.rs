//! Confidential compute requests.
//!
//! A request is signed once by its originator and names the execution node
//! that must service it. The node later answers with a
//! [`SuaveTransaction`](crate::SuaveTransaction) wrapping a copy of the
//! request.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Zero;
use suave_common::{AccessList, Address, TxType};

use super::{copy_address, flat_effective_gas_price, TxData, TxInner};

/// Request for off-chain confidential computation, signed by the requester.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidentialComputeRequest {
    pub nonce: u64,
    pub gas_price: BigUint,
    pub gas: u64,
    /// Recipient. Encoded as nilable: `None` means contract creation.
    pub to: Option<Address>,
    pub value: BigUint,
    /// Confidential compute request payload.
    pub data: Vec<u8>,

    /// Operator that must service this request.
    pub execution_node: Address,

    pub chain_id: BigUint,
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
}

impl ConfidentialComputeRequest {
    /// Returns true once a requester signature has been attached.
    pub fn is_signed(&self) -> bool {
        !self.r.is_zero() || !self.s.is_zero()
    }
}

impl TxData for ConfidentialComputeRequest {
    fn tx_type(&self) -> TxType {
        TxType::ConfidentialComputeRequest
    }

    fn copy(&self) -> TxInner {
        TxInner::ConfidentialComputeRequest(ConfidentialComputeRequest {
            nonce: self.nonce,
            to: copy_address(self.to.as_ref()),
            data: self.data.clone(),
            gas: self.gas,
            execution_node: self.execution_node,

            value: self.value.clone(),
            gas_price: self.gas_price.clone(),

            chain_id: self.chain_id.clone(),
            v: self.v.clone(),
            r: self.r.clone(),
            s: self.s.clone(),
        })
    }

    fn chain_id(&self) -> BigUint {
        self.chain_id.clone()
    }

    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn gas(&self) -> u64 {
        self.gas
    }

    fn gas_price(&self) -> &BigUint {
        &self.gas_price
    }

    fn gas_tip_cap(&self) -> &BigUint {
        &self.gas_price
    }

    fn gas_fee_cap(&self) -> &BigUint {
        &self.gas_price
    }

    fn value(&self) -> &BigUint {
        &self.value
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn to(&self) -> Option<Address> {
        self.to
    }

    fn effective_gas_price<'a>(
        &self,
        dst: &'a mut BigUint,
        _base_fee: Option<&BigUint>,
    ) -> &'a BigUint {
        flat_effective_gas_price(dst, &self.gas_price)
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
