//! EIP-4844 blob transactions.

use alloc::vec::Vec;

use num_bigint::BigUint;
use suave_common::{AccessList, Address, Hash256, TxType, BLOB_TX_BLOB_GAS_PER_BLOB};

use super::{dynamic_effective_gas_price, TxData, TxInner};

/// Fee market transaction referencing blobs by versioned hash.
///
/// Blob transactions cannot create contracts, so `to` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlobTx {
    pub chain_id: BigUint,
    pub nonce: u64,
    pub gas_tip_cap: BigUint,
    pub gas_fee_cap: BigUint,
    pub gas: u64,
    pub to: Address,
    pub value: BigUint,
    pub data: Vec<u8>,
    pub access_list: AccessList,
    /// Max fee per blob gas.
    pub blob_fee_cap: BigUint,
    pub blob_hashes: Vec<Hash256>,
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
}

impl TxData for BlobTx {
    fn tx_type(&self) -> TxType {
        TxType::Blob
    }

    fn copy(&self) -> TxInner {
        TxInner::Blob(BlobTx {
            chain_id: self.chain_id.clone(),
            nonce: self.nonce,
            gas_tip_cap: self.gas_tip_cap.clone(),
            gas_fee_cap: self.gas_fee_cap.clone(),
            gas: self.gas,
            to: self.to,
            value: self.value.clone(),
            data: self.data.clone(),
            access_list: self.access_list.clone(),
            blob_fee_cap: self.blob_fee_cap.clone(),
            blob_hashes: self.blob_hashes.clone(),
            v: self.v.clone(),
            r: self.r.clone(),
            s: self.s.clone(),
        })
    }

    fn chain_id(&self) -> BigUint {
        self.chain_id.clone()
    }

    fn access_list(&self) -> Option<&AccessList> {
        Some(&self.access_list)
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn gas(&self) -> u64 {
        self.gas
    }

    fn gas_price(&self) -> &BigUint {
        &self.gas_fee_cap
    }

    fn gas_tip_cap(&self) -> &BigUint {
        &self.gas_tip_cap
    }

    fn gas_fee_cap(&self) -> &BigUint {
        &self.gas_fee_cap
    }

    fn value(&self) -> &BigUint {
        &self.value
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn to(&self) -> Option<Address> {
        Some(self.to)
    }

    fn blob_gas(&self) -> u64 {
        BLOB_TX_BLOB_GAS_PER_BLOB * self.blob_hashes.len() as u64
    }

    fn blob_gas_fee_cap(&self) -> Option<&BigUint> {
        Some(&self.blob_fee_cap)
    }

    fn blob_hashes(&self) -> Option<&[Hash256]> {
        Some(&self.blob_hashes)
    }

    fn effective_gas_price<'a>(
        &self,
        dst: &'a mut BigUint,
        base_fee: Option<&BigUint>,
    ) -> &'a BigUint {
        dynamic_effective_gas_price(dst, &self.gas_tip_cap, &self.gas_fee_cap, base_fee)
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
