//! Legacy (pre-EIP-2718) transactions.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use suave_common::{AccessList, Address, TxType};

use super::{copy_address, flat_effective_gas_price, TxData, TxInner};

/// Legacy transaction. The chain id is folded into `v` (EIP-155).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyTx {
    pub nonce: u64,
    pub gas_price: BigUint,
    pub gas: u64,
    /// Recipient (None for contract creation).
    pub to: Option<Address>,
    pub value: BigUint,
    pub data: Vec<u8>,
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
}

/// Extracts the chain id from an EIP-155 `v` value.
///
/// Pre-EIP-155 signatures (v = 27/28) and unsigned values carry no chain id.
pub(crate) fn derive_chain_id(v: &BigUint) -> BigUint {
    match v.to_u64() {
        Some(v) if v < 35 => BigUint::zero(),
        Some(v) => BigUint::from((v - 35) / 2),
        None => (v - 35u32) / 2u32,
    }
}

impl TxData for LegacyTx {
    fn tx_type(&self) -> TxType {
        TxType::Legacy
    }

    fn copy(&self) -> TxInner {
        TxInner::Legacy(LegacyTx {
            nonce: self.nonce,
            gas_price: self.gas_price.clone(),
            gas: self.gas,
            to: copy_address(self.to.as_ref()),
            value: self.value.clone(),
            data: self.data.clone(),
            v: self.v.clone(),
            r: self.r.clone(),
            s: self.s.clone(),
        })
    }

    fn chain_id(&self) -> BigUint {
        derive_chain_id(&self.v)
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

    /// The chain id is already encoded in `v`, so `_chain_id` is dropped.
    fn set_signature_values(&mut self, _chain_id: BigUint, v: BigUint, r: BigUint, s: BigUint) {
        self.v = v;
        self.r = r;
        self.s = s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_chain_id_from_eip155_v() {
        // v = chain_id * 2 + 35 + recovery_id
        assert_eq!(derive_chain_id(&BigUint::from(37u32)), BigUint::from(1u32));
        assert_eq!(derive_chain_id(&BigUint::from(38u32)), BigUint::from(1u32));
        assert_eq!(derive_chain_id(&BigUint::from(147u32)), BigUint::from(56u32));
    }

    #[test]
    fn test_chain_id_pre_eip155() {
        assert!(derive_chain_id(&BigUint::from(27u32)).is_zero());
        assert!(derive_chain_id(&BigUint::from(28u32)).is_zero());
        assert!(derive_chain_id(&BigUint::zero()).is_zero());
    }

    #[test]
    fn test_chain_id_beyond_u64() {
        // chain_id = 2^64 => v = 2^65 + 35
        let chain_id = BigUint::from(u64::MAX) + 1u32;
        let v = &chain_id * 2u32 + 35u32;
        assert_eq!(derive_chain_id(&v), chain_id);
    }

    #[test]
    fn test_set_signature_values_ignores_chain_id() {
        let mut tx = LegacyTx::default();
        tx.set_signature_values(
            BigUint::from(5u32),
            BigUint::from(37u32),
            BigUint::from(1u32),
            BigUint::from(2u32),
        );
        assert_eq!(tx.chain_id(), BigUint::from(1u32));
        assert_eq!(tx.raw_signature_values().1, &BigUint::from(1u32));
    }

    #[test]
    fn test_copy_is_independent() {
        let tx = LegacyTx {
            nonce: 3,
            gas_price: BigUint::from(20_000_000_000u64),
            gas: 21000,
            to: Some([0xde; 20]),
            value: BigUint::from(1u32),
            data: vec![0xab, 0xcd],
            ..Default::default()
        };

        let TxInner::Legacy(mut copy) = tx.copy() else {
            panic!("copy changed the variant");
        };
        assert_eq!(copy, tx);

        copy.gas_price += 1u32;
        copy.value += 1u32;
        copy.data.push(0xef);
        copy.to = None;

        assert_eq!(tx.gas_price, BigUint::from(20_000_000_000u64));
        assert_eq!(tx.value, BigUint::from(1u32));
        assert_eq!(tx.data, vec![0xab, 0xcd]);
        assert_eq!(tx.to, Some([0xde; 20]));
    }

    #[test]
    fn test_fee_caps_follow_gas_price() {
        let tx = LegacyTx {
            gas_price: BigUint::from(9u32),
            ..Default::default()
        };
        assert_eq!(tx.gas_tip_cap(), &BigUint::from(9u32));
        assert_eq!(tx.gas_fee_cap(), &BigUint::from(9u32));
        assert!(tx.access_list().is_none());
        assert_eq!(tx.blob_gas(), 0);
    }
}
