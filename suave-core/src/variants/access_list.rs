//! EIP-2930 access list transactions.

use alloc::vec::Vec;

use num_bigint::BigUint;
use suave_common::{AccessList, Address, TxType};

use super::{copy_address, flat_effective_gas_price, TxData, TxInner};

/// Flat gas price transaction carrying an access list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessListTx {
    pub chain_id: BigUint,
    pub nonce: u64,
    pub gas_price: BigUint,
    pub gas: u64,
    pub to: Option<Address>,
    pub value: BigUint,
    pub data: Vec<u8>,
    pub access_list: AccessList,
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
}

impl TxData for AccessListTx {
    fn tx_type(&self) -> TxType {
        TxType::AccessList
    }

    fn copy(&self) -> TxInner {
        TxInner::AccessList(AccessListTx {
            chain_id: self.chain_id.clone(),
            nonce: self.nonce,
            gas_price: self.gas_price.clone(),
            gas: self.gas,
            to: copy_address(self.to.as_ref()),
            value: self.value.clone(),
            data: self.data.clone(),
            access_list: self.access_list.clone(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use suave_common::AccessTuple;

    #[test]
    fn test_copy_deep_copies_access_list() {
        let tx = AccessListTx {
            chain_id: BigUint::from(1u32),
            access_list: AccessList::from(vec![AccessTuple {
                address: [0x11; 20],
                storage_keys: vec![[0x01; 32]],
            }]),
            ..Default::default()
        };

        let TxInner::AccessList(mut copy) = tx.copy() else {
            panic!("copy changed the variant");
        };
        copy.access_list.0[0].storage_keys.push([0x02; 32]);
        copy.chain_id += 1u32;

        assert_eq!(tx.access_list.storage_key_count(), 1);
        assert_eq!(tx.chain_id(), BigUint::from(1u32));
    }

    #[test]
    fn test_effective_gas_price_is_flat() {
        let tx = AccessListTx {
            gas_price: BigUint::from(100u32),
            ..Default::default()
        };
        let mut dst = BigUint::default();
        let base_fee = BigUint::from(9999u32);
        assert_eq!(
            tx.effective_gas_price(&mut dst, Some(&base_fee)),
            &BigUint::from(100u32)
        );
    }

    #[test]
    fn test_set_signature_values() {
        let mut tx = AccessListTx::default();
        tx.set_signature_values(
            BigUint::from(10u32),
            BigUint::from(1u32),
            BigUint::from(2u32),
            BigUint::from(3u32),
        );
        assert_eq!(tx.chain_id(), BigUint::from(10u32));
        assert_eq!(
            tx.raw_signature_values(),
            (
                &BigUint::from(1u32),
                &BigUint::from(2u32),
                &BigUint::from(3u32)
            )
        );
    }
}
