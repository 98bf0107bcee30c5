// This file is part of arb-bindings.
//
// arb-bindings is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// arb-bindings is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with arb-bindings.
// If not, see https://www.gnu.org/licenses/.

use alloy_primitives::{Address, Bytes, TxKind, U256};
use alloy_rpc_types_eth::{BlockId, TransactionInput, TransactionRequest};

/// Transaction fields to set on a contract call instead of leaving them to the client.
///
/// Unset fields are filled by the client (or the node) at submission time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    /// Sender of the transaction
    pub from: Option<Address>,
    /// Value sent with the transaction
    pub value: Option<U256>,
    /// Gas limit
    pub gas_limit: Option<u64>,
    /// Legacy gas price
    pub gas_price: Option<u128>,
    /// EIP-1559 max fee per gas
    pub max_fee_per_gas: Option<u128>,
    /// EIP-1559 max priority fee per gas
    pub max_priority_fee_per_gas: Option<u128>,
    /// Nonce
    pub nonce: Option<u64>,
    /// Block to execute read-only calls and estimations against. Ignored on send.
    pub block: Option<BlockId>,
}

impl Overrides {
    /// Set the sender
    pub fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the value
    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the gas limit
    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Set the legacy gas price
    pub fn gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Set the EIP-1559 fee caps
    pub fn max_fees(mut self, max_fee_per_gas: u128, max_priority_fee_per_gas: u128) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    /// Set the nonce
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Set the block for read-only calls
    pub fn block(mut self, block: BlockId) -> Self {
        self.block = Some(block);
        self
    }

    /// Set every overridden field on `tx`, leaving the others as they are
    pub fn apply(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(from) = self.from {
            tx.from = Some(from);
        }
        if let Some(value) = self.value {
            tx.value = Some(value);
        }
        if let Some(gas_limit) = self.gas_limit {
            tx.gas = Some(gas_limit.into());
        }
        if let Some(gas_price) = self.gas_price {
            tx.gas_price = Some(gas_price);
        }
        if let Some(max_fee_per_gas) = self.max_fee_per_gas {
            tx.max_fee_per_gas = Some(max_fee_per_gas);
        }
        if let Some(max_priority_fee_per_gas) = self.max_priority_fee_per_gas {
            tx.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        }
        if let Some(nonce) = self.nonce {
            tx.nonce = Some(nonce);
        }
        tx
    }
}

/// A transaction to `kind` with `input`, sent from `default_sender` unless the overrides
/// name a sender
pub(crate) fn build_transaction(
    kind: TxKind,
    input: Bytes,
    overrides: &Overrides,
    default_sender: Option<Address>,
) -> TransactionRequest {
    overrides.apply(TransactionRequest {
        from: default_sender,
        to: Some(kind),
        input: TransactionInput::new(input),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use alloy_rpc_types_eth::BlockNumberOrTag;

    use super::*;

    #[test]
    fn test_build_transaction() {
        let to = Address::repeat_byte(0x11);
        let from = Address::repeat_byte(0x22);
        let overrides = Overrides::default()
            .from(from)
            .value(U256::from(5))
            .gas_limit(100_000)
            .nonce(7)
            .block(BlockNumberOrTag::Latest.into());

        let tx = build_transaction(
            TxKind::Call(to),
            Bytes::from_static(&[1, 2]),
            &overrides,
            Some(Address::repeat_byte(0x33)),
        );
        assert_eq!(tx.to, Some(TxKind::Call(to)));
        assert_eq!(tx.from, Some(from));
        assert_eq!(tx.value, Some(U256::from(5)));
        assert_eq!(tx.gas, Some(100_000));
        assert_eq!(tx.nonce, Some(7));
        assert_eq!(tx.input.input(), Some(&Bytes::from_static(&[1, 2])));
    }

    #[test]
    fn test_default_leaves_fields_unset() {
        let tx = build_transaction(TxKind::Create, Bytes::new(), &Overrides::default(), None);
        assert_eq!(tx.to, Some(TxKind::Create));
        assert!(tx.from.is_none());
        assert!(tx.gas.is_none());
        assert!(tx.nonce.is_none());
        assert!(tx.max_fee_per_gas.is_none());
    }

    #[test]
    fn test_default_sender() {
        let sender = Address::repeat_byte(0x44);
        let tx = build_transaction(TxKind::Create, Bytes::new(), &Overrides::default(), Some(sender));
        assert_eq!(tx.from, Some(sender));
    }

    #[test]
    fn test_fee_overrides() {
        let tx = build_transaction(
            TxKind::Create,
            Bytes::new(),
            &Overrides::default().gas_price(9).max_fees(20, 2),
            None,
        );
        assert_eq!(tx.gas_price, Some(9));
        assert_eq!(tx.max_fee_per_gas, Some(20));
        assert_eq!(tx.max_priority_fee_per_gas, Some(2));
    }
}
