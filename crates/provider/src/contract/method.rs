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

use std::fmt::Debug;

use alloy_primitives::{Address, Bytes, TxKind};
use alloy_rpc_types_eth::{BlockId, TransactionRequest};
use alloy_sol_types::SolCall;

use super::{
    overrides::{build_transaction, Overrides},
    receipt::PendingTransaction,
};
use crate::{ContractClient, ProviderResult};

/// A call to a contract function with compile time argument and return types.
///
/// `R` is the value [`ContractMethod::call`] resolves to, single return values are
/// unwrapped from the generated return struct.
pub struct ContractMethod<'a, C, SC: SolCall, R = <SC as SolCall>::Return> {
    client: &'a C,
    to: Address,
    call: SC,
    overrides: Overrides,
    map_return: fn(SC::Return) -> R,
}

impl<'a, C, SC: SolCall> ContractMethod<'a, C, SC, SC::Return> {
    pub(crate) fn new(client: &'a C, to: Address, call: SC) -> Self {
        Self::with_return(client, to, call, std::convert::identity)
    }
}

impl<'a, C, SC: SolCall, R> ContractMethod<'a, C, SC, R> {
    pub(crate) fn with_return(
        client: &'a C,
        to: Address,
        call: SC,
        map_return: fn(SC::Return) -> R,
    ) -> Self {
        Self {
            client,
            to,
            call,
            overrides: Overrides::default(),
            map_return,
        }
    }

    /// Replace the transaction overrides
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Execute read-only calls and estimations at `block`
    pub fn block(mut self, block: BlockId) -> Self {
        self.overrides.block = Some(block);
        self
    }

    /// Call arguments
    pub fn call_args(&self) -> &SC {
        &self.call
    }

    /// ABI encoded calldata, selector included
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }
}

impl<'a, C: ContractClient, SC: SolCall, R> ContractMethod<'a, C, SC, R> {
    /// Build the transaction without signing or sending it
    pub fn populate_transaction(&self) -> TransactionRequest {
        build_transaction(
            TxKind::Call(self.to),
            self.calldata(),
            &self.overrides,
            self.client.default_sender(),
        )
    }

    /// Execute the function without a transaction and decode its return values
    pub async fn call(&self) -> ProviderResult<R> {
        let tx = self.populate_transaction();
        let data = self.client.call(&tx, self.overrides.block).await?;
        let ret = SC::abi_decode_returns(&data, true)?;
        Ok((self.map_return)(ret))
    }

    /// Estimate the gas a transaction to this function would use
    pub async fn estimate_gas(&self) -> ProviderResult<u128> {
        let tx = self.populate_transaction();
        self.client.estimate_gas(&tx, self.overrides.block).await
    }

    /// Submit a transaction to this function
    pub async fn send(&self) -> ProviderResult<PendingTransaction<'a, C>> {
        let tx = self.populate_transaction();
        let tx_hash = self.client.send_transaction(tx).await?;
        tracing::debug!("sent {} to {:?}: {tx_hash:?}", SC::SIGNATURE, self.to);
        Ok(PendingTransaction::new(self.client, tx_hash))
    }
}

impl<C, SC: SolCall, R> Debug for ContractMethod<'_, C, SC, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractMethod")
            .field("to", &self.to)
            .field("function", &SC::SIGNATURE)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}
