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

use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::Function;
use alloy_primitives::{Address, Bytes, TxKind};
use alloy_rpc_types_eth::{BlockId, TransactionRequest};

use super::{
    overrides::{build_transaction, Overrides},
    receipt::PendingTransaction,
};
use crate::{ContractClient, ProviderResult};

/// A call to a contract function looked up by name or signature, with arguments and
/// return values checked against the ABI at runtime.
#[derive(Debug)]
pub struct DynContractMethod<'a, C> {
    client: &'a C,
    to: Address,
    function: &'static Function,
    calldata: Bytes,
    overrides: Overrides,
}

impl<'a, C> DynContractMethod<'a, C> {
    pub(crate) fn new(
        client: &'a C,
        to: Address,
        function: &'static Function,
        args: &[DynSolValue],
    ) -> ProviderResult<Self> {
        let calldata = function.abi_encode_input(args)?;
        Ok(Self {
            client,
            to,
            function,
            calldata: calldata.into(),
            overrides: Overrides::default(),
        })
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

    /// ABI entry of the function
    pub fn function(&self) -> &'static Function {
        self.function
    }

    /// ABI encoded calldata, selector included
    pub fn calldata(&self) -> &Bytes {
        &self.calldata
    }
}

impl<'a, C: ContractClient> DynContractMethod<'a, C> {
    /// Build the transaction without signing or sending it
    pub fn populate_transaction(&self) -> TransactionRequest {
        build_transaction(
            TxKind::Call(self.to),
            self.calldata.clone(),
            &self.overrides,
            self.client.default_sender(),
        )
    }

    /// Execute the function without a transaction and decode its return values, one per output
    pub async fn call(&self) -> ProviderResult<Vec<DynSolValue>> {
        let tx = self.populate_transaction();
        let data = self.client.call(&tx, self.overrides.block).await?;
        Ok(self.function.abi_decode_output(&data, true)?)
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
        tracing::debug!(
            "sent {} to {:?}: {tx_hash:?}",
            self.function.signature(),
            self.to
        );
        Ok(PendingTransaction::new(self.client, tx_hash))
    }
}
