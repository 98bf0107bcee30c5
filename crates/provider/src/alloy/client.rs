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

use std::{fmt::Debug, marker::PhantomData};

use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::Provider as AlloyProvider;
use alloy_rpc_types_eth::{BlockId, Filter, Log, TransactionRequest};
use alloy_transport::Transport;

use crate::{ContractClient, MinedTransaction, ProviderResult};

/// Contract client implementation using [alloy-provider](https://github.com/alloy-rs/alloy)
pub struct AlloyContractClient<AP, T> {
    inner: AP,
    sender: Option<Address>,
    _marker: PhantomData<T>,
}

impl<AP, T> AlloyContractClient<AP, T> {
    /// Create a new `AlloyContractClient`
    pub fn new(inner: AP) -> Self {
        Self {
            inner,
            sender: None,
            _marker: PhantomData,
        }
    }

    /// Use `sender` as the sender of calls, estimations and transactions that set none
    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    /// The wrapped alloy provider
    pub fn inner(&self) -> &AP {
        &self.inner
    }
}

impl<AP: Clone, T> Clone for AlloyContractClient<AP, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            sender: self.sender,
            _marker: PhantomData,
        }
    }
}

impl<AP, T> Debug for AlloyContractClient<AP, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlloyContractClient")
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

impl<AP, T> From<AP> for AlloyContractClient<AP, T>
where
    T: Transport + Clone,
    AP: AlloyProvider<T>,
{
    fn from(inner: AP) -> Self {
        Self::new(inner)
    }
}

#[async_trait::async_trait]
impl<AP, T> ContractClient for AlloyContractClient<AP, T>
where
    T: Transport + Clone,
    AP: AlloyProvider<T>,
{
    fn default_sender(&self) -> Option<Address> {
        self.sender
    }

    async fn chain_id(&self) -> ProviderResult<u64> {
        Ok(self.inner.get_chain_id().await?)
    }

    async fn call(&self, tx: &TransactionRequest, block: Option<BlockId>) -> ProviderResult<Bytes> {
        let mut call = self.inner.call(tx);
        if let Some(block) = block {
            call = call.block(block);
        }

        Ok(call.await?)
    }

    async fn estimate_gas(
        &self,
        tx: &TransactionRequest,
        block: Option<BlockId>,
    ) -> ProviderResult<u128> {
        let mut call = self.inner.estimate_gas(tx);
        if let Some(block) = block {
            call = call.block(block);
        }

        Ok(call.await?.into())
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> ProviderResult<TxHash> {
        let pending = self.inner.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ProviderResult<Option<MinedTransaction>> {
        let receipt = self.inner.get_transaction_receipt(tx_hash).await?;
        Ok(receipt.map(|receipt| MinedTransaction {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            success: receipt.status(),
            contract_address: receipt.contract_address,
            gas_used: receipt.gas_used.into(),
        }))
    }

    async fn get_logs(&self, filter: &Filter) -> ProviderResult<Vec<Log>> {
        Ok(self.inner.get_logs(filter).await?)
    }

    async fn new_log_filter(&self, filter: &Filter) -> ProviderResult<U256> {
        Ok(self.inner.new_filter(filter).await?)
    }

    async fn get_filter_changes(&self, id: U256) -> ProviderResult<Vec<Log>> {
        Ok(self.inner.get_filter_changes::<Log>(id).await?)
    }

    async fn get_code(&self, address: Address, block: Option<BlockId>) -> ProviderResult<Bytes> {
        let mut call = self.inner.get_code_at(address);
        if let Some(block) = block {
            call = call.block_id(block);
        }

        Ok(call.await?)
    }
}
