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

//! Trait for the node access the contract handles delegate to.

use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_rpc_types_eth::{BlockId, Filter, Log, TransactionRequest};
#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::error::ProviderResult;

/// The parts of a transaction receipt the contract layer needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinedTransaction {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block the transaction was included in
    pub block_number: Option<u64>,
    /// Whether execution succeeded
    pub success: bool,
    /// Address of the created contract, for creation transactions
    pub contract_address: Option<Address>,
    /// Gas used by the transaction
    pub gas_used: u128,
}

/// Client that submits, simulates and estimates contract transactions.
///
/// Signing, nonce management and transport are the responsibility of the implementation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait::async_trait]
pub trait ContractClient: Send + Sync {
    /// Address transactions are sent from when no sender is given, the signer's address
    /// for signing clients
    fn default_sender(&self) -> Option<Address>;

    /// Get the chain id of the connected node
    async fn chain_id(&self) -> ProviderResult<u64>;

    /// Execute a read-only call via an eth_call
    async fn call(&self, tx: &TransactionRequest, block: Option<BlockId>) -> ProviderResult<Bytes>;

    /// Estimate the gas a transaction would use
    async fn estimate_gas(
        &self,
        tx: &TransactionRequest,
        block: Option<BlockId>,
    ) -> ProviderResult<u128>;

    /// Sign and submit a transaction, returning its hash once accepted by the node
    async fn send_transaction(&self, tx: TransactionRequest) -> ProviderResult<TxHash>;

    /// Get the receipt of a transaction, `None` while it is pending
    async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ProviderResult<Option<MinedTransaction>>;

    /// Get the logs matching a filter
    async fn get_logs(&self, filter: &Filter) -> ProviderResult<Vec<Log>>;

    /// Install a log filter on the node, returning its id
    async fn new_log_filter(&self, filter: &Filter) -> ProviderResult<U256>;

    /// Get the logs matching an installed filter since it was last polled
    async fn get_filter_changes(&self, id: U256) -> ProviderResult<Vec<Log>>;

    /// Get the code at an address
    async fn get_code(&self, address: Address, block: Option<BlockId>) -> ProviderResult<Bytes>;
}

#[cfg(any(test, feature = "test-utils"))]
impl MockContractClient {
    /// A mock without a default sender
    pub fn unsigned() -> Self {
        let mut client = Self::new();
        client.expect_default_sender().returning(|| None);
        client
    }

    /// A mock sending from `sender` by default
    pub fn signing(sender: Address) -> Self {
        let mut client = Self::new();
        client.expect_default_sender().returning(move || Some(sender));
        client
    }
}
