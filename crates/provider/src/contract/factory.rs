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

use std::{fmt::Debug, marker::PhantomData, sync::Arc};

use alloy_primitives::{Address, TxHash, TxKind};
use alloy_rpc_types_eth::TransactionRequest;
use anyhow::anyhow;
use arb_contracts::Deployable;

use super::{
    handle::ContractHandle,
    overrides::{build_transaction, Overrides},
    receipt::{wait_for_receipt, ReceiptSettings},
};
use crate::{ContractClient, ProviderResult};

/// Deploys `B` contracts from their embedded bytecode, and attaches to deployed ones.
pub struct ContractFactory<B, C> {
    client: Arc<C>,
    _binding: PhantomData<fn() -> B>,
}

impl<B: Deployable, C> ContractFactory<B, C> {
    /// Create a factory deploying through `client`
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            _binding: PhantomData,
        }
    }

    /// Client the factory deploys through
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// The same factory deploying through another client
    pub fn with_client<C2>(&self, client: Arc<C2>) -> ContractFactory<B, C2> {
        ContractFactory::new(client)
    }

    /// Handle to an already deployed contract, sharing the factory's client
    pub fn attach(&self, address: Address) -> ContractHandle<B, C> {
        ContractHandle::new(address, Arc::clone(&self.client))
    }

    /// Handle to an already deployed contract, without a factory
    pub fn connect(address: Address, client: Arc<C>) -> ContractHandle<B, C> {
        ContractHandle::new(address, client)
    }
}

impl<B: Deployable, C: ContractClient> ContractFactory<B, C> {
    /// The creation transaction, unsigned and unsent
    pub fn deploy_transaction(
        &self,
        args: &B::ConstructorArgs,
        overrides: &Overrides,
    ) -> TransactionRequest {
        build_transaction(
            TxKind::Create,
            B::deploy_code(args),
            overrides,
            self.client.default_sender(),
        )
    }

    /// Submit the creation transaction
    pub async fn deploy(
        &self,
        args: &B::ConstructorArgs,
        overrides: &Overrides,
    ) -> ProviderResult<PendingDeployment<B, C>> {
        let tx = self.deploy_transaction(args, overrides);
        let tx_hash = self.client.send_transaction(tx).await?;
        tracing::debug!("sent {} deployment: {tx_hash:?}", B::NAME);

        Ok(PendingDeployment {
            client: Arc::clone(&self.client),
            tx_hash,
            _binding: PhantomData,
        })
    }
}

impl<B, C> Clone for ContractFactory<B, C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _binding: PhantomData,
        }
    }
}

impl<B: Deployable, C> Debug for ContractFactory<B, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractFactory")
            .field("contract", &B::NAME)
            .finish_non_exhaustive()
    }
}

/// A submitted creation transaction
pub struct PendingDeployment<B, C> {
    client: Arc<C>,
    tx_hash: TxHash,
    _binding: PhantomData<fn() -> B>,
}

impl<B: Deployable, C: ContractClient> PendingDeployment<B, C> {
    /// Hash of the creation transaction
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Wait for the creation transaction to be mined and return a handle to the new contract
    pub async fn deployed(self, settings: ReceiptSettings) -> ProviderResult<ContractHandle<B, C>> {
        let receipt = wait_for_receipt(&*self.client, self.tx_hash, settings).await?;
        let address = receipt.contract_address.ok_or_else(|| {
            anyhow!(
                "receipt of creation transaction {:?} has no contract address",
                self.tx_hash
            )
        })?;
        tracing::debug!("deployed {} at {address:?}", B::NAME);

        Ok(ContractHandle::new(address, self.client))
    }
}

impl<B: Deployable, C> Debug for PendingDeployment<B, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingDeployment")
            .field("contract", &B::NAME)
            .field("tx_hash", &self.tx_hash)
            .finish_non_exhaustive()
    }
}
