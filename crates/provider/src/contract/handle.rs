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

use std::{fmt::Debug, marker::PhantomData, pin::Pin, sync::Arc, time::Duration};

use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::{Function, JsonAbi};
use alloy_primitives::Address;
use alloy_rpc_types_eth::Log;
use alloy_sol_types::{SolCall, SolEvent};
use arb_contracts::ContractSpec;
use async_stream::stream;
use futures_util::Stream;
use tokio::time;

use super::{dynamic::DynContractMethod, events::EventFilter, method::ContractMethod};
use crate::{ContractClient, ProviderError, ProviderResult};

/// Decoded events with their logs, as they are emitted
pub type EventStream<E> = Pin<Box<dyn Stream<Item = ProviderResult<(E, Log)>> + Send>>;

/// A contract at a fixed address, called through a client.
///
/// `B` is the binding providing the ABI. Typed methods for each binding are defined on
/// `ContractHandle<Binding, C>`, every function is also reachable by name or signature
/// through [`ContractHandle::method`].
pub struct ContractHandle<B, C> {
    address: Address,
    client: Arc<C>,
    _binding: PhantomData<fn() -> B>,
}

impl<B: ContractSpec, C> ContractHandle<B, C> {
    /// Bind `address` to `client`. Does not check that code exists at `address`.
    pub fn new(address: Address, client: Arc<C>) -> Self {
        Self {
            address,
            client,
            _binding: PhantomData,
        }
    }

    /// Contract address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Client the handle calls through
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// The contract ABI
    pub fn abi(&self) -> &'static JsonAbi {
        B::abi()
    }

    /// A handle to another contract with the same ABI, sharing this handle's client
    pub fn attach(&self, address: Address) -> Self {
        Self::new(address, Arc::clone(&self.client))
    }

    /// A handle to the same contract through another client. This handle is unaffected.
    pub fn connect<C2>(&self, client: Arc<C2>) -> ContractHandle<B, C2> {
        ContractHandle::new(self.address, client)
    }

    /// Look up a function by canonical signature, `name(type1,type2)`, or by name if the
    /// name is not overloaded
    pub fn function(&self, name_or_signature: &str) -> ProviderResult<&'static Function> {
        let abi = B::abi();
        let key: String = name_or_signature
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if key.contains('(') {
            return abi
                .functions()
                .find(|f| f.signature() == key)
                .ok_or(ProviderError::UnknownFunction(key, B::NAME));
        }

        match abi.function(&key).map(Vec::as_slice) {
            Some([function]) => Ok(function),
            Some([]) | None => Err(ProviderError::UnknownFunction(key, B::NAME)),
            Some(_) => Err(ProviderError::AmbiguousFunction(key, B::NAME)),
        }
    }

    /// Build a call to a function looked up by name or signature with ABI checked arguments
    pub fn method(
        &self,
        name_or_signature: &str,
        args: &[DynSolValue],
    ) -> ProviderResult<DynContractMethod<'_, C>> {
        let function = self.function(name_or_signature)?;
        DynContractMethod::new(&*self.client, self.address, function, args)
    }

    /// Build a call from a `sol!` call type. Resolves to the full return struct.
    pub fn method_call<SC: SolCall>(&self, call: SC) -> ContractMethod<'_, C, SC> {
        ContractMethod::new(&*self.client, self.address, call)
    }

    pub(crate) fn typed<SC: SolCall, R>(
        &self,
        call: SC,
        map_return: fn(SC::Return) -> R,
    ) -> ContractMethod<'_, C, SC, R> {
        ContractMethod::with_return(&*self.client, self.address, call, map_return)
    }

    /// A filter matching every `E` log emitted by this contract
    pub fn event_filter<E: SolEvent>(&self) -> EventFilter<E> {
        EventFilter::new(self.address)
    }
}

impl<B: ContractSpec, C: ContractClient> ContractHandle<B, C> {
    /// Check that code exists at the contract address
    pub async fn deployed(&self) -> ProviderResult<()> {
        let code = self.client.get_code(self.address, None).await?;
        if code.is_empty() {
            return Err(ProviderError::NotDeployed(self.address));
        }
        Ok(())
    }

    /// Fetch and decode the logs matching `filter`
    pub async fn query_events<E: SolEvent>(
        &self,
        filter: &EventFilter<E>,
    ) -> ProviderResult<Vec<(E, Log)>> {
        let logs = self.client.get_logs(&filter.filter()).await?;
        logs.into_iter()
            .filter(|log| filter.matches(log))
            .map(|log| Ok((filter.decode(&log)?, log)))
            .collect()
    }
}

impl<B: ContractSpec, C: ContractClient + 'static> ContractHandle<B, C> {
    /// Install `filter` on the node and stream its events as new blocks emit them, polling
    /// every `poll_interval`.
    ///
    /// Logs removed by a reorg are skipped. The stream ends after yielding the first error.
    pub async fn watch_events<E: SolEvent + Send + 'static>(
        &self,
        filter: &EventFilter<E>,
        poll_interval: Duration,
    ) -> ProviderResult<EventStream<E>> {
        let id = self.client.new_log_filter(&filter.filter()).await?;
        tracing::debug!("watching {} logs of {:?} with filter {id}", E::SIGNATURE, self.address);

        let client = Arc::clone(&self.client);
        let filter = filter.clone();
        Ok(Box::pin(stream! {
            loop {
                match client.get_filter_changes(id).await {
                    Ok(logs) => {
                        for log in logs {
                            if log.removed || !filter.matches(&log) {
                                continue;
                            }
                            yield filter.decode(&log).map(|event| (event, log));
                        }
                    }
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                }
                time::sleep(poll_interval).await;
            }
        }))
    }
}

impl<B, C> Clone for ContractHandle<B, C> {
    fn clone(&self) -> Self {
        Self {
            address: self.address,
            client: Arc::clone(&self.client),
            _binding: PhantomData,
        }
    }
}

impl<B: ContractSpec, C> Debug for ContractHandle<B, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractHandle")
            .field("contract", &B::NAME)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
