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

use std::time::Duration;

use alloy_network::EthereumWallet;
use alloy_provider::{Provider as AlloyProvider, ProviderBuilder};
use alloy_rpc_client::{ClientBuilder, RpcClient};
use alloy_signer_local::PrivateKeySigner;
use alloy_transport_http::Http;
use anyhow::Context;
use client::AlloyContractClient;
use provider_timeout::{ProviderTimeout, ProviderTimeoutLayer};
use reqwest::Client;
use url::Url;

pub(crate) mod client;
pub(crate) mod provider_timeout;

/// Create a new read-only alloy contract client from a given RPC URL
pub fn new_alloy_contract_client(
    rpc_url: &str,
    request_timeout_seconds: u64,
) -> anyhow::Result<
    AlloyContractClient<
        impl AlloyProvider<ProviderTimeout<Http<Client>>> + Clone,
        ProviderTimeout<Http<Client>>,
    >,
> {
    let provider = new_alloy_provider(rpc_url, request_timeout_seconds)?;
    Ok(AlloyContractClient::new(provider))
}

/// Create a new alloy contract client that signs transactions with `signer`.
///
/// Calls and estimations are made from the signer's address unless overridden.
pub fn new_alloy_signing_contract_client(
    rpc_url: &str,
    request_timeout_seconds: u64,
    signer: PrivateKeySigner,
) -> anyhow::Result<
    AlloyContractClient<
        impl AlloyProvider<ProviderTimeout<Http<Client>>> + Clone,
        ProviderTimeout<Http<Client>>,
    >,
> {
    let sender = signer.address();
    let provider = new_alloy_signing_provider(rpc_url, request_timeout_seconds, signer)?;
    Ok(AlloyContractClient::new(provider).with_sender(sender))
}

/// Create a new alloy provider from a given RPC URL
pub fn new_alloy_provider(
    rpc_url: &str,
    request_timeout_seconds: u64,
) -> anyhow::Result<impl AlloyProvider<ProviderTimeout<Http<Client>>> + Clone> {
    let client = new_rpc_client(rpc_url, request_timeout_seconds)?;
    Ok(ProviderBuilder::new().on_client(client))
}

/// Create a new alloy provider that fills nonce, gas and chain id and signs
/// transactions with the given key before submission
pub fn new_alloy_signing_provider(
    rpc_url: &str,
    request_timeout_seconds: u64,
    signer: PrivateKeySigner,
) -> anyhow::Result<impl AlloyProvider<ProviderTimeout<Http<Client>>> + Clone> {
    let client = new_rpc_client(rpc_url, request_timeout_seconds)?;
    Ok(ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_client(client))
}

fn new_rpc_client(
    rpc_url: &str,
    request_timeout_seconds: u64,
) -> anyhow::Result<RpcClient<ProviderTimeout<Http<Client>>>> {
    let url = Url::parse(rpc_url).context("invalid rpc url")?;
    let timeout_layer = ProviderTimeoutLayer::new(Duration::from_secs(request_timeout_seconds));
    Ok(ClientBuilder::default().layer(timeout_layer).http(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContractClient;

    #[test]
    fn test_invalid_url() {
        assert!(new_alloy_provider("not a url", 10).is_err());
        assert!(new_alloy_contract_client("", 10).is_err());
        assert!(new_alloy_signing_contract_client(
            "not a url",
            10,
            PrivateKeySigner::from_bytes(&alloy_primitives::B256::repeat_byte(1)).unwrap()
        )
        .is_err());
    }

    #[tokio::test]
    async fn test_valid_url() {
        // building the client does not touch the network
        let client = new_alloy_contract_client("http://localhost:8545", 10).unwrap();
        assert_eq!(client.default_sender(), None);
    }

    #[tokio::test]
    async fn test_signing_client_sends_from_signer() {
        let signer = PrivateKeySigner::from_bytes(&alloy_primitives::B256::repeat_byte(1)).unwrap();
        let address = signer.address();
        let client =
            new_alloy_signing_contract_client("http://localhost:8545", 10, signer).unwrap();
        assert_eq!(client.default_sender(), Some(address));
    }
}
