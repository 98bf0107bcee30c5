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

use std::sync::Arc;

use alloy_primitives::Address;
use anyhow::{bail, Context};
use arb_contracts::ContractKind;
use arb_provider::{CloneableFactory, ContractClient};
use clap::Args;

use super::{CommonArgs, TxArgs};

#[derive(Debug, Args)]
pub(super) struct DeployArgs {
    /// Contract name, must have embedded bytecode
    contract: ContractKind,
}

pub(super) async fn deploy(
    args: DeployArgs,
    common: &CommonArgs,
    tx: &TxArgs,
) -> anyhow::Result<()> {
    if args.contract.bytecode().is_none() {
        bail!("{} has no embedded bytecode", args.contract);
    }

    let client = arb_provider::new_alloy_signing_contract_client(
        common.rpc_url()?,
        common.request_timeout_seconds,
        common.signer()?,
    )?;
    let address = deploy_with(args.contract, Arc::new(client), tx).await?;
    println!("{}", address.to_checksum(None));

    Ok(())
}

async fn deploy_with<C: ContractClient>(
    contract: ContractKind,
    client: Arc<C>,
    tx: &TxArgs,
) -> anyhow::Result<Address> {
    match contract {
        ContractKind::Cloneable => {
            let pending = CloneableFactory::new(client)
                .deploy(&(), &tx.overrides())
                .await
                .context("failed to send deployment")?;
            tracing::info!("deploying {contract}, transaction {:?}", pending.tx_hash());

            let handle = pending.deployed(tx.receipt_settings()).await?;
            handle
                .deployed()
                .await
                .with_context(|| format!("{contract} deployment left no code"))?;
            Ok(handle.address())
        }
        ContractKind::Callback | ContractKind::NodeFactory => {
            bail!("{contract} has no embedded bytecode")
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Bytes, TxKind, B256};
    use arb_contracts::cloneable::CLONEABLE_BYTECODE;
    use arb_provider::{MinedTransaction, MockContractClient};
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn tx_args() -> TxArgs {
        Cli::try_parse_from(["arb", "deploy", "cloneable", "--receipt_poll_interval_millis", "1"])
            .unwrap()
            .tx
    }

    #[tokio::test]
    async fn test_deploy_cloneable() {
        let created = Address::repeat_byte(0x42);

        let mut client = MockContractClient::unsigned();
        client
            .expect_send_transaction()
            .withf(|tx| {
                tx.to == Some(TxKind::Create) && tx.input.input() == Some(&CLONEABLE_BYTECODE)
            })
            .times(1)
            .returning(|_| Ok(B256::repeat_byte(1)));
        client
            .expect_get_transaction_receipt()
            .times(1)
            .returning(move |hash| {
                Ok(Some(MinedTransaction {
                    tx_hash: hash,
                    block_number: Some(3),
                    success: true,
                    contract_address: Some(created),
                    gas_used: 90_000,
                }))
            });
        client
            .expect_get_code()
            .withf(move |address, _| *address == created)
            .times(1)
            .returning(|_, _| Ok(Bytes::from_static(&[0x60, 0x80])));

        let address = deploy_with(ContractKind::Cloneable, Arc::new(client), &tx_args())
            .await
            .unwrap();
        assert_eq!(address, created);
    }

    #[tokio::test]
    async fn test_not_deployable() {
        let err = deploy_with(
            ContractKind::Callback,
            Arc::new(MockContractClient::unsigned()),
            &tx_args(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("no embedded bytecode"));
    }
}
