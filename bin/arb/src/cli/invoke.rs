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
use anyhow::Context;
use arb_contracts::{ContractKind, ContractSpec};
use arb_provider::{
    CallbackContract, CloneableContract, ContractClient, ContractHandle, NodeFactoryContract,
};
use clap::{Args, ValueEnum};

use super::{values, CommonArgs, TxArgs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(super) enum Mode {
    /// Execute without a transaction and print the return values
    Call,
    /// Sign and submit a transaction
    Send,
    /// Print the gas estimate
    Estimate,
    /// Print the transaction without sending it
    Populate,
}

#[derive(Debug, Args)]
pub(super) struct InvokeArgs {
    /// Contract name: Callback, Cloneable or INodeFactory
    pub(super) contract: ContractKind,

    /// Contract address
    pub(super) address: Address,

    /// Function name, or its full signature if the name is overloaded
    pub(super) function: String,

    /// Function arguments, one per input. Arguments starting with `-` go after `--`.
    #[arg(allow_negative_numbers = true)]
    pub(super) args: Vec<String>,

    /// What to do with the function call
    #[arg(long = "mode", value_enum, default_value_t = Mode::Call)]
    pub(super) mode: Mode,

    /// Wait for the receipt of a sent transaction
    #[arg(long = "wait")]
    pub(super) wait: bool,
}

pub(super) async fn invoke(
    args: InvokeArgs,
    common: &CommonArgs,
    tx: &TxArgs,
) -> anyhow::Result<()> {
    let rpc_url = common.rpc_url()?;
    let signer = if args.mode == Mode::Send {
        Some(common.signer()?)
    } else {
        common.optional_signer()?
    };

    // calls and estimations are made from the signer's address when a key is given
    let lines = match signer {
        Some(signer) => {
            let client = arb_provider::new_alloy_signing_contract_client(
                rpc_url,
                common.request_timeout_seconds,
                signer,
            )?;
            invoke_with(&args, Arc::new(client), tx).await?
        }
        None => {
            let client =
                arb_provider::new_alloy_contract_client(rpc_url, common.request_timeout_seconds)?;
            invoke_with(&args, Arc::new(client), tx).await?
        }
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

async fn invoke_with<C: ContractClient>(
    args: &InvokeArgs,
    client: Arc<C>,
    tx: &TxArgs,
) -> anyhow::Result<Vec<String>> {
    match args.contract {
        ContractKind::Callback => {
            invoke_on(&CallbackContract::new(args.address, client), args, tx).await
        }
        ContractKind::Cloneable => {
            invoke_on(&CloneableContract::new(args.address, client), args, tx).await
        }
        ContractKind::NodeFactory => {
            invoke_on(&NodeFactoryContract::new(args.address, client), args, tx).await
        }
    }
}

async fn invoke_on<B: ContractSpec, C: ContractClient>(
    handle: &ContractHandle<B, C>,
    args: &InvokeArgs,
    tx: &TxArgs,
) -> anyhow::Result<Vec<String>> {
    let function = handle.function(&args.function)?;
    let values = values::parse_args(function, &args.args)?;
    let method = handle
        .method(&args.function, &values)?
        .overrides(tx.overrides());

    let lines = match args.mode {
        Mode::Call => {
            let outputs = method
                .call()
                .await
                .with_context(|| format!("call to {} failed", function.signature()))?;
            function
                .outputs
                .iter()
                .zip(&outputs)
                .map(|(param, value)| {
                    if param.name.is_empty() {
                        values::format_value(value)
                    } else {
                        format!("{}: {}", param.name, values::format_value(value))
                    }
                })
                .collect()
        }
        Mode::Estimate => {
            let gas = method
                .estimate_gas()
                .await
                .with_context(|| format!("gas estimation of {} failed", function.signature()))?;
            vec![gas.to_string()]
        }
        Mode::Populate => vec![serde_json::to_string_pretty(&method.populate_transaction())?],
        Mode::Send => {
            let pending = method
                .send()
                .await
                .with_context(|| format!("sending {} failed", function.signature()))?;
            tracing::info!("sent {} to {:?}", function.signature(), handle.address());

            let mut lines = vec![format!("transaction: {:?}", pending.tx_hash())];
            if args.wait {
                let receipt = pending.get_receipt(tx.receipt_settings()).await?;
                lines.push(format!(
                    "mined in block {}, gas used {}",
                    receipt
                        .block_number
                        .map_or_else(|| "unknown".to_string(), |b| b.to_string()),
                    receipt.gas_used
                ));
            }
            lines
        }
    };

    Ok(lines)
}
