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

use alloy_primitives::TxKind;
use anyhow::Context;
use arb_contracts::ContractKind;
use arb_provider::{TransactionInput, TransactionRequest};
use clap::Args;

use super::TxArgs;

#[derive(Debug, Args)]
pub(super) struct ContractArgs {
    /// Contract name: Callback, Cloneable or INodeFactory
    contract: ContractKind,
}

pub(super) fn print_abi(args: ContractArgs) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(args.contract.abi())?);
    Ok(())
}

pub(super) fn print_signatures(args: ContractArgs) -> anyhow::Result<()> {
    for line in signatures(args.contract) {
        println!("{line}");
    }
    Ok(())
}

fn signatures(contract: ContractKind) -> Vec<String> {
    let abi = contract.abi();
    let mut lines = vec![];
    if let Some(constructor) = &abi.constructor {
        let inputs = constructor
            .inputs
            .iter()
            .map(|p| p.ty.as_str())
            .collect::<Vec<_>>()
            .join(",");
        lines.push(format!("constructor({inputs})"));
    }
    for function in abi.functions() {
        lines.push(format!("{} {}", function.selector(), function.signature()));
    }
    for event in abi.events() {
        lines.push(format!("{} event {}", event.selector(), event.signature()));
    }
    lines
}

pub(super) fn print_deploy_tx(args: ContractArgs, tx: &TxArgs) -> anyhow::Result<()> {
    let request = deploy_tx(args.contract, tx)?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn deploy_tx(contract: ContractKind, tx: &TxArgs) -> anyhow::Result<TransactionRequest> {
    let code = contract
        .deploy_code()
        .with_context(|| format!("{contract} has no embedded bytecode"))?;
    let request = TransactionRequest {
        to: Some(TxKind::Create),
        input: TransactionInput::new(code),
        ..Default::default()
    };
    Ok(tx.overrides().apply(request))
}
