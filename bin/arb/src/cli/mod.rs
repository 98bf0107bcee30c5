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

use std::{str::FromStr, time::Duration};

use alloy_primitives::U256;
use alloy_signer_local::PrivateKeySigner;
use anyhow::Context;
use arb_provider::{BlockNumberOrTag, Overrides, ReceiptSettings};
use clap::{Args, Parser, Subcommand};

mod abi;
mod deploy;
mod events;
mod invoke;
mod tracing;
mod values;

/// Main entry point for the CLI
///
/// Parses the CLI arguments and runs the subcommand.
pub async fn run() -> anyhow::Result<()> {
    let opt = Cli::parse();
    let _guard = tracing::configure_logging(&opt.logs)?;
    tracing::debug!("Parsed CLI options: {:#?}", opt);

    match opt.command {
        Command::Abi(args) => abi::print_abi(args)?,
        Command::Signatures(args) => abi::print_signatures(args)?,
        Command::DeployTx(args) => abi::print_deploy_tx(args, &opt.tx)?,
        Command::Invoke(args) => invoke::invoke(args, &opt.common, &opt.tx).await?,
        Command::Deploy(args) => deploy::deploy(args, &opt.common, &opt.tx).await?,
        Command::Events(args) => events::query_events(args, &opt.common).await?,
    }

    Ok(())
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the embedded JSON ABI of a contract
    #[command(name = "abi")]
    Abi(abi::ContractArgs),
    /// List the functions and events of a contract with their selectors
    #[command(name = "signatures")]
    Signatures(abi::ContractArgs),
    /// Print the creation transaction of a deployable contract without sending it
    #[command(name = "deploy-tx")]
    DeployTx(abi::ContractArgs),
    /// Call, send, estimate or populate a contract function
    #[command(name = "invoke")]
    Invoke(invoke::InvokeArgs),
    /// Deploy a contract from its embedded bytecode and wait for its address
    #[command(name = "deploy")]
    Deploy(deploy::DeployArgs),
    /// Query `DummyEvent` logs of a `Callback` contract
    #[command(name = "events")]
    Events(events::EventsArgs),
}

/// Node connection and signer options
#[derive(Debug, Args)]
#[command(next_help_heading = "Node")]
pub struct CommonArgs {
    /// Node JSON-RPC endpoint
    #[arg(long = "rpc_url", name = "rpc_url", env = "RPC_URL", global = true)]
    rpc_url: Option<String>,

    /// Client side timeout of a single RPC request
    #[arg(
        long = "request_timeout_seconds",
        name = "request_timeout_seconds",
        env = "REQUEST_TIMEOUT_SECONDS",
        default_value = "10",
        global = true
    )]
    request_timeout_seconds: u64,

    /// Hex encoded private key signing sent transactions
    #[arg(
        long = "private_key",
        name = "private_key",
        env = "PRIVATE_KEY",
        hide_env_values = true,
        global = true
    )]
    private_key: Option<String>,
}

impl CommonArgs {
    fn rpc_url(&self) -> anyhow::Result<&str> {
        self.rpc_url.as_deref().context("must provide rpc_url")
    }

    fn signer(&self) -> anyhow::Result<PrivateKeySigner> {
        self.optional_signer()?
            .context("must provide private_key to send transactions")
    }

    fn optional_signer(&self) -> anyhow::Result<Option<PrivateKeySigner>> {
        self.private_key
            .as_deref()
            .map(|key| PrivateKeySigner::from_str(key).context("invalid private_key"))
            .transpose()
    }
}

/// Transaction options
#[derive(Debug, Args)]
#[command(next_help_heading = "Transaction")]
pub struct TxArgs {
    /// Sender address for calls and estimations, defaults to the private_key address
    #[arg(long = "from", name = "from", global = true)]
    from: Option<alloy_primitives::Address>,

    /// Value in wei sent with the transaction
    #[arg(long = "value", name = "value", global = true)]
    value: Option<U256>,

    /// Gas limit
    #[arg(long = "gas_limit", name = "gas_limit", global = true)]
    gas_limit: Option<u64>,

    /// Legacy gas price in wei
    #[arg(long = "gas_price", name = "gas_price", global = true)]
    gas_price: Option<u128>,

    /// Max fee per gas in wei
    #[arg(long = "max_fee_per_gas", name = "max_fee_per_gas", global = true)]
    max_fee_per_gas: Option<u128>,

    /// Max priority fee per gas in wei
    #[arg(
        long = "max_priority_fee_per_gas",
        name = "max_priority_fee_per_gas",
        global = true
    )]
    max_priority_fee_per_gas: Option<u128>,

    /// Nonce
    #[arg(long = "nonce", name = "nonce", global = true)]
    nonce: Option<u64>,

    /// Block number or tag for calls and estimations
    #[arg(long = "block", name = "block", value_parser = parse_block, global = true)]
    block: Option<BlockNumberOrTag>,

    /// Delay between receipt polls
    #[arg(
        long = "receipt_poll_interval_millis",
        name = "receipt_poll_interval_millis",
        default_value = "1000",
        global = true
    )]
    receipt_poll_interval_millis: u64,

    /// Give up waiting for a receipt after this long
    #[arg(
        long = "receipt_timeout_seconds",
        name = "receipt_timeout_seconds",
        default_value = "120",
        global = true
    )]
    receipt_timeout_seconds: u64,
}

impl TxArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            from: self.from,
            value: self.value,
            gas_limit: self.gas_limit,
            gas_price: self.gas_price,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            nonce: self.nonce,
            block: self.block.map(Into::into),
        }
    }

    fn receipt_settings(&self) -> ReceiptSettings {
        ReceiptSettings {
            poll_interval: Duration::from_millis(self.receipt_poll_interval_millis),
            timeout: Duration::from_secs(self.receipt_timeout_seconds),
        }
    }
}

/// Parse a decimal or hex block number, or a block tag
pub(crate) fn parse_block(s: &str) -> Result<BlockNumberOrTag, String> {
    match s.parse::<u64>() {
        Ok(number) => Ok(BlockNumberOrTag::Number(number)),
        Err(_) => BlockNumberOrTag::from_str(s).map_err(|e| format!("invalid block {s}: {e}")),
    }
}

/// CLI options for logging
#[derive(Debug, Args)]
#[command(next_help_heading = "Logging")]
pub struct LogsArgs {
    /// Log file
    ///
    /// If not provided, logs will be written to stderr
    #[arg(
        long = "log.file",
        name = "log.file",
        env = "LOG_FILE",
        default_value = None,
        global = true
    )]
    file: Option<String>,

    /// Log JSON
    ///
    /// If set, logs will be written in JSON format
    #[arg(
        long = "log.json",
        name = "log.json",
        env = "LOG_JSON",
        required = false,
        num_args = 0,
        global = true
    )]
    json: bool,

    /// Increase log verbosity, repeat for more. `RUST_LOG` takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// CLI options
#[derive(Debug, Parser)]
#[command(name = "arb", version)]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    common: CommonArgs,

    #[clap(flatten)]
    tx: TxArgs,

    #[clap(flatten)]
    logs: LogsArgs,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tx_args() {
        let opt = Cli::try_parse_from([
            "arb",
            "invoke",
            "callback",
            "0x1111111111111111111111111111111111111111",
            "doCallback",
            "--gas_limit",
            "50000",
            "--value",
            "7",
            "--block",
            "latest",
            "--receipt_timeout_seconds",
            "5",
        ])
        .unwrap();

        let overrides = opt.tx.overrides();
        assert_eq!(overrides.gas_limit, Some(50_000));
        assert_eq!(overrides.value, Some(U256::from(7)));
        assert_eq!(overrides.block, Some(BlockNumberOrTag::Latest.into()));
        assert!(overrides.from.is_none());
        assert_eq!(opt.tx.receipt_settings().timeout, Duration::from_secs(5));
        assert_eq!(
            opt.tx.receipt_settings().poll_interval,
            Duration::from_secs(1)
        );
        assert_eq!(opt.common.request_timeout_seconds, 10);

        let Command::Invoke(args) = opt.command else {
            panic!("expected invoke");
        };
        assert_eq!(args.address, Address::repeat_byte(0x11));
    }

    #[test]
    fn test_signer() {
        let mut common = CommonArgs {
            rpc_url: None,
            request_timeout_seconds: 10,
            private_key: None,
        };
        assert!(common.rpc_url().is_err());
        assert!(common.signer().is_err());
        assert!(common.optional_signer().unwrap().is_none());

        common.private_key = Some("not a key".to_string());
        assert!(common.signer().is_err());
        assert!(common.optional_signer().is_err());

        common.private_key =
            Some("0x0101010101010101010101010101010101010101010101010101010101010101".to_string());
        assert!(common.signer().is_ok());
        assert!(common.optional_signer().unwrap().is_some());
    }

    #[test]
    fn test_parse_block() {
        assert_eq!(parse_block("12"), Ok(BlockNumberOrTag::Number(12)));
        assert_eq!(parse_block("0xc"), Ok(BlockNumberOrTag::Number(12)));
        assert_eq!(parse_block("latest"), Ok(BlockNumberOrTag::Latest));
        assert_eq!(parse_block("finalized"), Ok(BlockNumberOrTag::Finalized));
        assert!(parse_block("yesterday").is_err());
    }

    #[test]
    fn test_decimal_block_and_gas_price() {
        let opt = Cli::try_parse_from([
            "arb",
            "invoke",
            "cloneable",
            "0x1111111111111111111111111111111111111111",
            "isMaster",
            "--block",
            "12",
            "--gas_price",
            "1000",
        ])
        .unwrap();

        let overrides = opt.tx.overrides();
        assert_eq!(overrides.block, Some(BlockNumberOrTag::Number(12).into()));
        assert_eq!(overrides.gas_price, Some(1000));
    }
}
