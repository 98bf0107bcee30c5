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

use std::{sync::Arc, time::Duration};

use alloy_primitives::{Address, U256};
use arb_contracts::callback::ICallback::DummyEvent;
use arb_provider::{BlockNumberOrTag, CallbackContract, ContractClient, Log};
use clap::Args;
use futures_util::StreamExt;

use super::{parse_block, CommonArgs};

#[derive(Debug, Args)]
pub(super) struct EventsArgs {
    /// Address of the `Callback` contract
    address: Address,

    /// Only events with this indexed `a`
    #[arg(long = "a", name = "a")]
    a: Option<U256>,

    /// First block to search
    #[arg(long = "from_block", name = "from_block", value_parser = parse_block)]
    from_block: Option<BlockNumberOrTag>,

    /// Last block to search
    #[arg(long = "to_block", name = "to_block", value_parser = parse_block)]
    to_block: Option<BlockNumberOrTag>,

    /// Keep printing new events as they are emitted instead of querying once
    #[arg(long = "watch", name = "watch")]
    watch: bool,

    /// Delay between polls for new events when watching
    #[arg(
        long = "poll_interval_millis",
        name = "poll_interval_millis",
        default_value = "1000"
    )]
    poll_interval_millis: u64,
}

pub(super) async fn query_events(args: EventsArgs, common: &CommonArgs) -> anyhow::Result<()> {
    let client = Arc::new(arb_provider::new_alloy_contract_client(
        common.rpc_url()?,
        common.request_timeout_seconds,
    )?);
    if args.watch {
        return watch_with(&args, client, |line| println!("{line}")).await;
    }

    for line in query_with(&args, client).await? {
        println!("{line}");
    }
    Ok(())
}

async fn watch_with<C: ContractClient + 'static>(
    args: &EventsArgs,
    client: Arc<C>,
    mut on_event: impl FnMut(String),
) -> anyhow::Result<()> {
    let callback = CallbackContract::new(args.address, client);
    let filter = callback.dummy_event_filter(args.a);
    let mut events = callback
        .watch_events(&filter, Duration::from_millis(args.poll_interval_millis))
        .await?;

    while let Some(event) = events.next().await {
        let (event, log) = event?;
        on_event(format_event(&event, &log));
    }
    Ok(())
}

async fn query_with<C: ContractClient>(
    args: &EventsArgs,
    client: Arc<C>,
) -> anyhow::Result<Vec<String>> {
    let callback = CallbackContract::new(args.address, client);
    let mut filter = callback.dummy_event_filter(args.a);
    if let Some(block) = args.from_block {
        filter = filter.from_block(block);
    }
    if let Some(block) = args.to_block {
        filter = filter.to_block(block);
    }

    let events = callback.query_events(&filter).await?;
    tracing::debug!("found {} DummyEvent logs", events.len());

    Ok(events
        .iter()
        .map(|(event, log)| format_event(event, log))
        .collect())
}

fn format_event(event: &DummyEvent, log: &Log) -> String {
    format!(
        "block {} tx {:?}: a={} b={} c={}",
        log.block_number
            .map_or_else(|| "pending".to_string(), |b| b.to_string()),
        log.transaction_hash.unwrap_or_default(),
        event.a,
        event.b,
        event.c
    )
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;
    use alloy_sol_types::SolEvent;
    use arb_provider::MockContractClient;
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};

    fn dummy_log(address: Address, a: u64, block: u64) -> Log {
        let event = DummyEvent {
            a: U256::from(a),
            b: U256::from(5),
            c: U256::from(6),
        };
        Log {
            inner: alloy_primitives::Log {
                address,
                data: event.encode_log_data(),
            },
            block_number: Some(block),
            transaction_hash: Some(B256::repeat_byte(block as u8)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_query_events() {
        let address = Address::repeat_byte(0x33);
        let opt = Cli::try_parse_from([
            "arb",
            "events",
            "0x3333333333333333333333333333333333333333",
            "--a",
            "2",
            "--from_block",
            "10",
        ])
        .unwrap();
        let Command::Events(args) = opt.command else {
            panic!("expected events");
        };

        let logs = vec![dummy_log(address, 1, 11), dummy_log(address, 2, 12)];
        let mut client = MockContractClient::unsigned();
        client
            .expect_get_logs()
            .withf(|filter| filter.get_from_block() == Some(10))
            .times(1)
            .returning(move |_| Ok(logs.clone()));

        let lines = query_with(&args, Arc::new(client)).await.unwrap();
        assert_eq!(
            lines,
            vec![format!(
                "block 12 tx {:?}: a=2 b=5 c=6",
                B256::repeat_byte(12)
            )]
        );
    }

    #[tokio::test]
    async fn test_watch_events() {
        let address = Address::repeat_byte(0x33);
        let opt = Cli::try_parse_from([
            "arb",
            "events",
            "0x3333333333333333333333333333333333333333",
            "--watch",
            "--poll_interval_millis",
            "1",
        ])
        .unwrap();
        let Command::Events(args) = opt.command else {
            panic!("expected events");
        };
        assert!(args.watch);

        let mut polls = vec![
            vec![dummy_log(address, 1, 11)],
            vec![dummy_log(address, 2, 12)],
        ]
        .into_iter();
        let mut client = MockContractClient::unsigned();
        client
            .expect_new_log_filter()
            .times(1)
            .returning(|_| Ok(U256::from(1)));
        client.expect_get_filter_changes().returning(move |_| match polls.next() {
            Some(logs) => Ok(logs),
            None => Err(anyhow::anyhow!("filter uninstalled").into()),
        });

        let mut lines = vec![];
        let err = watch_with(&args, Arc::new(client), |line| lines.push(line))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("filter uninstalled"));
        assert_eq!(
            lines,
            vec![
                format!("block 11 tx {:?}: a=1 b=5 c=6", B256::repeat_byte(11)),
                format!("block 12 tx {:?}: a=2 b=5 c=6", B256::repeat_byte(12)),
            ]
        );
    }
}
