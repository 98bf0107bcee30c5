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

use alloy_primitives::{B256, U256};
use arb_contracts::{callback::ICallback, Callback};

use super::{events::EventFilter, handle::ContractHandle, method::ContractMethod};

impl<C> ContractHandle<Callback, C> {
    /// `doCallback()`
    pub fn do_callback(&self) -> ContractMethod<'_, C, ICallback::doCallbackCall, (U256, U256)> {
        self.typed(ICallback::doCallbackCall {}, |r| (r._0, r._1))
    }

    /// `sendDummies()`
    pub fn send_dummies(&self) -> ContractMethod<'_, C, ICallback::sendDummiesCall, ()> {
        self.typed(ICallback::sendDummiesCall {}, |_| ())
    }

    /// `DummyEvent` logs, optionally only those with indexed `a` equal to the given value.
    ///
    /// `b` and `c` are not indexed and cannot be filtered on.
    pub fn dummy_event_filter(&self, a: Option<U256>) -> EventFilter<ICallback::DummyEvent> {
        self.event_filter::<ICallback::DummyEvent>()
            .with_topic(0, a.map(|a| B256::from(a.to_be_bytes::<32>())))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alloy_primitives::{Address, Bytes, TxKind};
    use alloy_rpc_types_eth::Log;
    use alloy_sol_types::{SolCall, SolEvent};

    use super::*;
    use crate::{CallbackContract, MockContractClient};

    fn dummy_log(address: Address, a: u64) -> Log {
        let event = ICallback::DummyEvent {
            a: U256::from(a),
            b: U256::from(a * 10),
            c: U256::from(a * 100),
        };
        Log {
            inner: alloy_primitives::Log {
                address,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_do_callback_round_trip() {
        let mut client = MockContractClient::unsigned();
        client.expect_call().times(1).returning(|_, _| {
            Ok(ICallback::doCallbackCall::abi_encode_returns(&(U256::from(1), U256::from(2))).into())
        });

        let handle = CallbackContract::new(Address::repeat_byte(1), Arc::new(client));
        assert_eq!(
            handle.do_callback().call().await.unwrap(),
            (U256::from(1), U256::from(2))
        );
    }

    #[tokio::test]
    async fn test_send_dummies() {
        let address = Address::repeat_byte(1);
        let mut client = MockContractClient::unsigned();
        client
            .expect_send_transaction()
            .withf(move |tx| {
                tx.to == Some(TxKind::Call(address))
                    && tx.input.input()
                        == Some(&Bytes::from(ICallback::sendDummiesCall {}.abi_encode()))
            })
            .times(1)
            .returning(|_| Ok(B256::repeat_byte(7)));

        let handle = CallbackContract::new(address, Arc::new(client));
        let pending = handle.send_dummies().send().await.unwrap();
        assert_eq!(pending.tx_hash(), B256::repeat_byte(7));
    }

    #[tokio::test]
    async fn test_dummy_event_filter() {
        let address = Address::repeat_byte(1);
        let logs = vec![dummy_log(address, 1), dummy_log(address, 2), dummy_log(address, 3)];

        let mut client = MockContractClient::unsigned();
        client
            .expect_get_logs()
            .withf(move |filter| {
                filter.topics[0].matches(&ICallback::DummyEvent::SIGNATURE_HASH)
                    && filter.address.matches(&address)
            })
            .times(2)
            .returning(move |_| Ok(logs.clone()));

        let handle = CallbackContract::new(address, Arc::new(client));

        let all = handle
            .query_events(&handle.dummy_event_filter(None))
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let only_two = handle
            .query_events(&handle.dummy_event_filter(Some(U256::from(2))))
            .await
            .unwrap();
        assert_eq!(only_two.len(), 1);
        assert_eq!(only_two[0].0.b, U256::from(20));
        assert_eq!(only_two[0].0.c, U256::from(200));
    }
}
