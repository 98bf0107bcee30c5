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

use std::{fmt::Debug, marker::PhantomData};

use alloy_primitives::{Address, B256};
use alloy_rpc_types_eth::{BlockNumberOrTag, Filter, Log};
use alloy_sol_types::SolEvent;

use crate::ProviderResult;

/// Filter for the logs of one event emitted by one contract.
///
/// Terms are the event's indexed parameters, in declaration order. An unset term matches
/// any value.
pub struct EventFilter<E> {
    address: Address,
    topics: [Option<B256>; 3],
    from_block: Option<BlockNumberOrTag>,
    to_block: Option<BlockNumberOrTag>,
    _event: PhantomData<fn() -> E>,
}

impl<E: SolEvent> EventFilter<E> {
    pub(crate) fn new(address: Address) -> Self {
        Self {
            address,
            topics: [None; 3],
            from_block: None,
            to_block: None,
            _event: PhantomData,
        }
    }

    /// Match only logs whose `index`th indexed parameter is `topic`
    pub(crate) fn with_topic(mut self, index: usize, topic: Option<B256>) -> Self {
        self.topics[index] = topic;
        self
    }

    /// First block to search, inclusive
    pub fn from_block(mut self, block: impl Into<BlockNumberOrTag>) -> Self {
        self.from_block = Some(block.into());
        self
    }

    /// Last block to search, inclusive
    pub fn to_block(mut self, block: impl Into<BlockNumberOrTag>) -> Self {
        self.to_block = Some(block.into());
        self
    }

    /// Address of the emitting contract
    pub fn address(&self) -> Address {
        self.address
    }

    /// The `eth_getLogs` filter
    pub fn filter(&self) -> Filter {
        let mut filter = Filter::new()
            .address(self.address)
            .event_signature(E::SIGNATURE_HASH);
        if let Some(topic) = self.topics[0] {
            filter = filter.topic1(topic);
        }
        if let Some(topic) = self.topics[1] {
            filter = filter.topic2(topic);
        }
        if let Some(topic) = self.topics[2] {
            filter = filter.topic3(topic);
        }
        if let Some(block) = self.from_block {
            filter = filter.from_block(block);
        }
        if let Some(block) = self.to_block {
            filter = filter.to_block(block);
        }
        filter
    }

    /// Whether `log` was emitted by this event and contract and matches every set term.
    ///
    /// Block bounds are left to the node.
    pub fn matches(&self, log: &Log) -> bool {
        let topics = log.topics();
        if log.address() != self.address || topics.first() != Some(&E::SIGNATURE_HASH) {
            return false;
        }
        self.topics
            .iter()
            .enumerate()
            .all(|(i, term)| term.is_none() || topics.get(i + 1) == term.as_ref())
    }

    /// Decode the event from `log`
    pub fn decode(&self, log: &Log) -> ProviderResult<E> {
        Ok(E::decode_log_data(log.data(), true)?)
    }
}

impl<E> Clone for EventFilter<E> {
    fn clone(&self) -> Self {
        Self {
            address: self.address,
            topics: self.topics,
            from_block: self.from_block,
            to_block: self.to_block,
            _event: PhantomData,
        }
    }
}

impl<E: SolEvent> Debug for EventFilter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventFilter")
            .field("event", &E::SIGNATURE)
            .field("address", &self.address)
            .field("topics", &self.topics)
            .field("from_block", &self.from_block)
            .field("to_block", &self.to_block)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use arb_contracts::callback::ICallback::DummyEvent;

    use super::*;

    fn log(address: Address, a: u64) -> Log {
        let event = DummyEvent {
            a: U256::from(a),
            b: U256::from(2),
            c: U256::from(3),
        };
        Log {
            inner: alloy_primitives::Log {
                address,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    fn topic(a: u64) -> B256 {
        B256::from(U256::from(a).to_be_bytes::<32>())
    }

    #[test]
    fn test_wildcard_matches_any_value() {
        let address = Address::repeat_byte(1);
        let filter = EventFilter::<DummyEvent>::new(address);
        assert!(filter.matches(&log(address, 1)));
        assert!(filter.matches(&log(address, 2)));
        assert!(!filter.matches(&log(Address::repeat_byte(2), 1)));
    }

    #[test]
    fn test_exact_term() {
        let address = Address::repeat_byte(1);
        let filter = EventFilter::<DummyEvent>::new(address).with_topic(0, Some(topic(5)));
        assert!(filter.matches(&log(address, 5)));
        assert!(!filter.matches(&log(address, 6)));
    }

    #[test]
    fn test_other_event_does_not_match() {
        let address = Address::repeat_byte(1);
        let mut other = log(address, 1);
        other.inner.data = alloy_primitives::LogData::new_unchecked(
            vec![B256::repeat_byte(9), topic(1)],
            Default::default(),
        );
        assert!(!EventFilter::<DummyEvent>::new(address).matches(&other));
    }

    #[test]
    fn test_filter() {
        let address = Address::repeat_byte(1);
        let filter = EventFilter::<DummyEvent>::new(address)
            .with_topic(0, Some(topic(5)))
            .from_block(10u64)
            .to_block(BlockNumberOrTag::Latest)
            .filter();

        assert!(filter.address.matches(&address));
        assert!(filter.topics[0].matches(&DummyEvent::SIGNATURE_HASH));
        assert!(filter.topics[1].matches(&topic(5)));
        assert!(!filter.topics[1].matches(&topic(6)));
        assert!(filter.topics[2].is_empty());
        assert_eq!(filter.get_from_block(), Some(10));
    }

    #[test]
    fn test_decode() {
        let address = Address::repeat_byte(1);
        let filter = EventFilter::<DummyEvent>::new(address);
        let event = filter.decode(&log(address, 4)).unwrap();
        assert_eq!(event.a, U256::from(4));
        assert_eq!(event.b, U256::from(2));
        assert_eq!(event.c, U256::from(3));
    }
}
