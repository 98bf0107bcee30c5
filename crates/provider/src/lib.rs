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

#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! Typed contract clients
//!
//! A contract handle binds an embedded contract ABI to an address and a [`ContractClient`].
//! Every contract function is reachable as a typed method and by its canonical signature,
//! each with call, send, gas estimation and transaction population. Deployable contracts
//! also get a [`ContractFactory`].

mod alloy;
pub use alloy::{
    client::AlloyContractClient, new_alloy_contract_client, new_alloy_provider,
    new_alloy_signing_contract_client, new_alloy_signing_provider,
    provider_timeout::ProviderTimeout,
};

mod contract;
pub use contract::{
    CallbackContract, CloneableContract, CloneableFactory, ContractFactory, ContractHandle,
    ContractMethod, DynContractMethod, EventFilter, EventStream, NodeFactoryContract, Overrides,
    PendingDeployment, PendingTransaction, ReceiptSettings,
};

mod traits;
// re-export alloy RPC types
pub use alloy_rpc_types_eth::{
    BlockId, BlockNumberOrTag, Filter, Log, TransactionInput, TransactionRequest,
};
pub use traits::*;
