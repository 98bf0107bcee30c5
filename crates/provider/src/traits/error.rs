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

use alloy_primitives::{Address, TxHash};
use alloy_transport::TransportError;

/// Error enumeration for contract clients and handles
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// RPC Error, including reverts reported by the node
    #[error(transparent)]
    RPC(#[from] TransportError),
    /// Typed ABI encoding or decoding error
    #[error(transparent)]
    Abi(#[from] alloy_sol_types::Error),
    /// Dynamic ABI encoding or decoding error
    #[error(transparent)]
    DynAbi(#[from] alloy_dyn_abi::Error),
    /// No function with this name or signature in the contract ABI
    #[error("function {0} not found in the {1} ABI")]
    UnknownFunction(String, &'static str),
    /// Function name is overloaded, the full signature is required
    #[error("function {0} is overloaded in the {1} ABI, use its full signature")]
    AmbiguousFunction(String, &'static str),
    /// No code at the contract address
    #[error("no contract code at {0}")]
    NotDeployed(Address),
    /// Transaction was mined but reverted
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    /// Transaction was not mined in time
    #[error("timed out waiting for the receipt of transaction {0}")]
    ReceiptTimeout(TxHash),
    /// Internal errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result of a provider method call
pub type ProviderResult<T> = Result<T, ProviderError>;
