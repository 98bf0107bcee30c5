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

//! Contract bindings for the rollup contracts.
//!
//! Every contract module declares the contract interface with `sol!` and embeds the
//! JSON ABI it was compiled with. Deployable contracts also embed their creation bytecode.

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;

pub mod callback;
pub use callback::Callback;

pub mod cloneable;
pub use cloneable::Cloneable;

mod kind;
pub use kind::ContractKind;

pub mod node_factory;
pub use node_factory::NodeFactory;

/// A contract with an embedded ABI
pub trait ContractSpec: Send + Sync + 'static {
    /// Contract name, as compiled
    const NAME: &'static str;

    /// The ABI the contract was compiled with
    fn abi() -> &'static JsonAbi;
}

/// A contract that can be deployed from embedded creation bytecode
pub trait Deployable: ContractSpec {
    /// Arguments to the contract constructor
    type ConstructorArgs;

    /// Creation bytecode
    fn bytecode() -> &'static Bytes;

    /// ABI encoded constructor arguments, appended to the bytecode in the creation transaction
    fn encode_constructor_args(args: &Self::ConstructorArgs) -> Vec<u8>;

    /// Creation bytecode followed by the encoded constructor arguments
    fn deploy_code(args: &Self::ConstructorArgs) -> Bytes {
        let mut code = Self::bytecode().to_vec();
        code.extend(Self::encode_constructor_args(args));
        code.into()
    }
}

// Only ever called on ABI files compiled into the crate, covered by the module tests.
fn parse_embedded_abi(name: &str, json: &str) -> JsonAbi {
    match serde_json::from_str(json) {
        Ok(abi) => abi,
        Err(e) => panic!("embedded {name} ABI should be valid JSON: {e}"),
    }
}
