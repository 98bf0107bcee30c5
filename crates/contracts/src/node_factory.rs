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

//! Bindings for the `INodeFactory` interface.

use std::sync::LazyLock;

use alloy_json_abi::JsonAbi;
use alloy_sol_macro::sol;

use crate::ContractSpec;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    interface INodeFactory {
        function createNode(
            bytes32 _stateHash,
            bytes32 _challengeHash,
            bytes32 _confirmData,
            uint256 _prev,
            uint256 _deadlineBlock
        ) external returns (address);
    }
}

static NODE_FACTORY_ABI: LazyLock<JsonAbi> = LazyLock::new(|| {
    crate::parse_embedded_abi("INodeFactory", include_str!("../abi/INodeFactory.json"))
});

/// The rollup node factory, reached through its `INodeFactory` interface
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeFactory;

impl ContractSpec for NodeFactory {
    const NAME: &'static str = "INodeFactory";

    fn abi() -> &'static JsonAbi {
        &NODE_FACTORY_ABI
    }
}

#[cfg(test)]
mod tests {
    use alloy_sol_types::SolCall;

    use super::{INodeFactory::createNodeCall, *};

    #[test]
    fn test_abi_matches_declaration() {
        let abi = NodeFactory::abi();
        let create_node = abi.functions().next().unwrap();
        assert_eq!(
            create_node.signature(),
            "createNode(bytes32,bytes32,bytes32,uint256,uint256)"
        );
        assert_eq!(create_node.signature(), createNodeCall::SIGNATURE);
        assert_eq!(create_node.selector().0, createNodeCall::SELECTOR);
        assert_eq!(create_node.outputs[0].ty, "address");
        assert!(abi.events().next().is_none());
    }
}
