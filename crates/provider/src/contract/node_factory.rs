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

use alloy_primitives::{Address, B256, U256};
use arb_contracts::{node_factory::INodeFactory, NodeFactory};

use super::{handle::ContractHandle, method::ContractMethod};

impl<C> ContractHandle<NodeFactory, C> {
    /// `createNode(bytes32,bytes32,bytes32,uint256,uint256)`, resolves to the new node address
    pub fn create_node(
        &self,
        state_hash: B256,
        challenge_hash: B256,
        confirm_data: B256,
        prev: U256,
        deadline_block: U256,
    ) -> ContractMethod<'_, C, INodeFactory::createNodeCall, Address> {
        self.typed(
            INodeFactory::createNodeCall {
                _stateHash: state_hash,
                _challengeHash: challenge_hash,
                _confirmData: confirm_data,
                _prev: prev,
                _deadlineBlock: deadline_block,
            },
            |r| r._0,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alloy_dyn_abi::DynSolValue;
    use alloy_primitives::{Bytes, TxKind};
    use alloy_sol_types::SolCall;

    use super::*;
    use crate::{MockContractClient, NodeFactoryContract};

    fn args() -> (B256, B256, B256, U256, U256) {
        (
            B256::repeat_byte(1),
            B256::repeat_byte(2),
            B256::repeat_byte(3),
            U256::from(4),
            U256::from(100),
        )
    }

    fn dyn_args() -> Vec<DynSolValue> {
        let (state, challenge, confirm, prev, deadline) = args();
        vec![
            DynSolValue::FixedBytes(state, 32),
            DynSolValue::FixedBytes(challenge, 32),
            DynSolValue::FixedBytes(confirm, 32),
            DynSolValue::Uint(prev, 256),
            DynSolValue::Uint(deadline, 256),
        ]
    }

    #[tokio::test]
    async fn test_typed_and_signature_forms_agree() {
        let address = Address::repeat_byte(0x10);
        let node = Address::repeat_byte(0x20);
        let (state, challenge, confirm, prev, deadline) = args();
        let expected: Bytes = INodeFactory::createNodeCall {
            _stateHash: state,
            _challengeHash: challenge,
            _confirmData: confirm,
            _prev: prev,
            _deadlineBlock: deadline,
        }
        .abi_encode()
        .into();

        let mut client = MockContractClient::unsigned();
        let calldata = expected.clone();
        client
            .expect_call()
            .withf(move |tx, _| {
                tx.to == Some(TxKind::Call(address)) && tx.input.input() == Some(&calldata)
            })
            .times(2)
            .returning(move |_, _| {
                Ok(INodeFactory::createNodeCall::abi_encode_returns(&(node,)).into())
            });

        let handle = NodeFactoryContract::new(address, Arc::new(client));
        let typed = handle.create_node(state, challenge, confirm, prev, deadline);
        let by_signature = handle
            .method(
                "createNode(bytes32,bytes32,bytes32,uint256,uint256)",
                &dyn_args(),
            )
            .unwrap();
        let by_name = handle.method("createNode", &dyn_args()).unwrap();

        assert_eq!(typed.calldata(), expected);
        assert_eq!(by_signature.calldata(), &expected);
        assert_eq!(by_name.calldata(), &expected);
        assert_eq!(typed.populate_transaction(), by_signature.populate_transaction());

        assert_eq!(typed.call().await.unwrap(), node);
        assert_eq!(
            by_signature.call().await.unwrap(),
            vec![DynSolValue::Address(node)]
        );
    }
}
