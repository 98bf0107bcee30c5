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

//! Bindings for the `Cloneable` contract, the base of every clonable rollup contract.

use std::sync::LazyLock;

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use alloy_sol_macro::sol;

use crate::{ContractSpec, Deployable};

sol! {
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    interface ICloneable {
        function isMaster() external view returns (bool);
    }
}

static CLONEABLE_ABI: LazyLock<JsonAbi> =
    LazyLock::new(|| crate::parse_embedded_abi("Cloneable", include_str!("../abi/Cloneable.json")));

// solc 0.6.11, optimizer enabled
const __CLONEABLE_BYTECODE_HEX: &[u8] = include_bytes!("../bytecode/Cloneable.txt");
const __CLONEABLE_BYTECODE: [u8; 177] = {
    match const_hex::const_decode_to_array(__CLONEABLE_BYTECODE_HEX) {
        Ok(a) => a,
        Err(_) => panic!("Failed to decode cloneable hex"),
    }
};
/// Creation bytecode of the `Cloneable` contract
pub static CLONEABLE_BYTECODE: Bytes = Bytes::from_static(&__CLONEABLE_BYTECODE);

/// The `Cloneable` contract
#[derive(Clone, Copy, Debug, Default)]
pub struct Cloneable;

impl ContractSpec for Cloneable {
    const NAME: &'static str = "Cloneable";

    fn abi() -> &'static JsonAbi {
        &CLONEABLE_ABI
    }
}

impl Deployable for Cloneable {
    // constructor()
    type ConstructorArgs = ();

    fn bytecode() -> &'static Bytes {
        &CLONEABLE_BYTECODE
    }

    fn encode_constructor_args(_args: &Self::ConstructorArgs) -> Vec<u8> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use alloy_sol_types::SolCall;

    use super::{ICloneable::isMasterCall, *};

    #[test]
    fn test_abi_matches_declaration() {
        let abi = Cloneable::abi();
        let is_master = &abi.function("isMaster").unwrap()[0];
        assert_eq!(is_master.signature(), isMasterCall::SIGNATURE);
        assert_eq!(is_master.selector().0, [0x6f, 0x79, 0x1d, 0x29]);
        assert_eq!(is_master.selector().0, isMasterCall::SELECTOR);
        assert!(abi.constructor().unwrap().inputs.is_empty());
    }

    #[test]
    fn test_bytecode() {
        let bytecode = Cloneable::bytecode();
        assert_eq!(bytecode.len(), 177);
        assert_eq!(&bytecode[..4], &[0x60u8, 0x80, 0x60, 0x40]);
        // runtime dispatcher checks the isMaster selector
        assert!(bytecode
            .windows(4)
            .any(|w| w == isMasterCall::SELECTOR.as_slice()));
    }

    #[test]
    fn test_no_constructor_args() {
        assert!(Cloneable::encode_constructor_args(&()).is_empty());
    }
}
