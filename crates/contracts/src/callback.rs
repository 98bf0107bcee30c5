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

//! Bindings for the `Callback` test contract.

use std::sync::LazyLock;

use alloy_json_abi::JsonAbi;
use alloy_sol_macro::sol;

use crate::ContractSpec;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    interface ICallback {
        event DummyEvent(uint256 indexed a, uint256 b, uint256 c);

        function doCallback() external returns (uint256, uint256);

        function sendDummies() external;
    }
}

static CALLBACK_ABI: LazyLock<JsonAbi> =
    LazyLock::new(|| crate::parse_embedded_abi("Callback", include_str!("../abi/Callback.json")));

/// The `Callback` contract. Not deployable from this crate, attach to an existing instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Callback;

impl ContractSpec for Callback {
    const NAME: &'static str = "Callback";

    fn abi() -> &'static JsonAbi {
        &CALLBACK_ABI
    }
}

#[cfg(test)]
mod tests {
    use alloy_sol_types::{SolCall, SolEvent};

    use super::{ICallback::*, *};

    #[test]
    fn test_abi_matches_declaration() {
        let abi = Callback::abi();

        let functions = abi
            .functions()
            .map(|f| (f.signature(), f.selector().0))
            .collect::<Vec<_>>();
        assert_eq!(
            functions,
            vec![
                (
                    doCallbackCall::SIGNATURE.to_string(),
                    doCallbackCall::SELECTOR
                ),
                (
                    sendDummiesCall::SIGNATURE.to_string(),
                    sendDummiesCall::SELECTOR
                ),
            ]
        );

        let event = abi.events().next().unwrap();
        assert_eq!(event.signature(), DummyEvent::SIGNATURE);
        assert_eq!(event.selector(), DummyEvent::SIGNATURE_HASH);
        assert_eq!(
            event.inputs.iter().map(|i| i.indexed).collect::<Vec<_>>(),
            vec![true, false, false]
        );
    }

    #[test]
    fn test_do_callback_outputs() {
        let abi = Callback::abi();
        let do_callback = &abi.function("doCallback").unwrap()[0];
        assert_eq!(do_callback.outputs.len(), 2);
        assert!(abi.function("sendDummies").unwrap()[0].outputs.is_empty());
    }
}
