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

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use strum::{Display, EnumIter, EnumString};

use crate::{Callback, Cloneable, ContractSpec, Deployable, NodeFactory};

/// Runtime selector over the contracts with embedded bindings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ContractKind {
    /// `Callback`
    Callback,
    /// `Cloneable`
    Cloneable,
    /// `INodeFactory`
    #[strum(to_string = "INodeFactory", serialize = "NodeFactory")]
    NodeFactory,
}

impl ContractKind {
    /// Contract name, as compiled
    pub fn name(&self) -> &'static str {
        match self {
            Self::Callback => Callback::NAME,
            Self::Cloneable => Cloneable::NAME,
            Self::NodeFactory => NodeFactory::NAME,
        }
    }

    /// Embedded ABI of the contract
    pub fn abi(&self) -> &'static JsonAbi {
        match self {
            Self::Callback => Callback::abi(),
            Self::Cloneable => Cloneable::abi(),
            Self::NodeFactory => NodeFactory::abi(),
        }
    }

    /// Embedded creation bytecode, if the contract is deployable
    pub fn bytecode(&self) -> Option<&'static Bytes> {
        match self {
            Self::Cloneable => Some(Cloneable::bytecode()),
            Self::Callback | Self::NodeFactory => None,
        }
    }

    /// Creation code of a deployable contract taking no constructor arguments
    pub fn deploy_code(&self) -> Option<Bytes> {
        match self {
            Self::Cloneable => Some(Cloneable::deploy_code(&())),
            Self::Callback | Self::NodeFactory => None,
        }
    }
}
