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

use arb_contracts::{Callback, Cloneable, NodeFactory};

mod callback;
mod cloneable;
mod node_factory;

mod dynamic;
pub use dynamic::DynContractMethod;

mod events;
pub use events::EventFilter;

mod factory;
pub use factory::{ContractFactory, PendingDeployment};

mod handle;
pub use handle::{ContractHandle, EventStream};

mod method;
pub use method::ContractMethod;

mod overrides;
pub use overrides::Overrides;

mod receipt;
pub use receipt::{PendingTransaction, ReceiptSettings};

/// Handle to a `Callback` contract
pub type CallbackContract<C> = ContractHandle<Callback, C>;

/// Handle to a `Cloneable` contract
pub type CloneableContract<C> = ContractHandle<Cloneable, C>;

/// Factory deploying `Cloneable` contracts
pub type CloneableFactory<C> = ContractFactory<Cloneable, C>;

/// Handle to a node factory, through its `INodeFactory` interface
pub type NodeFactoryContract<C> = ContractHandle<NodeFactory, C>;
